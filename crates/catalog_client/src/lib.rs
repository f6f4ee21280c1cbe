//! Course catalog client: loads `catalog.json`, renders course cards into a
//! display surface and re-renders them as filter controls are activated.

use shared::{
    domain::Course,
    filter::{filter_courses, FilterKey},
};
use tracing::{debug, error};

pub mod controls;
pub mod error;
pub mod loader;
pub mod markup;
pub mod page;
pub mod render;
pub mod surface;

pub use controls::{default_controls, FilterControl};
pub use error::{FilterError, LoadError};
pub use loader::{load, CatalogSource, FileCatalogSource, HttpCatalogSource};
pub use markup::Markup;
pub use page::PageShell;
pub use render::{render, RenderRequest};
pub use surface::{DisplaySurface, MemorySurface};

/// State of one catalog view: the loaded courses, the active filter and the
/// controls that change it.
///
/// The course list is written once by [`CatalogPage::start`] and only read
/// afterwards. Controls are wired after the first render, so no filter can be
/// applied before the list exists.
pub struct CatalogPage<S> {
    courses: Vec<Course>,
    load_failed: bool,
    active_filter: FilterKey,
    controls: Vec<FilterControl>,
    surface: S,
    current: Markup,
}

impl<S: DisplaySurface> CatalogPage<S> {
    /// Loads the catalog, renders it, then wires the controls returned by
    /// `discover_controls`.
    ///
    /// A failed load is logged and rendered as the error block; it is never
    /// returned to the caller.
    pub async fn start<C, F>(source: &C, surface: S, discover_controls: F) -> Self
    where
        C: CatalogSource + ?Sized,
        F: FnOnce(&[Course]) -> Vec<FilterControl>,
    {
        let mut page = Self {
            courses: Vec::new(),
            load_failed: false,
            active_filter: FilterKey::All,
            controls: Vec::new(),
            surface,
            current: Markup::default(),
        };

        match load(source).await {
            Ok(courses) => {
                page.courses = courses;
                page.render_active();
            }
            Err(err) => {
                error!(
                    source = %source.describe(),
                    error = %err,
                    "catalog: failed to load courses"
                );
                page.load_failed = true;
                page.show(render(&RenderRequest::LoadFailed));
            }
        }

        let controls = discover_controls(&page.courses);
        page.setup(controls);
        page
    }

    fn setup(&mut self, controls: Vec<FilterControl>) {
        debug!(controls = controls.len(), "catalog: filter controls wired");
        self.controls = controls;
    }

    /// Applies the filter carried by the control with key `raw_key` and
    /// re-renders the container.
    pub fn on_filter_activated(&mut self, raw_key: &str) -> Result<&Markup, FilterError> {
        let key = FilterKey::parse(raw_key);
        let Some(index) = self.controls.iter().position(|control| control.key == key) else {
            return Err(FilterError::UnknownControl(raw_key.to_string()));
        };

        for control in &mut self.controls {
            control.active = false;
        }
        self.controls[index].active = true;

        debug!(filter = %key, "catalog: filter activated");
        self.active_filter = key;
        self.render_active();
        Ok(&self.current)
    }

    pub fn visible_courses(&self) -> Vec<&Course> {
        filter_courses(&self.courses, &self.active_filter)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn active_filter(&self) -> &FilterKey {
        &self.active_filter
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    /// Markup most recently written to the surface.
    pub fn current(&self) -> &Markup {
        &self.current
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Full host page with the controls and the current container content.
    pub fn document(&self, shell: &PageShell<'_>) -> Markup {
        shell.render(&self.controls, &self.current)
    }

    fn render_active(&mut self) {
        let markup = render(&RenderRequest::Courses(filter_courses(
            &self.courses,
            &self.active_filter,
        )));
        self.show(markup);
    }

    fn show(&mut self, markup: Markup) {
        self.surface.replace_container(&markup);
        self.current = markup;
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
