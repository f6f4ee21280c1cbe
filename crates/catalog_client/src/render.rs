//! Pure course-card rendering.

use shared::domain::Course;

use crate::markup::{Element, Markup, Node};

pub const LOAD_ERROR_MESSAGE: &str = "Unable to load course catalog. Please try again later.";
pub const NO_COURSES_MESSAGE: &str = "No courses available at this time.";

const LEVEL_CLASS_PREFIX: &str = "level-";
const LINK_LABEL: &str = "View Course →";
const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// What the container should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRequest<'a> {
    /// The catalog could not be loaded; only ever issued by the loader.
    LoadFailed,
    Courses(Vec<&'a Course>),
}

impl<'a> RenderRequest<'a> {
    pub fn all(courses: &'a [Course]) -> Self {
        Self::Courses(courses.iter().collect())
    }
}

pub fn render(request: &RenderRequest<'_>) -> Markup {
    render_view(request).to_markup()
}

pub fn render_view(request: &RenderRequest<'_>) -> Node {
    match request {
        RenderRequest::LoadFailed => notice("error-message", LOAD_ERROR_MESSAGE),
        RenderRequest::Courses(courses) if courses.is_empty() => {
            notice("no-courses", NO_COURSES_MESSAGE)
        }
        RenderRequest::Courses(courses) => {
            Node::Fragment(courses.iter().map(|course| course_card(course)).collect())
        }
    }
}

pub fn course_card(course: &Course) -> Node {
    let header = Element::new("div")
        .class("course-header")
        .child(Element::new("h2").class("course-title").text(&course.title))
        .child(
            Element::new("span")
                .class(format!("course-level {LEVEL_CLASS_PREFIX}{}", course.level))
                .text(&course.level),
        );

    let mut card = Element::new("article")
        .class("course-card")
        .attr("data-level", &course.level)
        .child(header);

    if let Some(description) = present(&course.description) {
        card = card.child(
            Element::new("p")
                .class("course-description")
                .text(description),
        );
    }

    card = card.child(course_meta(course));

    if !course.topics.is_empty() {
        card = card.child(
            Element::new("div").class("topics").children(
                course
                    .topics
                    .iter()
                    .map(|topic| Node::from(Element::new("span").class("topic-tag").text(topic))),
            ),
        );
    }

    card.child(
        Element::new("a")
            .attr("href", safe_href(&course.repo))
            .class("course-link")
            .attr("target", "_blank")
            .attr("rel", "noopener")
            .text(LINK_LABEL),
    )
    .into()
}

/// Link target for a course, with script-capable schemes replaced by `#`.
pub fn safe_href(raw: &str) -> &str {
    let scheme: String = raw
        .chars()
        .filter(|ch| !ch.is_whitespace() && !ch.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    if BLOCKED_SCHEMES
        .iter()
        .any(|blocked| scheme.starts_with(blocked))
    {
        "#"
    } else {
        raw
    }
}

fn course_meta(course: &Course) -> Element {
    let mut meta = Element::new("div").class("course-meta");
    if let Some(version) = present(&course.version) {
        meta = meta.child(meta_item(format!("📦 v{version}")));
    }
    if let Some(language) = present(&course.language) {
        meta = meta.child(meta_item(format!("🌐 {}", language.to_uppercase())));
    }
    meta
}

fn meta_item(text: String) -> Element {
    Element::new("span").class("course-meta-item").text(text)
}

fn notice(class: &str, message: &str) -> Node {
    Element::new("div")
        .class(class)
        .child(Element::new("p").text(message))
        .into()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
