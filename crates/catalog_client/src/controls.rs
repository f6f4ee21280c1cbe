use shared::{
    domain::{observed_levels, Course},
    filter::{FilterKey, ALL_FILTER},
};

/// One filter button of the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub key: FilterKey,
    pub label: String,
    pub active: bool,
}

impl FilterControl {
    pub fn new(key: FilterKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            active: false,
        }
    }

    /// The `all` control, active on a freshly loaded page.
    pub fn all() -> Self {
        Self {
            key: FilterKey::All,
            label: "All".to_string(),
            active: true,
        }
    }
}

/// `All` followed by one control per observed level.
pub fn default_controls(courses: &[Course]) -> Vec<FilterControl> {
    let mut controls = vec![FilterControl::all()];
    controls.extend(
        observed_levels(courses)
            .into_iter()
            .filter(|level| !level.is_empty() && level != ALL_FILTER)
            .map(|level| {
                let label = capitalize(&level);
                FilterControl::new(FilterKey::Level(level), label)
            }),
    );
    controls
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
