use std::fmt;

use crate::domain::Course;

/// Filter key that selects every course.
pub const ALL_FILTER: &str = "all";

/// Active filter of a catalog view: everything, or one exact level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilterKey {
    #[default]
    All,
    Level(String),
}

impl FilterKey {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_FILTER {
            Self::All
        } else {
            Self::Level(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_FILTER,
            Self::Level(level) => level,
        }
    }

    /// Exact, case-sensitive comparison against `Course::level`.
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            Self::All => true,
            Self::Level(level) => course.level == *level,
        }
    }
}

impl From<&str> for FilterKey {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Courses selected by `key`, in their original order.
pub fn filter_courses<'a>(courses: &'a [Course], key: &FilterKey) -> Vec<&'a Course> {
    courses.iter().filter(|course| key.matches(course)).collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
