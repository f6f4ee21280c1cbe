use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One entry of the catalog document.
///
/// Every field is optional on the wire. Records with gaps still decode so a
/// single sloppy entry never takes the whole catalog down with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub level: String,
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_topics",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub repo: String,
}

impl Course {
    pub fn new(
        title: impl Into<String>,
        level: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            level: level.into(),
            repo: repo.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = non_empty(version.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = non_empty(language.into());
        self
    }

    pub fn with_topics<I, T>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Names of the fields a card needs to be useful but which are blank here.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.repo.is_empty() {
            missing.push("repo");
        }
        missing
    }
}

/// Top-level shape of `catalog.json`.
///
/// The body must be a JSON object. `courses` entries that are not objects
/// decode as blank records; their positions are kept in `malformed_records`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogDocument {
    pub courses: Vec<Course>,
    #[serde(skip)]
    pub malformed_records: Vec<usize>,
}

impl<'de> Deserialize<'de> for CatalogDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut body = Map::<String, Value>::deserialize(deserializer)?;
        let records = match body.remove("courses") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(records)) => records,
            Some(_) => return Err(de::Error::custom("`courses` must be a list of records")),
        };

        let mut document = Self::default();
        for (index, record) in records.into_iter().enumerate() {
            if record.is_object() {
                let course = Course::deserialize(record).map_err(de::Error::custom)?;
                document.courses.push(course);
            } else {
                document.malformed_records.push(index);
                document.courses.push(Course::default());
            }
        }
        Ok(document)
    }
}

/// Distinct `level` values in first-seen order.
pub fn observed_levels(courses: &[Course]) -> Vec<String> {
    let mut levels: Vec<String> = Vec::new();
    for course in courses {
        if !levels.iter().any(|level| level == &course.level) {
            levels.push(course.level.clone());
        }
    }
    levels
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Text form of a scalar JSON value. Containers and `null` have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(v) => Some(v.clone()),
        Value::Number(v) => Some(v.to_string()),
        Value::Bool(v) => Some(v.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `null`, `false`, `0` and `""` leave an optional block out entirely.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(v) => !v,
        Value::Number(v) => v.as_f64() == Some(0.0),
        Value::String(v) => v.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        return Ok(None);
    }
    Ok(scalar_text(&value))
}

fn lenient_topics<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items.iter().filter_map(scalar_text).collect())
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
