//! Catalog retrieval: one fetch, one parse.

use std::{path::PathBuf, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use shared::domain::{CatalogDocument, Course};
use tracing::{info, warn};
use url::Url;

use crate::error::LoadError;

/// Well-known name of the catalog document relative to the site root.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location for diagnostics.
    fn describe(&self) -> String;
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

pub struct HttpCatalogSource {
    http: Client,
    url: Url,
}

impl HttpCatalogSource {
    pub fn new(location: &str) -> Result<Self, LoadError> {
        Self::with_client(Client::new(), location)
    }

    pub fn with_timeout(location: &str, timeout: Duration) -> Result<Self, LoadError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| LoadError::Http {
                url: location.to_string(),
                source,
            })?;
        Self::with_client(http, location)
    }

    pub fn with_client(http: Client, location: &str) -> Result<Self, LoadError> {
        Ok(Self {
            http,
            url: resolve_catalog_url(location)?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let http_error = |source| LoadError::Http {
            url: self.url.to_string(),
            source,
        };
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(http_error)?;
        let body = response.bytes().await.map_err(http_error)?;
        Ok(body.to_vec())
    }
}

pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn resolved_path(&self) -> PathBuf {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) if meta.is_dir() => self.path.join(CATALOG_FILE_NAME),
            _ => self.path.clone(),
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let path = self.resolved_path().await;
        tokio::fs::read(&path)
            .await
            .map_err(|source| LoadError::Io { path, source })
    }
}

/// Picks an HTTP source for `http(s)://` locations and a file source otherwise.
pub fn source_for(
    location: &str,
    timeout: Option<Duration>,
) -> Result<Box<dyn CatalogSource>, LoadError> {
    let location = location.trim();
    let lower = location.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        let source = match timeout {
            Some(timeout) => HttpCatalogSource::with_timeout(location, timeout)?,
            None => HttpCatalogSource::new(location)?,
        };
        return Ok(Box::new(source));
    }
    Ok(Box::new(FileCatalogSource::new(location)))
}

/// A location ending in `/` names the site root; the catalog lives beneath it.
pub fn resolve_catalog_url(location: &str) -> Result<Url, LoadError> {
    let invalid = |source| LoadError::InvalidUrl {
        url: location.to_string(),
        source,
    };
    let url = Url::parse(location.trim()).map_err(invalid)?;
    if url.path().ends_with('/') {
        return url.join(CATALOG_FILE_NAME).map_err(invalid);
    }
    Ok(url)
}

pub fn parse_catalog(body: &[u8]) -> Result<CatalogDocument, LoadError> {
    Ok(serde_json::from_slice(body)?)
}

pub async fn load<S>(source: &S) -> Result<Vec<Course>, LoadError>
where
    S: CatalogSource + ?Sized,
{
    let body = source.fetch().await?;
    let document = parse_catalog(&body)?;

    for index in document.malformed_records.iter().copied() {
        warn!(index, "catalog: record is not an object, rendered blank");
    }

    for (index, course) in document.courses.iter().enumerate() {
        if document.malformed_records.contains(&index) {
            continue;
        }
        let missing = course.missing_required_fields();
        if !missing.is_empty() {
            warn!(
                index,
                level = %course.level,
                missing = ?missing,
                "catalog: record rendered with blank fields"
            );
        }
    }

    info!(
        source = %source.describe(),
        courses = document.courses.len(),
        "catalog: loaded courses"
    );
    Ok(document.courses)
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
