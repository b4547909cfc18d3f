//! Data providers for the catalog.
//!
//! A `RecordSource` yields the raw, ordered collection of one domain. Sources
//! report failures; deciding what to do about them is the catalog's job.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::LoadFailure;
use super::record::{Domain, Record};

/// Trait for loading domain collections.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load every record of `domain`, preserving source order.
    async fn load(&self, domain: Domain) -> Result<Vec<Record>, LoadFailure>;
}

/// Loads collections from JSON files laid out as
/// `<base>/<domain>/<domain>.json`.
///
/// Each file must hold a JSON array. Entries that are not objects are
/// skipped with a warning; the rest of the collection is still served.
#[derive(Debug, Clone)]
pub struct FileSource {
    base_path: PathBuf,
}

impl FileSource {
    /// Create a file source rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Root directory of the knowledge files.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file backing `domain`.
    pub fn path_for(&self, domain: Domain) -> PathBuf {
        self.base_path
            .join(domain.as_str())
            .join(format!("{}.json", domain.as_str()))
    }
}

#[async_trait]
impl RecordSource for FileSource {
    async fn load(&self, domain: Domain) -> Result<Vec<Record>, LoadFailure> {
        let path = self.path_for(domain);
        debug!("Reading {} from {}", domain, path.display());

        let data = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LoadFailure::io(domain, &path, e))?;

        let entries: Vec<Value> =
            serde_json::from_str(&data).map_err(|e| LoadFailure::parse(domain, &path, e))?;

        Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry {
                Value::Object(fields) => Some(Record::new(fields)),
                other => {
                    warn!(
                        "Skipping non-object entry {} in {}: {}",
                        index,
                        path.display(),
                        other
                    );
                    None
                }
            })
            .collect())
    }
}

/// In-memory source, for embedding a catalog without touching the filesystem.
///
/// Domains that were never provided fail to load like a missing file would.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: HashMap<Domain, Vec<Record>>,
}

impl MemorySource {
    /// Create an empty source where every domain is unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the collection for `domain`.
    pub fn with(mut self, domain: Domain, records: Vec<Record>) -> Self {
        self.collections.insert(domain, records);
        self
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    async fn load(&self, domain: Domain) -> Result<Vec<Record>, LoadFailure> {
        self.collections.get(&domain).cloned().ok_or_else(|| {
            LoadFailure::io(
                domain,
                format!("memory://{}", domain),
                std::io::Error::new(std::io::ErrorKind::NotFound, "collection not provided"),
            )
        })
    }
}
