//! Catalog-specific error types.

use std::path::PathBuf;

use thiserror::Error;

use super::record::Domain;

/// A domain collection could not be loaded from its source.
///
/// Load failures never reach protocol callers: the catalog recovers by
/// serving an empty collection for the affected domain.
#[derive(Debug, Error)]
#[error("Failed to load {domain}: {cause}")]
pub struct LoadFailure {
    /// The domain whose collection failed to load.
    pub domain: Domain,

    /// What went wrong.
    #[source]
    pub cause: LoadCause,
}

/// The underlying reason for a [`LoadFailure`].
#[derive(Debug, Error)]
pub enum LoadCause {
    /// The source could not be read (missing file, permissions, ...).
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source was read but is not a JSON array.
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadFailure {
    /// Create a failure caused by an unreadable source.
    pub fn io(domain: Domain, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            domain,
            cause: LoadCause::Io {
                path: path.into(),
                source,
            },
        }
    }

    /// Create a failure caused by malformed content.
    pub fn parse(domain: Domain, path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self {
            domain,
            cause: LoadCause::Parse {
                path: path.into(),
                source,
            },
        }
    }
}
