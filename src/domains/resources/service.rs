//! Resource service implementation.
//!
//! The ResourceService resolves resource URIs against the fixed registry and
//! renders the matching catalog scope.

use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::{info, warn};

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::domains::catalog::{Catalog, Filters, Scope, render_records};

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The catalog scope served under this URI.
    pub scope: Scope,
}

/// Service for listing and reading catalog resources.
pub struct ResourceService {
    catalog: Arc<Catalog>,

    /// Registered resources, in listing order.
    entries: Vec<ResourceEntry>,
}

impl ResourceService {
    /// Create a new ResourceService over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        info!("Initializing ResourceService");

        let entries = get_all_resources();
        for entry in &entries {
            info!("Registering resource: {}", entry.resource.raw.uri);
        }

        Self { catalog, entries }
    }

    /// List all available resources.
    ///
    /// The list is fixed and does not depend on catalog contents.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.entries
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| {
                warn!("Unknown resource requested: {}", uri);
                ResourceError::unknown_resource(uri)
            })?;

        let records = self.catalog.query(entry.scope, &Filters::new());
        let text = render_records(&records).map_err(|e| ResourceError::internal(e.to_string()))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text,
                meta: None,
            }],
        })
    }
}
