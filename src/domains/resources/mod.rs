//! Resources domain module.
//!
//! Resources are fixed, read-only URIs that each return a whole catalog
//! scope as JSON.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceEntry, ResourceService};
