//! Catalog domain module.
//!
//! This module owns the knowledge-base content served by the MCP server:
//! enterprise rules, development prompts and task instructions.
//!
//! ## Architecture
//!
//! - `record.rs` - Record model, domains and filterable fields
//! - `source.rs` - Data providers that load raw collections (`RecordSource`)
//! - `store.rs` - The immutable in-memory `Catalog`
//! - `query.rs` - Scoped, filtered queries over the catalog
//! - `error.rs` - Load failures
//!
//! The catalog is built once at startup and never mutated afterwards, so it
//! can be shared between connections behind an `Arc` without any locking.

mod error;
mod query;
mod record;
mod source;
mod store;

pub use error::{LoadCause, LoadFailure};
pub use query::{Filters, Scope};
pub use record::{Domain, Field, Record, render_records};
pub use source::{FileSource, MemorySource, RecordSource};
pub use store::Catalog;
