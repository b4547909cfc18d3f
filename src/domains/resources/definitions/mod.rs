//! Resource definitions module.
//!
//! Each resource is a fixed URI bound to a catalog scope. Reading it returns
//! the whole scope, unfiltered, as JSON.

mod instructions;
mod prompts;
mod rules;

use crate::domains::catalog::Scope;

pub use instructions::AllInstructionsResource;
pub use prompts::AllPromptsResource;
pub use rules::{MicrofrontendRulesResource, MicroserviceRulesResource};

/// MIME type of every catalog resource.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str = JSON_MIME_TYPE;

    /// The catalog scope served by this resource.
    const SCOPE: Scope;
}
