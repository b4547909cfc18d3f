//! Development prompts resource.

use super::ResourceDefinition;
use crate::domains::catalog::Scope;

/// Every development prompt.
pub struct AllPromptsResource;

impl ResourceDefinition for AllPromptsResource {
    const URI: &'static str = "enterprise://prompts/all";
    const NAME: &'static str = "Development Prompts";
    const DESCRIPTION: &'static str = "All development prompts and best practices";
    const SCOPE: Scope = Scope::Prompts;
}
