//! Task instructions resource.

use super::ResourceDefinition;
use crate::domains::catalog::Scope;

/// Every task instruction.
pub struct AllInstructionsResource;

impl ResourceDefinition for AllInstructionsResource {
    const URI: &'static str = "enterprise://instructions/all";
    const NAME: &'static str = "Task Instructions";
    const DESCRIPTION: &'static str = "Step-by-step instructions for common tasks";
    const SCOPE: Scope = Scope::Instructions;
}
