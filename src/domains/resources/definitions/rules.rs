//! Rule resources, one per rule subject.

use super::ResourceDefinition;
use crate::domains::catalog::Scope;

/// Every microservice rule.
pub struct MicroserviceRulesResource;

impl ResourceDefinition for MicroserviceRulesResource {
    const URI: &'static str = "enterprise://rules/microservices";
    const NAME: &'static str = "Microservice Rules";
    const DESCRIPTION: &'static str = "All rules for microservice development";
    const SCOPE: Scope = Scope::MicroserviceRules;
}

/// Every microfrontend rule.
pub struct MicrofrontendRulesResource;

impl ResourceDefinition for MicrofrontendRulesResource {
    const URI: &'static str = "enterprise://rules/microfrontends";
    const NAME: &'static str = "Microfrontend Rules";
    const DESCRIPTION: &'static str = "All rules for microfrontend development";
    const SCOPE: Scope = Scope::MicrofrontendRules;
}
