//! Scoped, filtered queries over the catalog.
//!
//! Filtering is exact, case-sensitive string equality. Results always keep
//! the order of the underlying collection.

use std::collections::BTreeMap;

use super::record::{Domain, Field, Record};
use super::store::Catalog;

/// What a query is about: a base domain, optionally narrowed to a rule subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Rules whose subject is `microservice`.
    MicroserviceRules,
    /// Rules whose subject is `microfrontend`.
    MicrofrontendRules,
    /// All prompts.
    Prompts,
    /// All instructions.
    Instructions,
}

impl Scope {
    /// The collection this scope reads from.
    pub fn domain(&self) -> Domain {
        match self {
            Self::MicroserviceRules | Self::MicrofrontendRules => Domain::Rules,
            Self::Prompts => Domain::Prompts,
            Self::Instructions => Domain::Instructions,
        }
    }

    /// Required rule subject, for rule scopes.
    pub fn subject(&self) -> Option<&'static str> {
        match self {
            Self::MicroserviceRules => Some("microservice"),
            Self::MicrofrontendRules => Some("microfrontend"),
            Self::Prompts | Self::Instructions => None,
        }
    }

    fn admits(&self, record: &Record) -> bool {
        self.subject()
            .is_none_or(|subject| record.field(Field::Subject) == Some(subject))
    }
}

/// Equality constraints applied on top of a scope.
///
/// Absent or empty values add no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    constraints: BTreeMap<Field, String>,
}

impl Filters {
    /// No constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`, unless `value` is absent or empty.
    pub fn with(mut self, field: Field, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.constraints.insert(field, value.to_string());
        }
        self
    }

    /// Whether no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Whether `record` satisfies every constraint.
    pub fn matches(&self, record: &Record) -> bool {
        self.constraints
            .iter()
            .all(|(field, value)| record.field(*field) == Some(value.as_str()))
    }
}

impl Catalog {
    /// Records in `scope` that satisfy `filters`, in collection order.
    ///
    /// Nothing matching is an empty result, not an error.
    pub fn query(&self, scope: Scope, filters: &Filters) -> Vec<&Record> {
        self.records(scope.domain())
            .iter()
            .filter(|record| scope.admits(record) && filters.matches(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn ids(records: &[&Record]) -> Vec<i64> {
        records
            .iter()
            .map(|r| r.id().and_then(|v| v.as_i64()).unwrap())
            .collect()
    }

    fn sample() -> Catalog {
        Catalog::new(
            vec![
                record(json!({ "id": 1, "type": "microservice", "category": "security" })),
                record(json!({ "id": 2, "type": "microfrontend", "category": "security" })),
                record(json!({ "id": 3, "type": "microservice", "category": "testing" })),
                record(json!({ "id": 4, "type": "microservice", "category": "Security" })),
                record(json!({ "id": 5, "category": "security" })),
            ],
            vec![
                record(json!({ "id": 10, "type": "general" })),
                record(json!({ "id": 11, "type": "microservice" })),
                record(json!({ "id": 12, "type": "general" })),
            ],
            vec![
                record(json!({ "id": 20, "task": "setup" })),
                record(json!({ "id": 21, "task": "debugging" })),
            ],
        )
    }

    #[test]
    fn test_rule_scope_restricts_subject() {
        let catalog = sample();
        let all = catalog.query(Scope::MicroserviceRules, &Filters::new());
        assert_eq!(ids(&all), vec![1, 3, 4]);

        let mfe = catalog.query(Scope::MicrofrontendRules, &Filters::new());
        assert_eq!(ids(&mfe), vec![2]);
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let catalog = sample();
        let filters = Filters::new().with(Field::Category, Some("security"));
        let result = catalog.query(Scope::MicroserviceRules, &filters);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_empty_filter_value_is_ignored() {
        let catalog = sample();
        let filters = Filters::new().with(Field::Kind, Some(""));
        assert!(filters.is_empty());
        assert_eq!(
            catalog.query(Scope::Prompts, &filters),
            catalog.query(Scope::Prompts, &Filters::new())
        );
    }

    #[test]
    fn test_filtered_result_is_ordered_subsequence() {
        let catalog = sample();
        let full = catalog.query(Scope::Prompts, &Filters::new());
        let general = catalog.query(Scope::Prompts, &Filters::new().with(Field::Kind, Some("general")));
        assert_eq!(ids(&general), vec![10, 12]);

        let mut positions = general.iter().map(|g| full.iter().position(|f| f == g).unwrap());
        let mut last = positions.next().unwrap();
        for pos in positions {
            assert!(pos > last);
            last = pos;
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = sample();
        let filters = Filters::new().with(Field::Task, Some("deployment"));
        assert!(catalog.query(Scope::Instructions, &filters).is_empty());
        assert!(Catalog::default().query(Scope::MicroserviceRules, &Filters::new()).is_empty());
    }

    #[test]
    fn test_scope_domains() {
        assert_eq!(Scope::MicrofrontendRules.domain(), Domain::Rules);
        assert_eq!(Scope::Instructions.domain(), Domain::Instructions);
        assert_eq!(Scope::Prompts.subject(), None);
    }
}
