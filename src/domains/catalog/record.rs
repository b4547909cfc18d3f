//! Record model for the knowledge-base collections.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One of the three knowledge collections held by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Architecture, security, deployment and testing rules.
    Rules,
    /// Development prompts and best practices.
    Prompts,
    /// Step-by-step task instructions.
    Instructions,
}

impl Domain {
    /// All domains, in load order.
    pub const ALL: [Domain; 3] = [Domain::Rules, Domain::Prompts, Domain::Instructions];

    /// Stable lowercase name, also used as the source directory and file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rules => "rules",
            Self::Prompts => "prompts",
            Self::Instructions => "instructions",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discriminating field that queries can filter on.
///
/// The knowledge files store both the rule subject and the prompt kind
/// under the `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Rule target: `microservice` or `microfrontend`.
    Subject,
    /// Rule category: architecture, security, deployment, testing, ...
    Category,
    /// Prompt kind: microservice, microfrontend, general, ...
    Kind,
    /// Instruction task: setup, deployment, testing, debugging, ...
    Task,
}

impl Field {
    /// JSON key holding this field in a record.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Subject | Self::Kind => "type",
            Self::Category => "category",
            Self::Task => "task",
        }
    }
}

/// A single knowledge-base entry.
///
/// Only the discriminating fields are ever inspected; everything else
/// (title, description, priority, details, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap an already parsed JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The record identifier, if present.
    ///
    /// Identifiers are not required to be unique; duplicates are served as-is.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// The string value of a discriminating field.
    ///
    /// Non-string values are treated as absent, so they never match a filter.
    pub fn field(&self, field: Field) -> Option<&str> {
        self.0.get(field.key()).and_then(Value::as_str)
    }

    /// Access the raw JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Render records as 2-space indented JSON.
pub fn render_records(records: &[&Record]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_field_lookup_uses_file_keys() {
        let rule = record(json!({
            "id": "ms-sec-001",
            "type": "microservice",
            "category": "security",
        }));
        assert_eq!(rule.field(Field::Subject), Some("microservice"));
        assert_eq!(rule.field(Field::Category), Some("security"));
        assert_eq!(rule.field(Field::Task), None);
        assert_eq!(rule.id(), Some(&json!("ms-sec-001")));
    }

    #[test]
    fn test_non_string_field_is_absent() {
        let rule = record(json!({ "id": 1, "category": 7 }));
        assert_eq!(rule.field(Field::Category), None);
    }

    #[test]
    fn test_opaque_payload_survives_round_trip() {
        let value = json!({
            "id": 3,
            "task": "setup",
            "steps": ["install", "configure"],
            "details": { "owner": "platform" },
        });
        let rec = record(value.clone());
        assert_eq!(serde_json::to_value(&rec).unwrap(), value);
    }

    #[test]
    fn test_render_uses_two_space_indent() {
        let rec = record(json!({ "id": 1 }));
        let text = render_records(&[&rec]).unwrap();
        assert_eq!(text, "[\n  {\n    \"id\": 1\n  }\n]");
        assert_eq!(render_records(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_render_keeps_source_key_order() {
        let rec: Record =
            serde_json::from_str(r#"{"id": "r1", "type": "microservice", "category": "architecture"}"#)
                .unwrap();
        let text = render_records(&[&rec]).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"id\": \"r1\",\n    \"type\": \"microservice\",\n    \"category\": \"architecture\"\n  }\n]"
        );
    }

    #[test]
    fn test_domain_display() {
        assert_eq!(Domain::Rules.to_string(), "rules");
        assert_eq!(Domain::Instructions.as_str(), "instructions");
    }
}
