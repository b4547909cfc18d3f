//! End-to-end scenarios over the public server API.
//!
//! Each test builds a catalog (in memory or from files), wraps it in an
//! `McpServer` and drives it through tool calls and resource reads.

use std::fs;
use std::path::Path;

use enterprise_mcp_server::core::{Config, McpServer};
use enterprise_mcp_server::domains::catalog::{
    Catalog, Domain, FileSource, MemorySource, Record,
};
use enterprise_mcp_server::domains::resources::ResourceError;
use enterprise_mcp_server::domains::tools::ToolError;
use serde_json::{Value, json};

fn record(value: Value) -> Record {
    serde_json::from_value(value).unwrap()
}

fn two_rules() -> Vec<Record> {
    vec![
        record(json!({ "id": 1, "type": "microservice", "category": "security" })),
        record(json!({ "id": 2, "type": "microfrontend", "category": "security" })),
    ]
}

fn tool_records(server: &McpServer, name: &str, args: Value) -> Value {
    let result = server.call_tool(name, args.as_object().cloned()).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["content"].as_array().unwrap().len(), 1);
    serde_json::from_str(value["content"][0]["text"].as_str().unwrap()).unwrap()
}

fn tool_text(server: &McpServer, name: &str, args: Value) -> String {
    let result = server.call_tool(name, args.as_object().cloned()).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    value["content"][0]["text"].as_str().unwrap().to_string()
}

fn resource_text(server: &McpServer, uri: &str) -> String {
    let result = server.read_resource(uri).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    let contents = &value["contents"][0];
    assert_eq!(contents["uri"], json!(uri));
    assert_eq!(contents["mimeType"], json!("application/json"));
    contents["text"].as_str().unwrap().to_string()
}

fn resource_records(server: &McpServer, uri: &str) -> Value {
    serde_json::from_str(&resource_text(server, uri)).unwrap()
}

fn write(base: &Path, domain: Domain, body: &str) {
    let dir = base.join(domain.as_str());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.json", domain.as_str())), body).unwrap();
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn microservice_rules_filter_by_subject_then_category() {
    let server = McpServer::new(Config::default(), Catalog::new(two_rules(), vec![], vec![]));

    assert_eq!(
        tool_text(&server, "get-microservice-rules", json!({})),
        "[\n  {\n    \"id\": 1,\n    \"type\": \"microservice\",\n    \"category\": \"security\"\n  }\n]"
    );
    assert_eq!(
        tool_records(&server, "get-microservice-rules", json!({ "category": "testing" })),
        json!([])
    );
}

#[test]
fn empty_filter_value_is_ignored() {
    let server = McpServer::new(Config::default(), Catalog::new(two_rules(), vec![], vec![]));

    assert_eq!(
        tool_records(&server, "get-microfrontend-rules", json!({ "category": "" })),
        tool_records(&server, "get-microfrontend-rules", json!({})),
    );
}

#[test]
fn repeated_calls_return_identical_text() {
    let server = McpServer::new(Config::default(), Catalog::new(two_rules(), vec![], vec![]));
    let first = server.call_tool("get-microservice-rules", None).unwrap();
    let second = server.call_tool("get-microservice-rules", None).unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Load failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_prompt_load_serves_empty_resource() {
    let source = MemorySource::new()
        .with(Domain::Rules, two_rules())
        .with(Domain::Instructions, vec![]);
    let catalog = Catalog::load(&source).await;
    let server = McpServer::new(Config::default(), catalog);

    let uris: Vec<String> = server
        .list_resources()
        .into_iter()
        .map(|r| r.raw.uri)
        .collect();
    assert!(uris.contains(&"enterprise://prompts/all".to_string()));
    assert_eq!(resource_records(&server, "enterprise://prompts/all"), json!([]));
    assert_eq!(tool_records(&server, "get-prompts", json!({})), json!([]));
}

#[tokio::test]
async fn malformed_file_only_empties_its_domain() {
    let tmp = tempfile::tempdir().unwrap();
    write(
        tmp.path(),
        Domain::Rules,
        r#"[{"id": "r1", "type": "microservice", "category": "deployment"}]"#,
    );
    write(tmp.path(), Domain::Prompts, "{ not json");

    let catalog = Catalog::load(&FileSource::new(tmp.path())).await;
    assert_eq!(catalog.len(Domain::Rules), 1);
    assert_eq!(catalog.len(Domain::Prompts), 0);
    assert_eq!(catalog.len(Domain::Instructions), 0);

    let server = McpServer::new(Config::default(), catalog);
    assert_eq!(server.list_tools().len(), 4);
    assert_eq!(server.list_resources().len(), 4);
}

// ---------------------------------------------------------------------------
// Resources and tools agree
// ---------------------------------------------------------------------------

#[test]
fn resource_read_matches_unfiltered_tool_call() {
    let server = McpServer::new(Config::default(), Catalog::new(two_rules(), vec![], vec![]));

    assert_eq!(
        resource_text(&server, "enterprise://rules/microservices"),
        tool_text(&server, "get-microservice-rules", json!({}))
    );
    assert_eq!(
        resource_records(&server, "enterprise://rules/microfrontends"),
        tool_records(&server, "get-microfrontend-rules", json!({}))
    );
}

#[test]
fn unknown_names_are_typed_errors() {
    let server = McpServer::new(Config::default(), Catalog::new(two_rules(), vec![], vec![]));

    match server.call_tool("get-everything", None) {
        Err(ToolError::UnknownOperation(name)) => assert_eq!(name, "get-everything"),
        other => panic!("expected UnknownOperation, got {:?}", other.map(|_| ())),
    }
    match server.read_resource("enterprise://everything") {
        Err(ResourceError::UnknownResource(uri)) => assert_eq!(uri, "enterprise://everything"),
        other => panic!("expected UnknownResource, got {:?}", other.map(|_| ())),
    }
}

// ---------------------------------------------------------------------------
// Shipped knowledge files
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shipped_knowledge_loads() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("knowledge");
    let catalog = Catalog::load(&FileSource::new(base)).await;
    assert!(catalog.len(Domain::Rules) > 0);
    assert!(catalog.len(Domain::Prompts) > 0);
    assert!(catalog.len(Domain::Instructions) > 0);

    let server = McpServer::new(Config::default(), catalog);
    let security = tool_records(&server, "get-microservice-rules", json!({ "category": "security" }));
    for rule in security.as_array().unwrap() {
        assert_eq!(rule["type"], json!("microservice"));
        assert_eq!(rule["category"], json!("security"));
    }
    let debugging = tool_records(&server, "get-instructions", json!({ "task": "debugging" }));
    assert_eq!(debugging.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn shipped_rules_render_in_file_key_order() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("knowledge");
    let catalog = Catalog::load(&FileSource::new(base)).await;
    let server = McpServer::new(Config::default(), catalog);

    let text = resource_text(&server, "enterprise://rules/microservices");
    assert!(
        text.starts_with("[\n  {\n    \"id\": \"ms-arch-001\",\n    \"type\": \"microservice\",\n    \"category\": \"architecture\""),
        "unexpected rendering: {}",
        text
    );
}
