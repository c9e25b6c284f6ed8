//! Mock response synthesis and mock-server code rendering
//!
//! `mock_value_for_schema` recursively walks a JSON-Schema-shaped value and
//! produces a canned example payload. No schema validation happens here;
//! malformed schemas degenerate silently to `null`. The code renderer emits
//! an Express-style app as plain text (the generated source is data to this
//! crate, never executed by it).

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value as JsonValue, json};

use crate::generation::types::MockServerConfig;

/// Placeholder for string schemas without an enum
pub const MOCK_STRING: &str = "mock-string";

static PATH_PARAM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^/{}]+)\}").unwrap());

/// Derive a mock payload from a JSON-Schema-shaped value.
pub fn mock_value_for_schema(schema: &JsonValue) -> JsonValue {
    if schema.get("$ref").is_some() {
        return json!({ "id": "mock-id", "name": "Mock Resource" });
    }

    match schema.get("type").and_then(JsonValue::as_str) {
        Some("object") => {
            let mut mocked = Map::new();
            if let Some(properties) = schema.get("properties").and_then(JsonValue::as_object) {
                for (name, property_schema) in properties {
                    mocked.insert(name.clone(), mock_value_for_schema(property_schema));
                }
            }
            JsonValue::Object(mocked)
        }
        Some("array") => {
            let item = schema
                .get("items")
                .map(mock_value_for_schema)
                .unwrap_or(JsonValue::Null);
            json!([item])
        }
        Some("string") => schema
            .pointer("/enum/0")
            .cloned()
            .unwrap_or_else(|| json!(MOCK_STRING)),
        Some("integer") => json!(42),
        Some("number") => json!(3.14),
        Some("boolean") => json!(true),
        _ => JsonValue::Null,
    }
}

/// Derive the mock payload for one operation: the first 2xx response with a
/// JSON schema wins; anything else degenerates to `null`.
pub fn mock_response_for_operation(operation: &JsonValue) -> JsonValue {
    let Some(responses) = operation.get("responses").and_then(JsonValue::as_object) else {
        return JsonValue::Null;
    };
    for (status, response) in responses {
        if !status.starts_with('2') {
            continue;
        }
        if let Some(schema) = response.pointer("/content/application~1json/schema") {
            return mock_value_for_schema(schema);
        }
    }
    JsonValue::Null
}

const EXPRESS_METHODS: [&str; 5] = ["get", "post", "put", "delete", "patch"];

/// Render an Express-style mock server as source text for the given spec.
pub fn render_mock_server_code(spec: &JsonValue, config: &MockServerConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("const express = require('express');".to_string());
    if config.enable_cors {
        lines.push("const cors = require('cors');".to_string());
    }
    lines.push(String::new());
    lines.push("const app = express();".to_string());
    if config.enable_json_body {
        lines.push("app.use(express.json());".to_string());
    }
    if config.enable_cors {
        lines.push("app.use(cors());".to_string());
    }

    if let Some(paths) = spec.get("paths").and_then(JsonValue::as_object) {
        for (path, item) in paths {
            let Some(methods) = item.as_object() else {
                continue;
            };
            let route = express_route(path);
            for (method, operation) in methods {
                if !EXPRESS_METHODS.contains(&method.as_str()) {
                    continue;
                }
                let payload = mock_response_for_operation(operation);
                lines.push(String::new());
                lines.push(format!("app.{method}('{route}', (req, res) => {{"));
                lines.push(format!("  res.json({payload});"));
                lines.push("});".to_string());
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("app.listen({}, () => {{", config.port));
    lines.push(format!(
        "  console.log('Mock server listening on port {}');",
        config.port
    ));
    lines.push("});".to_string());

    lines.join("\n")
}

/// `{id}` template segments become Express `:id` parameters
fn express_route(path: &str) -> String {
    PATH_PARAM_RE.replace_all(path, ":$1").to_string()
}

/// Number of routes the renderers would register for this spec
pub fn count_mock_routes(spec: &JsonValue) -> usize {
    let Some(paths) = spec.get("paths").and_then(JsonValue::as_object) else {
        return 0;
    };
    paths
        .values()
        .filter_map(JsonValue::as_object)
        .flat_map(|methods| methods.keys())
        .filter(|method| EXPRESS_METHODS.contains(&method.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_schema() {
        let schema = json!({ "type": "object", "properties": { "id": { "type": "string" } } });
        assert_eq!(mock_value_for_schema(&schema), json!({ "id": "mock-string" }));
    }

    #[test]
    fn test_array_schema() {
        let schema = json!({ "type": "array", "items": { "type": "integer" } });
        assert_eq!(mock_value_for_schema(&schema), json!([42]));
    }

    #[test]
    fn test_string_enum_takes_first_value() {
        let schema = json!({ "type": "string", "enum": ["a", "b"] });
        assert_eq!(mock_value_for_schema(&schema), json!("a"));
    }

    #[test]
    fn test_scalar_constants() {
        assert_eq!(mock_value_for_schema(&json!({ "type": "integer" })), json!(42));
        assert_eq!(mock_value_for_schema(&json!({ "type": "number" })), json!(3.14));
        assert_eq!(mock_value_for_schema(&json!({ "type": "boolean" })), json!(true));
    }

    #[test]
    fn test_ref_yields_canned_object() {
        let schema = json!({ "$ref": "#/components/schemas/User" });
        assert_eq!(
            mock_value_for_schema(&schema),
            json!({ "id": "mock-id", "name": "Mock Resource" })
        );
    }

    #[test]
    fn test_malformed_schema_degenerates_to_null() {
        assert_eq!(mock_value_for_schema(&json!({})), JsonValue::Null);
        assert_eq!(mock_value_for_schema(&json!({ "type": "teapot" })), JsonValue::Null);
        assert_eq!(mock_value_for_schema(&json!({ "type": 12 })), JsonValue::Null);
    }

    #[test]
    fn test_nested_object() {
        let schema = json!({
            "type": "object",
            "properties": {
                "tags": { "type": "array", "items": { "type": "string" } },
                "active": { "type": "boolean" }
            }
        });
        assert_eq!(
            mock_value_for_schema(&schema),
            json!({ "tags": ["mock-string"], "active": true })
        );
    }

    #[test]
    fn test_response_for_operation_prefers_2xx_json() {
        let operation = json!({
            "responses": {
                "404": { "description": "nope" },
                "200": {
                    "content": {
                        "application/json": { "schema": { "type": "integer" } }
                    }
                }
            }
        });
        assert_eq!(mock_response_for_operation(&operation), json!(42));
        assert_eq!(mock_response_for_operation(&json!({})), JsonValue::Null);
    }

    #[test]
    fn test_render_mock_server_code() {
        let spec = json!({
            "paths": {
                "/users": {
                    "get": {
                        "responses": {
                            "200": {
                                "content": {
                                    "application/json": {
                                        "schema": { "type": "array", "items": { "type": "string" } }
                                    }
                                }
                            }
                        }
                    }
                },
                "/users/{id}": {
                    "delete": { "responses": { "204": { "description": "Deleted" } } }
                }
            }
        });
        let code = render_mock_server_code(&spec, &MockServerConfig::default());
        assert!(code.contains("const express = require('express');"));
        assert!(code.contains("app.use(express.json());"));
        assert!(code.contains("app.use(cors());"));
        assert!(code.contains("app.get('/users', (req, res) => {"));
        assert!(code.contains("res.json([\"mock-string\"]);"));
        assert!(code.contains("app.delete('/users/:id', (req, res) => {"));
        assert!(code.contains("app.listen(3000, () => {"));
    }

    #[test]
    fn test_render_without_cors_or_json_body() {
        let config = MockServerConfig {
            port: 8080,
            enable_cors: false,
            enable_json_body: false,
        };
        let code = render_mock_server_code(&json!({ "paths": {} }), &config);
        assert!(!code.contains("cors"));
        assert!(!code.contains("express.json()"));
        assert!(code.contains("app.listen(8080"));
    }

    #[test]
    fn test_unknown_methods_skipped_in_render() {
        let spec = json!({ "paths": { "/a": { "subscribe": {}, "parameters": [] } } });
        let code = render_mock_server_code(&spec, &MockServerConfig::default());
        assert!(!code.contains("app.subscribe"));
        assert!(!code.contains("app.parameters"));
    }

    #[test]
    fn test_count_mock_routes() {
        let spec = json!({
            "paths": {
                "/a": { "get": {}, "post": {}, "parameters": [] },
                "/b": { "delete": {} }
            }
        });
        assert_eq!(count_mock_routes(&spec), 3);
        assert_eq!(count_mock_routes(&json!({})), 0);
    }
}
