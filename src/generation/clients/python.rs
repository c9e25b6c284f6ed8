//! Python requests client renderer

use serde_json::Value as JsonValue;

use crate::generation::clients::operations;
use crate::generation::utils::to_snake_case;

/// Render a Python API client class backed by `requests`.
pub fn generate_rest_client(spec: &JsonValue) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("import requests".to_string());
    lines.push("from typing import Any, Dict, Optional".to_string());
    lines.push(String::new());
    lines.push(String::new());
    lines.push("class ApiClient:".to_string());
    lines.push("    def __init__(self, base_url: str):".to_string());
    lines.push("        self.base_url = base_url.rstrip(\"/\")".to_string());

    for (path, method, operation) in operations(spec) {
        let operation_id = operation["operationId"].as_str().unwrap_or_default();
        let method_name = to_snake_case(operation_id);
        lines.push(String::new());
        lines.push(format!(
            "    def {method_name}(self, params: Optional[Dict[str, Any]] = None) -> Any:"
        ));
        if let Some(summary) = operation.get("summary").and_then(JsonValue::as_str) {
            lines.push(format!("        \"\"\"{summary}\"\"\""));
        }
        // GET and DELETE send query params; the rest send a JSON body
        let call = match method {
            "get" | "delete" => {
                format!("requests.{method}(f\"{{self.base_url}}{path}\", params=params)")
            }
            _ => format!("requests.{method}(f\"{{self.base_url}}{path}\", json=params)"),
        };
        lines.push(format!("        response = {call}"));
        lines.push("        return response.json()".to_string());
    }

    lines.join("\n")
}
