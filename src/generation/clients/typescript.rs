//! TypeScript REST client renderer (axios and fetch flavors)

use serde_json::Value as JsonValue;

use crate::generation::clients::operations;
use crate::generation::types::{ClientFlavor, ClientOptions};
use crate::generation::utils::to_camel_case;

/// Render a TypeScript API client class for an OpenAPI-shaped spec.
pub fn generate_rest_client(spec: &JsonValue, options: &ClientOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    match options.output_format {
        ClientFlavor::Axios => {
            lines.push("import axios, { AxiosInstance } from 'axios';".to_string());
        }
        ClientFlavor::Fetch => {
            lines.push("// Uses the global fetch API; no imports required.".to_string());
        }
    }
    lines.push(String::new());

    if options.include_types {
        render_interfaces(spec, &mut lines);
    }

    lines.push("export class ApiClient {".to_string());
    match options.output_format {
        ClientFlavor::Axios => {
            lines.push("  private client: AxiosInstance;".to_string());
            lines.push(String::new());
            lines.push("  constructor(baseURL: string) {".to_string());
            lines.push("    this.client = axios.create({ baseURL });".to_string());
            lines.push("  }".to_string());
        }
        ClientFlavor::Fetch => {
            lines.push("  constructor(private baseUrl: string) {}".to_string());
        }
    }

    for (path, method, operation) in operations(spec) {
        let operation_id = operation["operationId"].as_str().unwrap_or_default();
        let method_name = to_camel_case(operation_id);
        lines.push(String::new());
        if let Some(summary) = operation.get("summary").and_then(JsonValue::as_str) {
            lines.push(format!("  /** {summary} */"));
        }
        lines.push(format!(
            "  async {method_name}(params?: Record<string, unknown>): Promise<any> {{"
        ));
        match options.output_format {
            ClientFlavor::Axios => render_axios_body(method, path, &mut lines),
            ClientFlavor::Fetch => render_fetch_body(method, path, &mut lines),
        }
        lines.push("  }".to_string());
    }

    lines.push("}".to_string());
    lines.join("\n")
}

fn render_axios_body(method: &str, path: &str, lines: &mut Vec<String>) {
    // GET and DELETE send params in the request config; the rest send a body
    let call = match method {
        "get" | "delete" => format!("this.client.{method}(`{path}`, {{ params }})"),
        _ => format!("this.client.{method}(`{path}`, params)"),
    };
    lines.push(format!("    const response = await {call};"));
    lines.push("    return response.data;".to_string());
}

fn render_fetch_body(method: &str, path: &str, lines: &mut Vec<String>) {
    lines.push(format!(
        "    const response = await fetch(`${{this.baseUrl}}{path}`, {{"
    ));
    lines.push(format!("      method: '{}',", method.to_uppercase()));
    lines.push("      headers: { 'Content-Type': 'application/json' },".to_string());
    if method != "get" && method != "delete" {
        lines.push("      body: JSON.stringify(params),".to_string());
    }
    lines.push("    });".to_string());
    lines.push("    return response.json();".to_string());
}

fn render_interfaces(spec: &JsonValue, lines: &mut Vec<String>) {
    let Some(schemas) = spec
        .pointer("/components/schemas")
        .and_then(JsonValue::as_object)
    else {
        return;
    };

    for (name, schema) in schemas {
        if schema.get("type").and_then(JsonValue::as_str) == Some("object") {
            lines.push(format!("export interface {name} {{"));
            let required: Vec<&str> = schema
                .get("required")
                .and_then(JsonValue::as_array)
                .map(|values| values.iter().filter_map(JsonValue::as_str).collect())
                .unwrap_or_default();
            if let Some(properties) = schema.get("properties").and_then(JsonValue::as_object) {
                for (property, property_schema) in properties {
                    let marker = if required.contains(&property.as_str()) {
                        ""
                    } else {
                        "?"
                    };
                    lines.push(format!(
                        "  {property}{marker}: {};",
                        typescript_type(property_schema)
                    ));
                }
            }
            lines.push("}".to_string());
        } else {
            lines.push(format!("export type {name} = {};", typescript_type(schema)));
        }
        lines.push(String::new());
    }
}

/// Map a JSON-schema fragment to a TypeScript type. `$ref` is resolved only
/// by taking the trailing path segment as a bare type name.
fn typescript_type(schema: &JsonValue) -> String {
    if let Some(reference) = schema.get("$ref").and_then(JsonValue::as_str) {
        return reference.rsplit('/').next().unwrap_or("any").to_string();
    }
    if let Some(values) = schema.get("enum").and_then(JsonValue::as_array) {
        let variants: Vec<String> = values
            .iter()
            .filter_map(JsonValue::as_str)
            .map(|v| format!("'{v}'"))
            .collect();
        if !variants.is_empty() {
            return variants.join(" | ");
        }
    }
    match schema.get("type").and_then(JsonValue::as_str) {
        Some("string") => "string".to_string(),
        Some("integer") | Some("number") => "number".to_string(),
        Some("boolean") => "boolean".to_string(),
        Some("array") => match schema.get("items") {
            Some(items) => format!("{}[]", typescript_type(items)),
            None => "any[]".to_string(),
        },
        Some("object") => "Record<string, any>".to_string(),
        _ => "any".to_string(),
    }
}
