//! OpenAPI spec assembler and structural validator
//!
//! `generate_openapi_spec` merges synthesized CRUD endpoints, caller-supplied
//! custom endpoints, the selected security scheme, and static metadata into
//! an OpenAPI 3.0.3 document. `validate_openapi_document` is a structural
//! lint over an OpenAPI-shaped JSON value.

use serde_json::{Map, Value as JsonValue, json};
use tracing::debug;

use crate::generation::rest::synthesize_endpoints;
use crate::generation::sanitizers::{is_reserved_key, path_has_reserved_segment};
use crate::generation::types::{
    ApiConfig, AuthType, CustomEndpoint, EndpointDescriptor, Outcome, OutcomeMetadata,
};
use crate::generation::utils::capitalize_first;

const DEFAULT_BASE_URL: &str = "https://api.example.com/v1";
const STAGING_URL: &str = "https://staging-api.example.com/v1";

const KNOWN_METHODS: [&str; 8] = [
    "get", "post", "put", "delete", "patch", "head", "options", "trace",
];

/// Path-item fields that are not operations and never warrant a warning
const PATH_ITEM_FIELDS: [&str; 5] = ["$ref", "summary", "description", "servers", "parameters"];

/// Assemble a full OpenAPI 3.0.3 document from an API design config.
///
/// Fails only when `config` is absent; everything else degrades to
/// best-effort defaults. Path segments and method names matching the
/// reserved-key denylist are silently dropped before becoming mapping keys.
pub fn generate_openapi_spec(
    config: Option<&ApiConfig>,
    custom_endpoints: &[CustomEndpoint],
) -> Outcome {
    let Some(config) = config else {
        return Outcome::failure("config is null or undefined");
    };

    let mut spec = Map::new();
    spec.insert("openapi".to_string(), json!("3.0.3"));
    spec.insert("info".to_string(), build_info(config));
    spec.insert("servers".to_string(), build_servers(config));

    let endpoints = synthesize_endpoints(&config.resources);

    let mut paths = Map::new();
    let mut tags: Vec<String> = Vec::new();
    let mut endpoint_count = 0usize;

    for endpoint in &endpoints {
        if !insert_endpoint(&mut paths, endpoint) {
            debug!("dropped endpoint with reserved key: {}", endpoint.operation_id);
            continue;
        }
        endpoint_count += 1;
        if !tags.contains(&endpoint.tag) {
            tags.push(endpoint.tag.clone());
        }
    }

    for custom in custom_endpoints {
        if !insert_custom_endpoint(&mut paths, custom) {
            debug!("dropped custom endpoint with reserved key");
            continue;
        }
        endpoint_count += 1;
        if let Some(tag) = &custom.tag {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }

    spec.insert("paths".to_string(), JsonValue::Object(paths));

    let mut components = Map::new();
    components.insert(
        "schemas".to_string(),
        build_resource_schemas(&config.resources),
    );

    let auth_type = config.auth.as_ref().map(|a| a.auth_type).unwrap_or_default();
    if let Some((scheme_name, scheme)) = security_scheme(auth_type) {
        components.insert(
            "securitySchemes".to_string(),
            json!({ (scheme_name): scheme }),
        );
        spec.insert("security".to_string(), json!([{ (scheme_name): [] }]));
    }
    spec.insert("components".to_string(), JsonValue::Object(components));

    spec.insert(
        "tags".to_string(),
        JsonValue::Array(
            tags.iter()
                .map(|name| json!({ "name": name, "description": format!("Operations for {name}") }))
                .collect(),
        ),
    );

    let metadata = OutcomeMetadata::new(endpoint_count, config.resources.len());
    Outcome::ok_with_metadata(JsonValue::Object(spec), metadata)
}

fn build_info(config: &ApiConfig) -> JsonValue {
    let title = if config.name.is_empty() {
        "Generated API".to_string()
    } else {
        config.name.clone()
    };
    json!({
        "title": title,
        "version": config.version,
        "description": config
            .description
            .clone()
            .unwrap_or_else(|| format!("{title} - generated by apiforge")),
        "contact": {
            "name": "API Support",
            "email": "support@example.com"
        },
        "license": {
            "name": "MIT",
            "url": "https://opensource.org/licenses/MIT"
        }
    })
}

fn build_servers(config: &ApiConfig) -> JsonValue {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    json!([
        { "url": base_url, "description": "Production server" },
        { "url": STAGING_URL, "description": "Staging server" }
    ])
}

/// One plain object schema per resource so the synthesized `$ref` responses
/// resolve within the document
fn build_resource_schemas(resources: &[String]) -> JsonValue {
    let mut schemas = Map::new();
    for resource in resources {
        let name = capitalize_first(resource);
        if is_reserved_key(&name) || is_reserved_key(resource) {
            continue;
        }
        schemas.insert(
            name,
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string" },
                    "name": { "type": "string" },
                    "createdAt": { "type": "string", "format": "date-time" }
                },
                "required": ["id", "name"]
            }),
        );
    }
    JsonValue::Object(schemas)
}

fn security_scheme(auth_type: AuthType) -> Option<(&'static str, JsonValue)> {
    match auth_type {
        AuthType::Bearer => Some((
            "bearerAuth",
            json!({ "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }),
        )),
        AuthType::ApiKey => Some((
            "apiKeyAuth",
            json!({ "type": "apiKey", "in": "header", "name": "X-API-Key" }),
        )),
        AuthType::OAuth2 => Some((
            "oauth2Auth",
            json!({
                "type": "oauth2",
                "flows": {
                    "authorizationCode": {
                        "authorizationUrl": "https://auth.example.com/authorize",
                        "tokenUrl": "https://auth.example.com/token",
                        "scopes": { "read": "Read access", "write": "Write access" }
                    }
                }
            }),
        )),
        AuthType::None => None,
    }
}

/// Returns false when the endpoint was dropped by the denylist
fn insert_endpoint(paths: &mut Map<String, JsonValue>, endpoint: &EndpointDescriptor) -> bool {
    if path_has_reserved_segment(&endpoint.path) {
        return false;
    }

    let mut operation = Map::new();
    operation.insert("tags".to_string(), json!([endpoint.tag]));
    operation.insert("summary".to_string(), json!(endpoint.summary));
    operation.insert("operationId".to_string(), json!(endpoint.operation_id));
    if !endpoint.parameters.is_empty() {
        operation.insert("parameters".to_string(), json!(endpoint.parameters));
    }
    if let Some(body) = &endpoint.request_body {
        operation.insert("requestBody".to_string(), body.clone());
    }
    operation.insert("responses".to_string(), json!(endpoint.responses));

    let item = paths
        .entry(endpoint.path.clone())
        .or_insert_with(|| JsonValue::Object(Map::new()));
    if let Some(item) = item.as_object_mut() {
        item.insert(
            endpoint.method.as_str().to_string(),
            JsonValue::Object(operation),
        );
    }
    true
}

/// Returns false when the custom endpoint was dropped by the denylist
fn insert_custom_endpoint(paths: &mut Map<String, JsonValue>, custom: &CustomEndpoint) -> bool {
    let method = custom.method.to_lowercase();
    if path_has_reserved_segment(&custom.path) || is_reserved_key(&method) {
        return false;
    }

    let mut operation = Map::new();
    if let Some(tag) = &custom.tag {
        operation.insert("tags".to_string(), json!([tag]));
    }
    operation.insert(
        "summary".to_string(),
        json!(custom.summary.clone().unwrap_or_else(|| "Custom endpoint".to_string())),
    );
    operation.insert(
        "responses".to_string(),
        custom
            .responses
            .clone()
            .unwrap_or_else(|| json!({ "200": { "description": "Successful response" } })),
    );

    let item = paths
        .entry(custom.path.clone())
        .or_insert_with(|| JsonValue::Object(Map::new()));
    if let Some(item) = item.as_object_mut() {
        item.insert(method, JsonValue::Object(operation));
    }
    true
}

/// Structural lint over an OpenAPI-shaped document.
///
/// Reports missing top-level fields and per-operation problems; warnings do
/// not make the document invalid. `None` input follows the uniform
/// null-failure rule of the generator entry points.
pub fn validate_openapi_document(document: Option<&JsonValue>) -> Outcome {
    let Some(document) = document else {
        return Outcome::failure("document is null or undefined");
    };

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let mut checked_operations = 0usize;

    match document.get("openapi").and_then(JsonValue::as_str) {
        None => errors.push("missing required field: openapi".to_string()),
        Some(version) if !version.starts_with("3.") => {
            warnings.push(format!("expected an OpenAPI 3.x version, found {version}"));
        }
        Some(_) => {}
    }

    match document.get("info") {
        None => errors.push("missing required field: info".to_string()),
        Some(info) => {
            if info.get("title").is_none() {
                errors.push("info is missing required field: title".to_string());
            }
            if info.get("version").is_none() {
                errors.push("info is missing required field: version".to_string());
            }
        }
    }

    let mut seen_operation_ids: Vec<String> = Vec::new();
    match document.get("paths").and_then(JsonValue::as_object) {
        None => errors.push("missing required field: paths".to_string()),
        Some(paths) => {
            if paths.is_empty() {
                warnings.push("document defines no paths".to_string());
            }
            for (path, item) in paths {
                let Some(methods) = item.as_object() else {
                    continue;
                };
                for (method, operation) in methods {
                    if PATH_ITEM_FIELDS.contains(&method.as_str()) {
                        continue;
                    }
                    if !KNOWN_METHODS.contains(&method.as_str()) {
                        warnings.push(format!("unknown HTTP method '{method}' on {path}"));
                        continue;
                    }
                    checked_operations += 1;
                    if operation.get("responses").is_none() {
                        errors.push(format!(
                            "operation {} {path} has no responses",
                            method.to_uppercase()
                        ));
                    }
                    if let Some(id) = operation.get("operationId").and_then(JsonValue::as_str) {
                        if seen_operation_ids.iter().any(|seen| seen == id) {
                            errors.push(format!("duplicate operationId: {id}"));
                        } else {
                            seen_operation_ids.push(id.to_string());
                        }
                    }
                }
            }
        }
    }

    Outcome::ok(json!({
        "valid": errors.is_empty(),
        "errors": errors,
        "warnings": warnings,
        "checkedOperations": checked_operations,
    }))
}
