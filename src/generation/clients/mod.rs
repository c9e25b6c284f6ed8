//! Client code generators
//!
//! Each renderer walks an OpenAPI-shaped document and builds source text by
//! pushing lines into a vector and joining. The only error path is an
//! unsupported language/style combination; a spec with no paths renders a
//! client with no methods, not an error.

pub mod graphql;
pub mod python;
pub mod typescript;

use serde_json::Value as JsonValue;

use crate::core::{Error, Result};
use crate::generation::types::{ApiStyle, ClientLanguage, ClientOptions};

/// Known HTTP methods walked when iterating a path item, in render order
pub(crate) const CLIENT_METHODS: [&str; 5] = ["get", "post", "put", "delete", "patch"];

/// Dispatch to the renderer for the requested language and API style.
pub fn generate_client(
    spec: &JsonValue,
    language: ClientLanguage,
    style: ApiStyle,
    options: &ClientOptions,
) -> Result<String> {
    match (style, language) {
        (ApiStyle::Rest, ClientLanguage::TypeScript) => {
            Ok(typescript::generate_rest_client(spec, options))
        }
        (ApiStyle::Rest, ClientLanguage::Python) => Ok(python::generate_rest_client(spec)),
        (ApiStyle::Graphql, ClientLanguage::TypeScript) => Ok(graphql::generate_fetch_client()),
        (ApiStyle::Graphql, ClientLanguage::Python) => Err(Error::UnsupportedLanguage(
            "python (GraphQL clients are rendered for TypeScript only)".to_string(),
        )),
    }
}

/// Iterate `paths` as (path, method, operation) triples for operations that
/// carry an `operationId`
pub(crate) fn operations(spec: &JsonValue) -> Vec<(&str, &'static str, &JsonValue)> {
    let mut found = Vec::new();
    let Some(paths) = spec.get("paths").and_then(JsonValue::as_object) else {
        return found;
    };
    for (path, item) in paths {
        for method in CLIENT_METHODS {
            if let Some(operation) = item.get(method) {
                if operation.get("operationId").is_some() {
                    found.push((path.as_str(), method, operation));
                }
            }
        }
    }
    found
}
