//! Live mock server built from an OpenAPI document
//!
//! Walks the spec's paths and methods and registers one axum route per
//! operation, each answering with the payload synthesized by
//! `generation::mock`. Request logging strips CR/LF from the method and
//! path before they reach a log line.

use std::net::SocketAddr;
use std::path::Path;

use axum::routing::MethodRouter;
use axum::{Json, Router, routing};
use serde_json::Value as JsonValue;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::Result;
use crate::generation::mock::mock_response_for_operation;
use crate::generation::sanitizers::sanitize_log_field;
use crate::generation::types::MockServerConfig;

/// Build an axum router with one mock route per path and method in the spec.
///
/// Unknown method keys are skipped; a spec without paths yields an empty
/// router. OpenAPI `{param}` segments are axum path parameters as-is.
pub fn build_router(spec: &JsonValue, config: &MockServerConfig) -> Router {
    let mut router = Router::new();

    if let Some(paths) = spec.get("paths").and_then(JsonValue::as_object) {
        for (path, item) in paths {
            // axum panics on route paths without a leading slash
            if !path.starts_with('/') {
                debug!("skipped mock route with malformed path {path}");
                continue;
            }
            let Some(methods) = item.as_object() else {
                continue;
            };
            for (method, operation) in methods {
                let Some(method_router) = mock_route(method, path, operation) else {
                    continue;
                };
                debug!("registered mock route {} {}", method.to_uppercase(), path);
                router = router.route(path, method_router);
            }
        }
    }

    if config.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    router
}

fn mock_route(method: &str, path: &str, operation: &JsonValue) -> Option<MethodRouter> {
    let payload = mock_response_for_operation(operation);
    let method_label = sanitize_log_field(method).to_uppercase();
    let path_label = sanitize_log_field(path);

    let handler = move || async move {
        info!(request_id = %Uuid::new_v4(), "{} {}", method_label, path_label);
        Json(payload)
    };

    match method {
        "get" => Some(routing::get(handler)),
        "post" => Some(routing::post(handler)),
        "put" => Some(routing::put(handler)),
        "delete" => Some(routing::delete(handler)),
        "patch" => Some(routing::patch(handler)),
        _ => None,
    }
}

/// Run the mock server until the task is cancelled or the listener fails.
pub async fn serve(spec: &JsonValue, config: &MockServerConfig) -> Result<()> {
    let router = build_router(spec, config);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("mock server listening on {addr}");
    axum::serve(listener, router).await?;
    Ok(())
}

/// Load an OpenAPI document from a JSON or YAML file.
pub fn load_spec_document(path: &Path) -> Result<JsonValue> {
    let raw = std::fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&raw)?),
        _ => Ok(serde_json::from_str(&raw)?),
    }
}
