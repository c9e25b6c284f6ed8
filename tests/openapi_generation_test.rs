//! End-to-end checks for the OpenAPI assembler and validator.

use apiforge::generation::openapi::{generate_openapi_spec, validate_openapi_document};
use apiforge::generation::types::{ApiConfig, AuthConfig, AuthType, CustomEndpoint};
use serde_json::json;

fn shop_config() -> ApiConfig {
    ApiConfig {
        name: "Shop API".to_string(),
        version: "2.1.0".to_string(),
        description: Some("Storefront backend".to_string()),
        base_url: Some("https://shop.example.com/api".to_string()),
        resources: vec!["products".to_string(), "orders".to_string()],
        auth: Some(AuthConfig {
            auth_type: AuthType::Bearer,
        }),
    }
}

#[test]
fn test_full_document_from_config() {
    let outcome = generate_openapi_spec(Some(&shop_config()), &[]);
    assert!(outcome.success);
    let spec = outcome.data.unwrap();

    assert_eq!(spec["openapi"], "3.0.3");
    assert_eq!(spec["info"]["title"], "Shop API");
    assert_eq!(spec["info"]["version"], "2.1.0");
    assert_eq!(spec["info"]["description"], "Storefront backend");
    assert_eq!(spec["servers"][0]["url"], "https://shop.example.com/api");

    // Five CRUD operations per resource
    let paths = spec["paths"].as_object().unwrap();
    assert!(paths.contains_key("/products"));
    assert!(paths.contains_key("/products/{id}"));
    assert!(paths.contains_key("/orders"));
    assert!(paths.contains_key("/orders/{id}"));
    assert_eq!(spec["paths"]["/products"]["get"]["operationId"], "listProducts");
    assert_eq!(spec["paths"]["/orders/{id}"]["delete"]["operationId"], "deleteOrders");

    // One resolvable schema per resource
    assert_eq!(spec["components"]["schemas"]["Products"]["type"], "object");
    assert_eq!(spec["components"]["schemas"]["Orders"]["required"][0], "id");

    // Bearer auth wires both the scheme and the top-level requirement
    assert_eq!(
        spec["components"]["securitySchemes"]["bearerAuth"]["bearerFormat"],
        "JWT"
    );
    assert_eq!(spec["security"][0]["bearerAuth"], json!([]));

    let metadata = outcome.metadata.unwrap();
    assert_eq!(metadata.endpoint_count, 10);
    assert_eq!(metadata.resource_count, 2);
}

#[test]
fn test_custom_endpoints_merge_into_paths() {
    let custom = vec![
        CustomEndpoint {
            path: "/health".to_string(),
            method: "GET".to_string(),
            summary: Some("Health probe".to_string()),
            tag: Some("Ops".to_string()),
            responses: Some(json!({ "200": { "description": "OK" } })),
        },
        CustomEndpoint {
            path: "/products/search".to_string(),
            method: "post".to_string(),
            summary: None,
            tag: Some("Products".to_string()),
            responses: None,
        },
    ];
    let outcome = generate_openapi_spec(Some(&shop_config()), &custom);
    let spec = outcome.data.unwrap();

    assert_eq!(spec["paths"]["/health"]["get"]["summary"], "Health probe");
    assert_eq!(
        spec["paths"]["/products/search"]["post"]["summary"],
        "Custom endpoint"
    );

    // "Products" already exists from the synthesized endpoints; only "Ops" is new
    let tags: Vec<&str> = spec["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["Products", "Orders", "Ops"]);
    assert_eq!(outcome.metadata.unwrap().endpoint_count, 12);
}

#[test]
fn test_reserved_keys_never_become_mapping_keys() {
    let mut config = shop_config();
    config.resources.push("constructor".to_string());
    let custom = vec![CustomEndpoint {
        path: "/ok/__proto__".to_string(),
        method: "get".to_string(),
        ..CustomEndpoint::default()
    }];

    let spec = generate_openapi_spec(Some(&config), &custom).data.unwrap();
    let rendered = spec.to_string();
    assert!(!rendered.contains("__proto__"));
    assert!(!rendered.contains("/constructor"));
    assert!(spec["components"]["schemas"].get("Constructor").is_none());
}

#[test]
fn test_generated_document_passes_validation() {
    let spec = generate_openapi_spec(Some(&shop_config()), &[]).data.unwrap();
    let outcome = validate_openapi_document(Some(&spec));
    assert!(outcome.success);
    let data = outcome.data.unwrap();
    assert_eq!(data["valid"], true);
    assert_eq!(data["errors"], json!([]));
    assert_eq!(data["checkedOperations"], 10);
}

#[test]
fn test_validation_reports_errors_and_warnings_separately() {
    let document = json!({
        "info": { "version": "1.0.0" },
        "paths": {}
    });
    let data = validate_openapi_document(Some(&document)).data.unwrap();
    assert_eq!(data["valid"], false);
    let errors = data["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e == "missing required field: openapi"));
    assert!(errors.iter().any(|e| e == "info is missing required field: title"));
    // An empty paths object is a warning, not an error
    assert!(data["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .any(|w| w == "document defines no paths"));

    // A document without paths at all is an error
    let data = validate_openapi_document(Some(&json!({ "openapi": "3.0.3" })))
        .data
        .unwrap();
    assert!(data["errors"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e == "missing required field: paths"));
}

#[test]
fn test_null_inputs_fail_uniformly() {
    let outcome = generate_openapi_spec(None, &[]);
    assert!(!outcome.success);
    assert_eq!(outcome.errors, vec!["config is null or undefined".to_string()]);

    let outcome = validate_openapi_document(None);
    assert!(!outcome.success);
    assert_eq!(outcome.errors, vec!["document is null or undefined".to_string()]);
}
