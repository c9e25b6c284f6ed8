//! REST endpoint synthesizer
//!
//! For each resource name this module deterministically emits exactly five
//! CRUD endpoint descriptors in fixed order: LIST, CREATE, GET-BY-ID,
//! UPDATE, DELETE. Pagination parameters are attached only to LIST; the
//! item-level operations carry a required string `id` path parameter.
//! Empty input yields empty output and no other validation is performed.

use std::collections::BTreeMap;

use serde_json::{Value as JsonValue, json};

use crate::generation::types::{EndpointDescriptor, HttpMethod, ParameterSpec};
use crate::generation::utils::capitalize_first;

/// Synthesize the fixed CRUD endpoint set for every resource name.
pub fn synthesize_endpoints(resources: &[String]) -> Vec<EndpointDescriptor> {
    resources
        .iter()
        .flat_map(|resource| resource_endpoints(resource))
        .collect()
}

fn resource_endpoints(resource: &str) -> Vec<EndpointDescriptor> {
    let tag = capitalize_first(resource);
    let collection_path = format!("/{resource}");
    let item_path = format!("/{resource}/{{id}}");
    let schema_ref = json!({ "$ref": format!("#/components/schemas/{tag}") });

    vec![
        EndpointDescriptor {
            method: HttpMethod::Get,
            path: collection_path.clone(),
            operation_id: format!("list{tag}"),
            summary: format!("List {resource}"),
            tag: tag.clone(),
            parameters: pagination_parameters(),
            request_body: None,
            responses: responses([
                (
                    "200",
                    json_response(
                        &format!("Paginated list of {resource}"),
                        json!({ "type": "array", "items": schema_ref }),
                    ),
                ),
                ("400", description_response("Invalid query parameters")),
            ]),
        },
        EndpointDescriptor {
            method: HttpMethod::Post,
            path: collection_path,
            operation_id: format!("create{tag}"),
            summary: format!("Create a new {resource} entry"),
            tag: tag.clone(),
            parameters: Vec::new(),
            request_body: Some(request_body(&schema_ref)),
            responses: responses([(
                "201",
                json_response(&format!("Created {resource} entry"), schema_ref.clone()),
            )]),
        },
        EndpointDescriptor {
            method: HttpMethod::Get,
            path: item_path.clone(),
            operation_id: format!("get{tag}ById"),
            summary: format!("Get a single {resource} entry by id"),
            tag: tag.clone(),
            parameters: vec![id_parameter()],
            request_body: None,
            responses: responses([
                (
                    "200",
                    json_response(&format!("The requested {resource} entry"), schema_ref.clone()),
                ),
                ("404", description_response("Not found")),
            ]),
        },
        EndpointDescriptor {
            method: HttpMethod::Put,
            path: item_path.clone(),
            operation_id: format!("update{tag}"),
            summary: format!("Update a {resource} entry"),
            tag: tag.clone(),
            parameters: vec![id_parameter()],
            request_body: Some(request_body(&schema_ref)),
            responses: responses([
                (
                    "200",
                    json_response(&format!("Updated {resource} entry"), schema_ref),
                ),
                ("404", description_response("Not found")),
            ]),
        },
        EndpointDescriptor {
            method: HttpMethod::Delete,
            path: item_path,
            operation_id: format!("delete{tag}"),
            summary: format!("Delete a {resource} entry"),
            tag,
            parameters: vec![id_parameter()],
            request_body: None,
            responses: responses([
                ("204", description_response("Deleted")),
                ("404", description_response("Not found")),
            ]),
        },
    ]
}

fn pagination_parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec {
            name: "page".to_string(),
            location: "query".to_string(),
            required: false,
            schema: json!({ "type": "integer", "default": 1, "minimum": 1 }),
            description: Some("Page number".to_string()),
        },
        ParameterSpec {
            name: "limit".to_string(),
            location: "query".to_string(),
            required: false,
            schema: json!({ "type": "integer", "default": 20, "minimum": 1, "maximum": 100 }),
            description: Some("Items per page".to_string()),
        },
        ParameterSpec {
            name: "sort".to_string(),
            location: "query".to_string(),
            required: false,
            schema: json!({ "type": "string" }),
            description: Some("Sort expression".to_string()),
        },
    ]
}

fn id_parameter() -> ParameterSpec {
    ParameterSpec {
        name: "id".to_string(),
        location: "path".to_string(),
        required: true,
        schema: json!({ "type": "string" }),
        description: None,
    }
}

fn request_body(schema_ref: &JsonValue) -> JsonValue {
    json!({
        "required": true,
        "content": { "application/json": { "schema": schema_ref } }
    })
}

fn json_response(description: &str, schema: JsonValue) -> JsonValue {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } }
    })
}

fn description_response(description: &str) -> JsonValue {
    json!({ "description": description })
}

fn responses<const N: usize>(entries: [(&str, JsonValue); N]) -> BTreeMap<String, JsonValue> {
    entries
        .into_iter()
        .map(|(status, value)| (status.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_five_endpoints_per_resource() {
        let endpoints = synthesize_endpoints(&names(&["users", "orders", "products"]));
        assert_eq!(endpoints.len(), 15);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(synthesize_endpoints(&[]).is_empty());
    }

    #[test]
    fn test_fixed_method_order() {
        let endpoints = synthesize_endpoints(&names(&["users"]));
        let methods: Vec<HttpMethod> = endpoints.iter().map(|e| e.method).collect();
        assert_eq!(
            methods,
            vec![
                HttpMethod::Get,
                HttpMethod::Post,
                HttpMethod::Get,
                HttpMethod::Put,
                HttpMethod::Delete
            ]
        );
    }

    #[test]
    fn test_paths_and_operation_ids() {
        let endpoints = synthesize_endpoints(&names(&["users"]));
        assert_eq!(endpoints[0].path, "/users");
        assert_eq!(endpoints[0].operation_id, "listUsers");
        assert_eq!(endpoints[1].operation_id, "createUsers");
        assert_eq!(endpoints[2].path, "/users/{id}");
        assert_eq!(endpoints[2].operation_id, "getUsersById");
        assert_eq!(endpoints[3].operation_id, "updateUsers");
        assert_eq!(endpoints[4].operation_id, "deleteUsers");
    }

    #[test]
    fn test_status_codes_per_operation() {
        let endpoints = synthesize_endpoints(&names(&["users"]));
        let codes = |i: usize| -> Vec<&str> {
            endpoints[i].responses.keys().map(String::as_str).collect()
        };
        assert_eq!(codes(0), vec!["200", "400"]);
        assert_eq!(codes(1), vec!["201"]);
        assert_eq!(codes(2), vec!["200", "404"]);
        assert_eq!(codes(3), vec!["200", "404"]);
        assert_eq!(codes(4), vec!["204", "404"]);
    }

    #[test]
    fn test_pagination_only_on_list() {
        let endpoints = synthesize_endpoints(&names(&["users"]));
        let list_params: Vec<&str> = endpoints[0]
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(list_params, vec!["page", "limit", "sort"]);
        assert_eq!(
            endpoints[0].parameters[1].schema["maximum"],
            serde_json::json!(100)
        );

        // Item-level operations get only the required id path parameter
        for endpoint in &endpoints[2..] {
            assert_eq!(endpoint.parameters.len(), 1);
            assert_eq!(endpoint.parameters[0].name, "id");
            assert_eq!(endpoint.parameters[0].location, "path");
            assert!(endpoint.parameters[0].required);
        }
        assert!(endpoints[1].parameters.is_empty());
    }

    #[test]
    fn test_tag_is_capitalized_resource() {
        let endpoints = synthesize_endpoints(&names(&["orderItems"]));
        assert!(endpoints.iter().all(|e| e.tag == "OrderItems"));
    }

    #[test]
    fn test_no_resource_name_validation() {
        // Reserved names pass straight through; they are dropped later at
        // assembly time, not here.
        let endpoints = synthesize_endpoints(&names(&["__proto__"]));
        assert_eq!(endpoints.len(), 5);
        assert_eq!(endpoints[0].path, "/__proto__");
    }
}
