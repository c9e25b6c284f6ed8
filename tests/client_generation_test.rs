//! Generates a spec from a design config and renders every client flavor
//! from it, checking the pieces fit together without hand-built fixtures.

use apiforge::generation::clients::generate_client;
use apiforge::generation::openapi::generate_openapi_spec;
use apiforge::generation::types::{
    ApiConfig, ApiStyle, ClientFlavor, ClientLanguage, ClientOptions,
};

fn generated_spec() -> serde_json::Value {
    let config = ApiConfig {
        name: "Library API".to_string(),
        resources: vec!["books".to_string()],
        ..ApiConfig::default()
    };
    generate_openapi_spec(Some(&config), &[]).data.unwrap()
}

#[test]
fn test_typescript_axios_client_from_generated_spec() {
    let code = generate_client(
        &generated_spec(),
        ClientLanguage::TypeScript,
        ApiStyle::Rest,
        &ClientOptions::default(),
    )
    .unwrap();

    assert!(code.contains("import axios, { AxiosInstance } from 'axios';"));
    assert!(code.contains("export class ApiClient {"));
    // One method per synthesized CRUD operation
    assert!(code.contains("async listBooks(params?: Record<string, unknown>): Promise<any> {"));
    assert!(code.contains("async createBooks("));
    assert!(code.contains("async getBooksById("));
    assert!(code.contains("async updateBooks("));
    assert!(code.contains("async deleteBooks("));
    // The resource schema renders as an interface
    assert!(code.contains("export interface Books {"));
    assert!(code.contains("  id: string;"));
    assert!(code.contains("  createdAt?: string;"));
}

#[test]
fn test_typescript_fetch_flavor() {
    let options = ClientOptions {
        output_format: ClientFlavor::Fetch,
        ..ClientOptions::default()
    };
    let code = generate_client(
        &generated_spec(),
        ClientLanguage::TypeScript,
        ApiStyle::Rest,
        &options,
    )
    .unwrap();

    assert!(!code.contains("axios"));
    assert!(code.contains("fetch(`${this.baseUrl}/books`"));
    assert!(code.contains("method: 'PUT',"));
    assert!(code.contains("body: JSON.stringify(params),"));
}

#[test]
fn test_python_client_from_generated_spec() {
    let code = generate_client(
        &generated_spec(),
        ClientLanguage::Python,
        ApiStyle::Rest,
        &ClientOptions::default(),
    )
    .unwrap();

    assert!(code.contains("import requests"));
    assert!(code.contains("class ApiClient:"));
    // camelCase operationIds become snake_case method names
    assert!(code.contains("def list_books(self, params: Optional[Dict[str, Any]] = None) -> Any:"));
    assert!(code.contains("def get_books_by_id("));
    assert!(code.contains("requests.get(f\"{self.base_url}/books\", params=params)"));
    assert!(code.contains("requests.post(f\"{self.base_url}/books\", json=params)"));
}

#[test]
fn test_graphql_client_is_typescript_only() {
    let code = generate_client(
        &generated_spec(),
        ClientLanguage::TypeScript,
        ApiStyle::Graphql,
        &ClientOptions::default(),
    )
    .unwrap();
    assert!(code.contains("export class GraphQLClient {"));

    let err = generate_client(
        &generated_spec(),
        ClientLanguage::Python,
        ApiStyle::Graphql,
        &ClientOptions::default(),
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("Unsupported client language"));
}
