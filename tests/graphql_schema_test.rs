//! SDL assembly checks for the GraphQL schema builder.

use apiforge::generation::graphql::create_graphql_schema;
use apiforge::generation::types::{GraphQLField, GraphQLInput, GraphQLType};

#[test]
fn test_schema_from_resource_names() {
    let input = GraphQLInput::Resources(vec!["users".to_string(), "posts".to_string()]);
    let outcome = create_graphql_schema(Some(input));
    assert!(outcome.success);
    let data = outcome.data.unwrap();

    // Resource names are singularized and capitalized
    assert_eq!(data["types"][0]["name"], "User");
    assert_eq!(data["types"][1]["name"], "Post");
    assert_eq!(data["types"][0]["fields"][0]["type"], "ID!");

    // A get/list query pair per type
    let queries = data["queries"].as_array().unwrap();
    assert_eq!(queries.len(), 4);
    assert_eq!(queries[0]["name"], "getUser");
    assert_eq!(queries[1]["name"], "listUsers");
    assert_eq!(queries[1]["returnType"], "[User!]!");

    let sdl = data["sdl"].as_str().unwrap();
    assert!(sdl.contains("type User {\n  id: ID!\n  name: String!\n}"));
    assert!(sdl.contains("type Query {"));
    assert!(sdl.contains("  getUser(id: ID!): User"));
    assert!(sdl.contains("  listPosts: [Post!]!"));
}

#[test]
fn test_schema_from_explicit_types() {
    let input = GraphQLInput::Types(vec![GraphQLType {
        name: "Invoice".to_string(),
        fields: vec![
            GraphQLField {
                name: "id".to_string(),
                field_type: "ID!".to_string(),
            },
            GraphQLField {
                name: "total".to_string(),
                field_type: "Float!".to_string(),
            },
        ],
    }]);
    let data = create_graphql_schema(Some(input)).data.unwrap();

    let sdl = data["sdl"].as_str().unwrap();
    assert!(sdl.contains("type Invoice {\n  id: ID!\n  total: Float!\n}"));
    assert!(sdl.contains("getInvoice(id: ID!): Invoice"));
}

#[test]
fn test_null_input_fails() {
    let outcome = create_graphql_schema(None);
    assert!(!outcome.success);
    assert_eq!(outcome.errors, vec!["input is null or undefined".to_string()]);
}

#[test]
fn test_empty_resource_list_yields_empty_sdl() {
    let outcome = create_graphql_schema(Some(GraphQLInput::Resources(Vec::new())));
    assert!(outcome.success);
    let data = outcome.data.unwrap();
    assert_eq!(data["sdl"], "");
    assert!(data["types"].as_array().unwrap().is_empty());
}
