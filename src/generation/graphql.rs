//! GraphQL schema assembler
//!
//! Converts resource names (or explicit type descriptors) into GraphQL
//! type/query descriptors and renders the SDL string by concatenation.

use serde_json::json;

use crate::generation::types::{GraphQLField, GraphQLInput, GraphQLType, Outcome, QueryDescriptor};
use crate::generation::utils::{capitalize_first, pluralize, singularize};

/// Build types, a `getX`/`listXs` query pair per type, and the rendered SDL.
///
/// Fails only when the input is absent.
pub fn create_graphql_schema(input: Option<GraphQLInput>) -> Outcome {
    let Some(input) = input else {
        return Outcome::failure("input is null or undefined");
    };

    let types = match input {
        GraphQLInput::Types(types) => types,
        GraphQLInput::Resources(resources) => resources
            .iter()
            .map(|resource| derive_type(resource))
            .collect(),
    };

    let queries: Vec<QueryDescriptor> = types.iter().flat_map(queries_for_type).collect();
    let sdl = render_sdl(&types, &queries);

    Outcome::ok(json!({
        "types": types,
        "queries": queries,
        "sdl": sdl,
    }))
}

/// One object type per resource with the fixed `id`/`name` field pair
fn derive_type(resource: &str) -> GraphQLType {
    GraphQLType {
        name: capitalize_first(&singularize(resource)),
        fields: vec![
            GraphQLField {
                name: "id".to_string(),
                field_type: "ID!".to_string(),
            },
            GraphQLField {
                name: "name".to_string(),
                field_type: "String!".to_string(),
            },
        ],
    }
}

fn queries_for_type(gql_type: &GraphQLType) -> Vec<QueryDescriptor> {
    let name = &gql_type.name;
    vec![
        QueryDescriptor {
            name: format!("get{name}"),
            args: vec![GraphQLField {
                name: "id".to_string(),
                field_type: "ID!".to_string(),
            }],
            return_type: name.clone(),
        },
        QueryDescriptor {
            name: format!("list{}", pluralize(name)),
            args: Vec::new(),
            return_type: format!("[{name}!]!"),
        },
    ]
}

fn render_sdl(types: &[GraphQLType], queries: &[QueryDescriptor]) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for gql_type in types {
        let mut lines: Vec<String> = Vec::new();
        lines.push(format!("type {} {{", gql_type.name));
        for field in &gql_type.fields {
            lines.push(format!("  {}: {}", field.name, field.field_type));
        }
        lines.push("}".to_string());
        blocks.push(lines.join("\n"));
    }

    if !queries.is_empty() {
        let mut lines: Vec<String> = Vec::new();
        lines.push("type Query {".to_string());
        for query in queries {
            let args = if query.args.is_empty() {
                String::new()
            } else {
                let rendered: Vec<String> = query
                    .args
                    .iter()
                    .map(|arg| format!("{}: {}", arg.name, arg.field_type))
                    .collect();
                format!("({})", rendered.join(", "))
            };
            lines.push(format!("  {}{}: {}", query.name, args, query.return_type));
        }
        lines.push("}".to_string());
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}
