//! TypeScript GraphQL fetch client renderer
//!
//! The client has a fixed shape regardless of the schema: a `query` method
//! that POSTs the document and variables as JSON.

/// Render the fixed-shape GraphQL client class.
pub fn generate_fetch_client() -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("export class GraphQLClient {".to_string());
    lines.push("  constructor(private endpoint: string) {}".to_string());
    lines.push(String::new());
    lines.push(
        "  async query(query: string, variables?: Record<string, unknown>): Promise<any> {"
            .to_string(),
    );
    lines.push("    const response = await fetch(this.endpoint, {".to_string());
    lines.push("      method: 'POST',".to_string());
    lines.push("      headers: { 'Content-Type': 'application/json' },".to_string());
    lines.push("      body: JSON.stringify({ query, variables }),".to_string());
    lines.push("    });".to_string());
    lines.push("    return response.json();".to_string());
    lines.push("  }".to_string());
    lines.push("}".to_string());

    lines.join("\n")
}
