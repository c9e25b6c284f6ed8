//! The MCP server handler and its six tools.
//!
//! Every tool takes a JSON args object with a `response_format` knob
//! (`minimal`/`concise`/`detailed`) controlling which subset of the
//! underlying generator outcome is echoed back as a JSON text content
//! block. Generator failures come back as MCP error results.

use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars, tool, tool_handler, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};
use tracing::info;

use crate::generation::clients::generate_client;
use crate::generation::graphql::create_graphql_schema;
use crate::generation::mock::{count_mock_routes, render_mock_server_code};
use crate::generation::openapi::{generate_openapi_spec, validate_openapi_document};
use crate::generation::patterns::supported_patterns;
use crate::generation::rest::synthesize_endpoints;
use crate::generation::types::{
    ApiConfig, ApiStyle, ClientFlavor, ClientLanguage, ClientOptions, CustomEndpoint,
    GraphQLInput, MockServerConfig, Outcome, OutcomeMetadata,
};

/// How much of a generator outcome is echoed back to the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Only the success flag and metadata
    Minimal,
    /// Metadata plus a per-tool summary of the data
    #[default]
    Concise,
    /// The full outcome
    Detailed,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GenerateOpenApiArgs {
    /// API design config (name, version, baseUrl, resources, auth)
    pub config: Option<JsonValue>,
    /// Extra endpoints merged into the generated paths
    pub custom_endpoints: Option<JsonValue>,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DesignRestApiArgs {
    /// Resource names to synthesize CRUD endpoints for
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CreateGraphqlSchemaArgs {
    /// Either an array of type descriptors or an array of resource names
    pub input: Option<JsonValue>,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GenerateClientArgs {
    /// OpenAPI-shaped spec to generate a client for
    pub spec: Option<JsonValue>,
    /// Target language: typescript (default) or python
    pub language: Option<String>,
    /// REST output flavor: axios (default) or fetch
    pub output_format: Option<String>,
    /// Render interface blocks from components.schemas (default true)
    pub include_types: Option<bool>,
    /// API style: rest (default) or graphql
    pub api_style: Option<String>,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ValidateApiArgs {
    /// OpenAPI-shaped document to lint
    pub spec: Option<JsonValue>,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GenerateMockServerArgs {
    /// OpenAPI-shaped spec to derive mock routes from
    pub spec: Option<JsonValue>,
    /// Port the rendered server listens on (default 3000)
    pub port: Option<u16>,
    /// Include a CORS middleware line (default true)
    pub enable_cors: Option<bool>,
    /// Include a JSON body-parsing middleware line (default true)
    pub enable_json_body: Option<bool>,
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// The MCP server handler for apiforge
#[derive(Clone)]
pub struct ApiForgeServer {
    tool_router: ToolRouter<ApiForgeServer>,
}

impl Default for ApiForgeServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ApiForgeServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Generate a complete OpenAPI 3.0.3 document from an API design config: CRUD endpoints per resource, security schemes, servers, and tags."
    )]
    async fn generate_openapi(
        &self,
        Parameters(args): Parameters<GenerateOpenApiArgs>,
    ) -> Result<CallToolResult, McpError> {
        let config = match args.config {
            None => None,
            Some(value) => match serde_json::from_value::<ApiConfig>(value) {
                Ok(parsed) => Some(parsed),
                Err(error) => {
                    return Ok(error_result(&[format!("invalid config: {error}")]));
                }
            },
        };
        let custom_endpoints = match args.custom_endpoints {
            None => Vec::new(),
            Some(value) => match serde_json::from_value::<Vec<CustomEndpoint>>(value) {
                Ok(parsed) => parsed,
                Err(error) => {
                    return Ok(error_result(&[format!("invalid custom_endpoints: {error}")]));
                }
            },
        };
        let outcome = generate_openapi_spec(config.as_ref(), &custom_endpoints);
        Ok(render_outcome(outcome, args.response_format, |data| {
            json!({
                "title": data.pointer("/info/title"),
                "pathCount": data.get("paths").and_then(JsonValue::as_object).map(|p| p.len()),
                "tags": data.get("tags"),
            })
        }))
    }

    #[tool(
        description = "Synthesize the fixed CRUD endpoint set (list/create/get/update/delete) for a list of resource names and return the endpoint descriptors."
    )]
    async fn design_rest_api(
        &self,
        Parameters(args): Parameters<DesignRestApiArgs>,
    ) -> Result<CallToolResult, McpError> {
        let endpoints = synthesize_endpoints(&args.resources);
        let metadata = OutcomeMetadata::new(endpoints.len(), args.resources.len());
        let outcome = Outcome::ok_with_metadata(json!({ "endpoints": endpoints }), metadata);
        Ok(render_outcome(outcome, args.response_format, |data| {
            let operation_ids: Vec<JsonValue> = data
                .get("endpoints")
                .and_then(JsonValue::as_array)
                .map(|endpoints| {
                    endpoints
                        .iter()
                        .filter_map(|e| e.get("operationId").cloned())
                        .collect()
                })
                .unwrap_or_default();
            json!({ "operationIds": operation_ids })
        }))
    }

    #[tool(
        description = "Create a GraphQL schema (types, queries, and SDL) from resource names or explicit type descriptors."
    )]
    async fn create_graphql_schema(
        &self,
        Parameters(args): Parameters<CreateGraphqlSchemaArgs>,
    ) -> Result<CallToolResult, McpError> {
        let input = match args.input {
            None => None,
            Some(value) => match serde_json::from_value::<GraphQLInput>(value) {
                Ok(parsed) => Some(parsed),
                Err(error) => {
                    return Ok(error_result(&[format!("invalid input: {error}")]));
                }
            },
        };
        let outcome = create_graphql_schema(input);
        Ok(render_outcome(outcome, args.response_format, |data| {
            json!({ "sdl": data.get("sdl") })
        }))
    }

    #[tool(
        description = "Generate API client source code (TypeScript axios/fetch, Python requests, or a GraphQL fetch client) from an OpenAPI-shaped spec."
    )]
    async fn generate_client(
        &self,
        Parameters(args): Parameters<GenerateClientArgs>,
    ) -> Result<CallToolResult, McpError> {
        let Some(spec) = args.spec else {
            return Ok(error_result(&["spec is null or undefined".to_string()]));
        };

        let language = match args
            .language
            .as_deref()
            .unwrap_or("typescript")
            .parse::<ClientLanguage>()
        {
            Ok(language) => language,
            Err(error) => return Ok(error_result(&[error.to_string()])),
        };
        // Unrecognized flavor/style values degrade to the defaults
        let style = match args.api_style.as_deref() {
            Some("graphql") => ApiStyle::Graphql,
            _ => ApiStyle::Rest,
        };
        let options = ClientOptions {
            output_format: match args.output_format.as_deref() {
                Some("fetch") => ClientFlavor::Fetch,
                _ => ClientFlavor::Axios,
            },
            include_types: args.include_types.unwrap_or(true),
        };

        let outcome = match generate_client(&spec, language, style, &options) {
            Ok(code) => Outcome::ok(json!({
                "language": language.to_string(),
                "code": code,
            })),
            Err(error) => Outcome::failure(error.to_string()),
        };
        Ok(render_outcome(outcome, args.response_format, |data| {
            json!({
                "language": data.get("language"),
                "lineCount": data
                    .get("code")
                    .and_then(JsonValue::as_str)
                    .map(|code| code.lines().count()),
            })
        }))
    }

    #[tool(
        description = "Structurally validate an OpenAPI-shaped document: required fields, per-operation responses, duplicate operationIds, unknown methods."
    )]
    async fn validate_api(
        &self,
        Parameters(args): Parameters<ValidateApiArgs>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = validate_openapi_document(args.spec.as_ref());
        Ok(render_outcome(outcome, args.response_format, |data| {
            json!({
                "valid": data.get("valid"),
                "errorCount": data.get("errors").and_then(JsonValue::as_array).map(|e| e.len()),
                "warningCount": data.get("warnings").and_then(JsonValue::as_array).map(|w| w.len()),
            })
        }))
    }

    #[tool(
        description = "Render an Express-style mock server (as source text) whose routes answer with example payloads synthesized from the spec's response schemas."
    )]
    async fn generate_mock_server(
        &self,
        Parameters(args): Parameters<GenerateMockServerArgs>,
    ) -> Result<CallToolResult, McpError> {
        let Some(spec) = args.spec else {
            return Ok(error_result(&["spec is null or undefined".to_string()]));
        };

        let defaults = MockServerConfig::default();
        let config = MockServerConfig {
            port: args.port.unwrap_or(defaults.port),
            enable_cors: args.enable_cors.unwrap_or(defaults.enable_cors),
            enable_json_body: args.enable_json_body.unwrap_or(defaults.enable_json_body),
        };
        let route_count = count_mock_routes(&spec);
        let code = render_mock_server_code(&spec, &config);

        let outcome = Outcome::ok(json!({
            "port": config.port,
            "routeCount": route_count,
            "code": code,
        }));
        Ok(render_outcome(outcome, args.response_format, |data| {
            json!({
                "port": data.get("port"),
                "routeCount": data.get("routeCount"),
            })
        }))
    }
}

#[tool_handler]
impl ServerHandler for ApiForgeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "apiforge".to_string(),
                title: Some("ApiForge MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: Some("https://github.com/apiforge/apiforge".to_string()),
            },
            instructions: Some(format!(
                "ApiForge - API design and codegen tools.\
                \n\nTools available:\
                \n- generate_openapi: build an OpenAPI 3.0.3 document from a design config\
                \n- design_rest_api: synthesize CRUD endpoint descriptors for resources\
                \n- create_graphql_schema: derive GraphQL types, queries, and SDL\
                \n- generate_client: render TypeScript or Python client code\
                \n- validate_api: structurally lint an OpenAPI document\
                \n- generate_mock_server: render a mock server with example payloads\
                \n\nSupported refactoring patterns: {}",
                supported_patterns().join(", ")
            )),
        }
    }
}

/// Shape a generator outcome according to the requested response format.
fn render_outcome(
    outcome: Outcome,
    format: ResponseFormat,
    summarize: impl FnOnce(&JsonValue) -> JsonValue,
) -> CallToolResult {
    if !outcome.success {
        return error_result(&outcome.errors);
    }

    let body = match format {
        ResponseFormat::Minimal => json!({
            "success": true,
            "metadata": outcome.metadata,
        }),
        ResponseFormat::Concise => {
            let summary = outcome
                .data
                .as_ref()
                .map(summarize)
                .unwrap_or(JsonValue::Null);
            json!({
                "success": true,
                "metadata": outcome.metadata,
                "data": summary,
            })
        }
        ResponseFormat::Detailed => json!({
            "success": true,
            "metadata": outcome.metadata,
            "data": outcome.data,
        }),
    };
    CallToolResult::success(vec![Content::text(body.to_string())])
}

fn error_result(errors: &[String]) -> CallToolResult {
    let body = json!({ "success": false, "errors": errors });
    CallToolResult::error(vec![Content::text(body.to_string())])
}

/// Run the MCP server over stdio until the peer disconnects.
pub async fn serve_stdio() -> anyhow::Result<()> {
    let server = ApiForgeServer::new();
    info!("starting apiforge MCP server on stdio");
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}
