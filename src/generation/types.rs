//! Core types for the generation domain

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::core::Error;

/// HTTP methods emitted by the REST endpoint synthesizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Lowercase name, as used for OpenAPI path-item keys
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Languages the client generators can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientLanguage {
    TypeScript,
    Python,
}

impl ClientLanguage {
    pub fn display_name(&self) -> &'static str {
        match self {
            ClientLanguage::TypeScript => "TypeScript",
            ClientLanguage::Python => "Python",
        }
    }
}

impl fmt::Display for ClientLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientLanguage::TypeScript => write!(f, "typescript"),
            ClientLanguage::Python => write!(f, "python"),
        }
    }
}

impl FromStr for ClientLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(ClientLanguage::TypeScript),
            "python" | "py" => Ok(ClientLanguage::Python),
            _ => Err(Error::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Output flavor for the TypeScript REST client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientFlavor {
    #[default]
    Axios,
    Fetch,
}

/// Which kind of API a client is generated against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStyle {
    #[default]
    Rest,
    Graphql,
}

/// Options read once by the client generators to pick a render branch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientOptions {
    pub output_format: ClientFlavor,
    pub include_types: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            output_format: ClientFlavor::Axios,
            include_types: true,
        }
    }
}

/// Authentication scheme selected in an [`ApiConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthType {
    #[serde(rename = "bearer")]
    Bearer,
    #[serde(rename = "apiKey")]
    ApiKey,
    #[serde(rename = "oauth2")]
    OAuth2,
    #[default]
    #[serde(rename = "none")]
    None,
}

/// Authentication block of an [`ApiConfig`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(rename = "type", default)]
    pub auth_type: AuthType,
}

/// API design configuration driving spec assembly
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub base_url: Option<String>,
    pub resources: Vec<String>,
    pub auth: Option<AuthConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: "1.0.0".to_string(),
            description: None,
            base_url: None,
            resources: Vec::new(),
            auth: None,
        }
    }
}

/// Caller-supplied endpoint merged into the assembled spec alongside the
/// synthesized CRUD endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomEndpoint {
    pub path: String,
    pub method: String,
    pub summary: Option<String>,
    pub tag: Option<String>,
    pub responses: Option<JsonValue>,
}

/// One parameter of a synthesized endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub required: bool,
    pub schema: JsonValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// In-memory record describing one endpoint before rendering.
///
/// Created fresh per resource and never mutated after creation; consumers
/// merge it into a spec document and discard it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub operation_id: String,
    pub summary: String,
    pub tag: String,
    pub parameters: Vec<ParameterSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<JsonValue>,
    pub responses: BTreeMap<String, JsonValue>,
}

/// GraphQL field descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// GraphQL object type descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLType {
    pub name: String,
    pub fields: Vec<GraphQLField>,
}

/// GraphQL query descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescriptor {
    pub name: String,
    pub args: Vec<GraphQLField>,
    pub return_type: String,
}

/// Input accepted by the GraphQL schema assembler: either explicit type
/// descriptors or a list of resource names to derive types from
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GraphQLInput {
    Types(Vec<GraphQLType>),
    Resources(Vec<String>),
}

/// Configuration for the mock server (text rendering and live instance)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MockServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    pub enable_json_body: bool,
}

impl Default for MockServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            enable_cors: true,
            enable_json_body: true,
        }
    }
}

/// Counts attached to successful generator outcomes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeMetadata {
    pub endpoint_count: usize,
    pub resource_count: usize,
    pub generated_at: String,
}

impl OutcomeMetadata {
    pub fn new(endpoint_count: usize, resource_count: usize) -> Self {
        Self {
            endpoint_count,
            resource_count,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Uniform result envelope returned by the generator entry points
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<OutcomeMetadata>,
}

impl Outcome {
    /// Successful outcome carrying only data
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: Vec::new(),
            metadata: None,
        }
    }

    /// Successful outcome with generation metadata attached
    pub fn ok_with_metadata(data: JsonValue, metadata: OutcomeMetadata) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: Vec::new(),
            metadata: Some(metadata),
        }
    }

    /// Failed outcome with a single error message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            errors: vec![message.into()],
            metadata: None,
        }
    }
}
