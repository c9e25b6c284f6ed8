//! apiforge - API design utilities served over the Model Context Protocol.
//!
//! The crate is split into a pure generation domain (`generation`), the MCP
//! tool surface that exposes it (`mcp`), and a live mock server built from
//! OpenAPI documents (`mock`). Every generator is a synchronous function
//! from a small config to rendered text or a JSON document; the async code
//! lives entirely at the transport boundaries.

pub mod core;
pub mod generation;
pub mod mcp;
pub mod mock;
