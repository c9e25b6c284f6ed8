//! MCP tool surface
//!
//! Thin adapter exposing the generation domain as six MCP tools over the
//! official Rust SDK. All logic lives in `generation`; this module only
//! parses tool arguments and shapes responses.

pub mod server;

pub use server::{ApiForgeServer, serve_stdio};
