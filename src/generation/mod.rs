//! Generation domain module - pure config-to-output transformations.
//!
//! Every generator in this module is a synchronous, single-pass function:
//! it takes a small configuration value and returns rendered source text or
//! a JSON document. Nothing here touches the filesystem, the network, or
//! shared mutable state.

pub mod clients;
pub mod graphql;
pub mod mock;
pub mod openapi;
pub mod patterns;
pub mod rest;
pub mod sanitizers;
pub mod types;
pub mod utils;

pub use types::*;
