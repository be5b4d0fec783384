//! CLI functionality for the sparql-algebra tool
//!
//! Expressions, bindings, solutions and patterns are read as JSON documents
//! in their serde form.

pub mod eval;
pub mod filter;
pub mod output;
pub mod sse;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and deserialize a JSON document, naming `what` in errors
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} file: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {what} file: {}", path.display()))
}
