#![warn(missing_docs)]
//! # supplier-assess-contract-tests
//!
//! Helpers for validating the frozen JSON contracts under `contracts/`
//! against their schemas and against the Rust contract types.

use std::path::PathBuf;

use jsonschema::JSONSchema;
use serde_json::Value;

/// Absolute path of a file under the workspace `contracts/` directory.
pub fn contract_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../contracts")
        .join(relative)
}

/// Reads a contract file as raw text.
///
/// # Panics
/// Panics when the file is missing; contract files are part of the tree.
pub fn load_text(relative: &str) -> String {
    let path = contract_path(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|error| panic!("{} should be readable: {error}", path.display()))
}

/// Reads a contract file as JSON.
///
/// # Panics
/// Panics when the file is missing or not valid JSON.
pub fn load_json(relative: &str) -> Value {
    serde_json::from_str(&load_text(relative))
        .unwrap_or_else(|error| panic!("{relative} should be valid json: {error}"))
}

/// Compiles a schema file into a validator.
///
/// # Panics
/// Panics when the schema does not compile.
pub fn compile_validator(relative: &str) -> JSONSchema {
    let schema = load_json(relative);
    JSONSchema::compile(&schema)
        .unwrap_or_else(|error| panic!("{relative} should compile: {error}"))
}
