// src/data/cast.rs
//! Cast index loader.
//!
//! The cast file is a JSON object mapping each movie title to the array
//! of its credited actor names.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{CostarError, Result};
use crate::types::CastIndex;

/// Loads the cast index from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_cast_index(path: &Path) -> Result<CastIndex> {
    let content = fs::read_to_string(path).map_err(|source| CostarError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse(&content)
}

/// Parses cast index JSON.
///
/// Duplicate names within one film collapse (casts are sets). Empty
/// cast arrays are permitted and simply contribute no edges downstream.
///
/// # Errors
/// Returns an error if the input is not a JSON object of string arrays.
pub fn parse(content: &str) -> Result<CastIndex> {
    let raw: HashMap<String, Vec<String>> = serde_json::from_str(content)?;
    Ok(raw
        .into_iter()
        .map(|(film, cast)| (film, cast.into_iter().collect()))
        .collect())
}
