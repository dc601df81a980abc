//! # visitplan-parser
//!
//! Parsers for visitplan activity-row files.
//!
//! A rows file is the file-based stand-in for the entry form: an ordered list
//! of field-name → raw-text mappings, one per activity row. Two formats are
//! supported and auto-detected by extension:
//!
//! - TOML (`.toml`, the default): `[[row]]` tables
//! - JSON (`.json`): an array of objects
//!
//! Scalar values (numbers, booleans) are accepted and carried as their text
//! form; field-level validation happens later, in the record builder.
//!
//! ## Example
//!
//! ```rust
//! use visitplan_parser::parse_rows;
//!
//! let rows = parse_rows(r#"
//! [[row]]
//! activity = "Site survey"
//! start-date = "2021-08-23"
//! start-time = "8"
//! "#).unwrap();
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0]["activity"], "Site survey");
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use visitplan_core::FieldMap;

/// Parsing error
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML rows file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON rows file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `[[row]]` tables (.toml)
    Toml,
    /// Array of objects (.json)
    Json,
}

/// Detect file format from extension; anything but `.json` reads as TOML
pub fn detect_format(path: &Path) -> FileFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => FileFormat::Json,
        _ => FileFormat::Toml,
    }
}

/// A raw scalar as it appears in the file; everything becomes field text
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl RawValue {
    fn into_text(self) -> String {
        match self {
            RawValue::Text(s) => s,
            RawValue::Int(n) => n.to_string(),
            RawValue::Float(x) => x.to_string(),
            RawValue::Bool(b) => b.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RowsFile {
    #[serde(default)]
    row: Vec<HashMap<String, RawValue>>,
}

fn into_field_maps(rows: Vec<HashMap<String, RawValue>>) -> Vec<FieldMap> {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(key, value)| (key, value.into_text()))
                .collect()
        })
        .collect()
}

/// Parse rows from the TOML format
pub fn parse_rows(input: &str) -> Result<Vec<FieldMap>, ParseError> {
    let file: RowsFile = toml::from_str(input)?;
    Ok(into_field_maps(file.row))
}

/// Parse rows from the JSON format
pub fn parse_json_rows(input: &str) -> Result<Vec<FieldMap>, ParseError> {
    let rows: Vec<HashMap<String, RawValue>> = serde_json::from_str(input)?;
    Ok(into_field_maps(rows))
}

/// Parse a rows file from a path (auto-detects format)
pub fn parse_file(path: &Path) -> Result<Vec<FieldMap>, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match detect_format(path) {
        FileFormat::Json => parse_json_rows(&content),
        FileFormat::Toml => parse_rows(&content),
    }
}
