// This software is provided for non-commercial use only.
// Commercial use is strictly prohibited.
// If you use, modify, or redistribute this software, you must provide proper attribution to the original author.
// (c) 2026 Onur Tuna. All rights reserved.

//! Source loader — reads the JSON dictionary file into memory.
//!
//! The whole file is parsed and validated BEFORE the builder touches the
//! output path, so a missing or malformed source never clobbers a previous
//! build.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::ParseMode;
use crate::error::{DictError, Result};

/// One dictionary record as it appears in the source file.
///
/// The short field names `t` (term) and `d` (definition) are a fixed
/// convention of the source format, not configurable.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Entry {
    #[serde(rename = "t")]
    pub term: Option<String>,
    #[serde(rename = "d")]
    pub definition: Option<String>,
}

/// Read and parse the source file at `path`.
///
/// Fails if the file is absent, is not valid JSON, or its top-level value is
/// not an array. In [`ParseMode::Strict`] an entry missing `t` or `d` fails
/// the whole load; in [`ParseMode::Permissive`] such entries are kept and
/// later stored with NULL fields.
pub fn load_entries(path: &Path, mode: ParseMode) -> Result<Vec<Entry>> {
    if !path.exists() {
        return Err(DictError::Input(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| DictError::Parse(format!("Invalid JSON: {e}")))?;
    if !value.is_array() {
        return Err(DictError::Parse("top-level value is not an array".into()));
    }
    let entries: Vec<Entry> = serde_json::from_value(value)
        .map_err(|e| DictError::Parse(format!("Array element is not an entry object: {e}")))?;

    match mode {
        ParseMode::Strict => {
            for (index, entry) in entries.iter().enumerate() {
                if entry.term.is_none() {
                    return Err(DictError::MissingField { index, field: "t" });
                }
                if entry.definition.is_none() {
                    return Err(DictError::MissingField { index, field: "d" });
                }
            }
        }
        ParseMode::Permissive => {
            let incomplete = entries
                .iter()
                .filter(|e| e.term.is_none() || e.definition.is_none())
                .count();
            if incomplete > 0 {
                warn!(incomplete, "Entries with missing fields will be stored as NULL");
            }
        }
    }

    info!(entries = entries.len(), source = %path.display(), "Loaded entries from JSON");
    Ok(entries)
}
