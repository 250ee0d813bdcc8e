// This software is provided for non-commercial use only.
// Commercial use is strictly prohibited.
// If you use, modify, or redistribute this software, you must provide proper attribution to the original author.
// (c) 2026 Onur Tuna. All rights reserved.

//! Build orchestration — one linear pass from source JSON to an indexed,
//! compacted database file.
//!
//! The new database is written to `<output>.tmp` and renamed over the
//! output path only after the transaction commit, index build, and
//! compaction have all completed. A failure at any point leaves the
//! previous output file untouched.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::BuildConfig;
use crate::error::Result;
use crate::loader::{self, Entry};
use crate::storage::database::Database;

/// Summary of one completed build.
#[derive(Debug)]
pub struct BuildReport {
    pub entries_loaded: usize,
    pub rows_inserted: usize,
    pub replaced_old: bool,
    pub output: PathBuf,
}

/// Staging file the build writes into before the final rename.
fn staging_path(output: &Path) -> PathBuf {
    let mut p = output.as_os_str().to_owned();
    p.push(".tmp");
    PathBuf::from(p)
}

/// Run the full build:
/// load → stage → schema → insert-all → index → compact → atomic replace.
pub fn build(config: &BuildConfig) -> Result<BuildReport> {
    // Parse the source completely before touching the output path.
    let entries = loader::load_entries(&config.input, config.mode)?;

    let staging = staging_path(&config.output);
    if staging.exists() {
        // Leftover from an interrupted run.
        std::fs::remove_file(&staging)?;
        info!(path = %staging.display(), "Removed stale staging file");
    }

    let rows_inserted = build_into(&staging, &entries)?;

    // The old database, if any, is replaced only now that the new one is
    // fully written, indexed, and compacted.
    let replaced_old = config.output.exists();
    std::fs::rename(&staging, &config.output)?;
    if replaced_old {
        info!(path = %config.output.display(), "Old database replaced");
    }

    info!(
        rows = rows_inserted,
        output = %config.output.display(),
        "Database built successfully"
    );

    Ok(BuildReport {
        entries_loaded: entries.len(),
        rows_inserted,
        replaced_old,
        output: config.output.clone(),
    })
}

/// Write a complete database at `path` from `entries`.
fn build_into(path: &Path, entries: &[Entry]) -> Result<usize> {
    let mut db = Database::create(path)?;
    db.apply_schema()?;
    let rows = db.insert_entries(entries)?;
    db.create_word_index()?;
    db.compact()?;
    db.close()?;
    Ok(rows)
}
