//! Dictionary database — thin wrapper over a rusqlite connection.
//!
//! Covers the write path of a build (fresh file, schema, transactional bulk
//! insert, index creation, compaction) plus the read-back queries used by
//! `dictdb status` and the integration tests.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OpenFlags};

use crate::error::Result;
use crate::loader::Entry;
use crate::storage::schema;

pub struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Create a fresh database file at `path`, removing any stale file there.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        let conn = Connection::open(path)?;
        // Bulk-load pragmas; the file is rebuilt from scratch on every run.
        conn.pragma_update(None, "journal_mode", "OFF")?;
        conn.pragma_update(None, "synchronous", "OFF")?;
        Ok(Self { conn, path: path.to_path_buf() })
    }

    /// Open an existing database file read-only.
    pub fn open_readonly(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self { conn, path: path.to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the `dictionary` table.
    pub fn apply_schema(&self) -> Result<()> {
        self.conn.execute_batch(schema::CREATE_DICTIONARY_TABLE)?;
        Ok(())
    }

    /// Insert all entries inside one transaction with a prepared statement.
    /// Returns the number of rows written.
    pub fn insert_entries(&mut self, entries: &[Entry]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(schema::INSERT_ENTRY)?;
            for entry in entries {
                stmt.execute(params![entry.term, entry.definition])?;
            }
        }
        tx.commit()?;
        Ok(entries.len())
    }

    /// Build the term index. Called after the bulk load.
    pub fn create_word_index(&self) -> Result<()> {
        self.conn.execute_batch(schema::CREATE_WORD_INDEX)?;
        Ok(())
    }

    /// Reclaim free pages and defragment the file.
    pub fn compact(&self) -> Result<()> {
        self.conn.execute_batch("VACUUM;")?;
        Ok(())
    }

    /// Number of rows in the `dictionary` table.
    pub fn row_count(&self) -> Result<u64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM dictionary", [], |row| row.get(0))?;
        Ok(n)
    }

    /// Whether the `idx_word` index exists.
    pub fn has_word_index(&self) -> Result<bool> {
        let n: u64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_word'",
            [],
            |row| row.get(0),
        )?;
        Ok(n > 0)
    }

    /// All rows in id order.
    pub fn rows(&self) -> Result<Vec<(i64, Option<String>, Option<String>)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, word, definition FROM dictionary ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Ids of rows whose word equals `word` — served by `idx_word`.
    pub fn lookup_word(&self, word: &str) -> Result<Vec<i64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM dictionary WHERE word = ?1 ORDER BY id")?;
        let ids = stmt
            .query_map(params![word], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(ids)
    }

    /// Close the underlying connection, surfacing any pending error.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
