// This software is provided for non-commercial use only.
// Commercial use is strictly prohibited.
// If you use, modify, or redistribute this software, you must provide proper attribution to the original author.
// (c) 2026 Onur Tuna. All rights reserved.

//! SQL definitions for the dictionary database.

/// Table holding one row per input record, in insertion order.
pub const CREATE_DICTIONARY_TABLE: &str = "
CREATE TABLE dictionary (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT,
    definition TEXT
);
";

/// Non-unique lookup index on the term column.
///
/// Created AFTER the bulk load: building the index once over loaded data is
/// cheaper than maintaining it during every insert.
pub const CREATE_WORD_INDEX: &str = "CREATE INDEX idx_word ON dictionary(word);";

pub const INSERT_ENTRY: &str = "INSERT INTO dictionary (word, definition) VALUES (?1, ?2)";
