use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source file '{}' not found", .0.display())]
    Input(std::path::PathBuf),

    #[error("Malformed source data: {0}")]
    Parse(String),

    #[error("Entry {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No database at '{}' — run `dictdb build` first", .0.display())]
    NoDatabase(std::path::PathBuf),
}

pub type Result<T> = std::result::Result<T, DictError>;
