use serde::Deserialize;
use std::path::{Path, PathBuf};
use crate::error::{DictError, Result};

/// How entries with missing fields are treated during parsing.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Keep the entry; missing fields become SQL NULL in the output row.
    #[default]
    Permissive,
    /// Reject the whole input if any entry is missing a required field.
    Strict,
}

/// Build configuration loaded from a TOML file, with CLI overrides on top.
#[derive(Debug, Deserialize, Clone)]
pub struct BuildConfig {
    /// Path to the source JSON file.
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Path of the database file to (re)build.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Missing-field handling.
    #[serde(default)]
    pub mode: ParseMode,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { input: default_input(), output: default_output(), mode: ParseMode::default() }
    }
}

fn default_input() -> PathBuf { PathBuf::from("data.json") }
fn default_output() -> PathBuf { PathBuf::from("data.db") }

impl BuildConfig {
    /// Load configuration from a TOML file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DictError::Config(format!("Cannot read config file: {e}")))?;
        let config: BuildConfig = toml::from_str(&content)
            .map_err(|e| DictError::Config(format!("Invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise start from the fixed defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Apply CLI flag overrides on top of the file/default values.
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        strict: bool,
    ) -> Result<Self> {
        if let Some(i) = input {
            self.input = i;
        }
        if let Some(o) = output {
            self.output = o;
        }
        if strict {
            self.mode = ParseMode::Strict;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(DictError::Config("input path must not be empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(DictError::Config("output path must not be empty".into()));
        }
        if self.input == self.output {
            return Err(DictError::Config("input and output must be different files".into()));
        }
        Ok(())
    }
}
