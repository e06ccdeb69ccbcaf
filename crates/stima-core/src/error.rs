use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StimaError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Cannot write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Failed to parse table config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid pattern '{pattern}' in category '{key}': {source}")]
    InvalidPattern {
        key: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown color '{color}' in category '{key}'")]
    InvalidColor { key: String, color: String },

    #[error("Category '{key}' has {patterns} patterns but {help} help entries")]
    HelpMismatch {
        key: String,
        patterns: usize,
        help: usize,
    },
}

pub type Result<T> = std::result::Result<T, StimaError>;

impl StimaError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } | Self::Stdin(_) | Self::Output(_) => 1,
            Self::ConfigParse { .. }
            | Self::InvalidPattern { .. }
            | Self::InvalidColor { .. }
            | Self::HelpMismatch { .. } => 1,
        }
    }
}
