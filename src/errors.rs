use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tailwind-remap crate
#[derive(Debug, Error)]
pub enum RemapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("File does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Failed to parse CSS: {message}")]
    CssParse { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to write output to {path}: {message}")]
    Output { path: String, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RemapError>;
