use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid catalog data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Data file not found: {}", .0.display())]
    DataFileNotFound(PathBuf),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
