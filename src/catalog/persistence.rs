use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::entries::DataSource;
use crate::error::{BookshelfError, Result};

const SAMPLE_CATALOG: &str = include_str!("../../data/books.json");

/// Reads a data file of the form `{ "books": [...] }`.
pub fn load_data_source(path: &Path) -> Result<DataSource> {
    if !path.exists() {
        return Err(BookshelfError::DataFileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let source = parse_data_source(&content)?;
    info!(path = %path.display(), books = source.books.len(), "loaded catalog");
    Ok(source)
}

pub fn parse_data_source(content: &str) -> Result<DataSource> {
    Ok(serde_json::from_str(content)?)
}

/// The catalog bundled with the binary, used when no data file is given.
pub fn sample_data_source() -> Result<DataSource> {
    debug!("using bundled sample catalog");
    parse_data_source(SAMPLE_CATALOG)
}
