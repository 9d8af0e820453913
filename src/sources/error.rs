// Mon Feb 09 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read source file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
