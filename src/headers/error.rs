// Mon Feb 09 2026 - Alex

use crate::sources::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("Source read failed: {0}")]
    Source(#[from] SourceError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
