// Tue Feb 10 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}
