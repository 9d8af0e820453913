// Tue Feb 10 2026 - Alex

use crate::addons::SyncError;
use crate::headers::HeaderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Can't build headers: no third-party scripting headers found (you need to build a core first)")]
    MissingThirdPartyHeaders,
    #[error("Declaration enrichment failed: {0}")]
    Header(#[from] HeaderError),
    #[error("Endpoint sync failed: {0}")]
    Sync(#[from] SyncError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
