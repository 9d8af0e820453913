// Tue Feb 10 2026 - Alex

pub mod endpoint;
pub mod error;
pub mod shim;
pub mod synchronizer;

pub use endpoint::ModuleEndpoint;
pub use error::SyncError;
pub use synchronizer::AddonSynchronizer;
