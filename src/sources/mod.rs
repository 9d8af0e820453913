// Mon Feb 09 2026 - Alex

pub mod error;
pub mod index;

pub use error::SourceError;
pub use index::SourceIndex;
