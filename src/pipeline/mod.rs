// Tue Feb 10 2026 - Alex

pub mod error;
pub mod headers;

pub use error::PipelineError;
pub use headers::{HeaderPipeline, PipelineReport};
