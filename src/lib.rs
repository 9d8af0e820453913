// Mon Feb 09 2026 - Alex

pub mod addons;
pub mod config;
pub mod headers;
pub mod pipeline;
pub mod sources;
pub mod ui;
pub mod utils;

pub use addons::{AddonSynchronizer, ModuleEndpoint};
pub use config::Config;
pub use headers::{DeclarationEnricher, EnrichmentOutcome, EnumExtractor};
pub use pipeline::{HeaderPipeline, PipelineReport};
pub use sources::SourceIndex;
