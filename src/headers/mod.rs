// Mon Feb 09 2026 - Alex

pub mod enricher;
pub mod error;
pub mod extractor;
pub mod stub;

pub use enricher::{DeclarationEnricher, EnrichmentOutcome};
pub use error::HeaderError;
pub use extractor::EnumExtractor;
pub use stub::DeclarationStub;
