// Tue Feb 10 2026 - Alex

pub mod banner;

pub use banner::Banner;
