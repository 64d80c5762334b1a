pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod fs;
pub mod runner;

// Re-export key items for convenience
pub use config::SourcesConfig;
pub use crate::core::{CheckOutcome, DiscoveryResult, RunSummary};
pub use error::GenerateError;
pub use runner::{check, render, run};
