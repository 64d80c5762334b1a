//! Core module for gen-sources
//!
//! This module contains the shared types and the source scanner.

pub mod scanner;
mod types;

pub use scanner::{discover_sources, normalize, to_manifest_string};
pub use types::*;
