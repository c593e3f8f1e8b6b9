//! Weather advisory service
//!
//! This library maps weather readings plus activity, month and hour to a
//! structured advisory through static decision tables, and exposes it over
//! HTTP and the command line.

pub mod advisory;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod web;

// Re-export core types for public API
pub use advisory::{AdvisoryRecord, AdvisoryRequest, generate_advisory, summarize};
pub use config::AdvisoryConfig;
pub use error::AdvisoryError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AdvisoryError>;
