//! linkvet - validate batches of URLs before they are sent out
//!
//! Each URL is checked for format, then fetched once with GET, and every URL
//! that is malformed or does not answer with a success status is reported
//! together with an explanation.

pub mod config;
pub mod core;
pub mod logging;
pub mod ui;
pub mod validation;

// Re-export commonly used items for convenience
pub use crate::config::{Config, StatusPolicy};
pub use crate::core::{BatchResult, LinkVetError, Result, UrlInput, ValidationOutcome};
pub use crate::validation::{CheckResponse, CheckStatus, HttpChecker, UrlValidator};
