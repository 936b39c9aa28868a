//! URL validation logic
//!
//! Static format checks, live reachability checks over HTTP, and the
//! engine that combines both over a batch of URLs.

pub mod checker;
pub mod engine;
pub mod format;

// Re-export commonly used items
pub use checker::{CheckResponse, CheckStatus, HttpChecker};
pub use engine::UrlValidator;
pub use format::{is_valid_format, is_valid_input};
