//! Status code policy
//!
//! Decides which status codes count as success and how failures are
//! explained. Injected into the validation engine at construction time.

use std::collections::{HashMap, HashSet};

use crate::core::constants::{http_status, messages};

/// Generic explanations that are not tied to a single status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyMessages {
    /// Attached to URLs that fail format validation
    pub format: String,
    /// Attached to URLs whose request failed without a status code
    pub validator: String,
    /// Attached to failing status codes with no entry in the explanation table
    pub unmapped_status: String,
}

impl Default for PolicyMessages {
    fn default() -> Self {
        Self {
            format: messages::FORMAT.to_string(),
            validator: messages::VALIDATOR.to_string(),
            unmapped_status: messages::UNMAPPED_STATUS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPolicy {
    pub success_codes: HashSet<u16>,
    pub error_messages: HashMap<u16, String>,
    pub messages: PolicyMessages,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self {
            success_codes: http_status::DEFAULT_SUCCESS_CODES.into_iter().collect(),
            error_messages: default_error_messages(),
            messages: PolicyMessages::default(),
        }
    }
}

impl StatusPolicy {
    pub fn is_success(&self, status_code: u16) -> bool {
        self.success_codes.contains(&status_code)
    }

    /// Explanation for a failing status code, falling back to the
    /// unmapped-status message when the table has no entry for it.
    pub fn explain(&self, status_code: u16) -> &str {
        self.error_messages
            .get(&status_code)
            .map_or(self.messages.unmapped_status.as_str(), String::as_str)
    }
}

fn default_error_messages() -> HashMap<u16, String> {
    use crate::core::constants::http_status::*;

    [
        (BAD_REQUEST, messages::BAD_URL),
        (UNAUTHORIZED, messages::AUTH),
        (FORBIDDEN, messages::AUTH),
        (NOT_FOUND, messages::BAD_URL),
        (IM_A_TEAPOT, messages::TEAPOT),
        (TOO_MANY_REQUESTS, messages::TOO_MANY_REQUESTS),
        (UNAVAILABLE_FOR_LEGAL_REASONS, messages::LEGAL),
        (INTERNAL_SERVER_ERROR, messages::SERVER_ERROR),
        (NOT_IMPLEMENTED, messages::SERVER_ERROR),
        (BAD_GATEWAY, messages::SERVER_ERROR),
        (SERVICE_UNAVAILABLE, messages::SERVER_ERROR),
        (GATEWAY_TIMEOUT, messages::SERVER_ERROR),
        (NETWORK_AUTHENTICATION_REQUIRED, messages::NETWORK_AUTH),
    ]
    .into_iter()
    .map(|(code, message)| (code, message.to_string()))
    .collect()
}
