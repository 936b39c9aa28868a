//! Application-wide constants to avoid magic values throughout the codebase.
//!
//! The default status policy lives here so that the engine itself never
//! hard-codes which codes count as success or what a failure means.

/// Output format constants
pub mod output_formats {
    /// JSON output format - the list of failure records, as returned to callers
    pub const JSON: &str = "json";
    /// Text output format - one line per failed URL
    pub const TEXT: &str = "text";

    /// Default output format
    pub const DEFAULT: &str = JSON;

    /// All valid output formats
    pub const ALL: [&str; 2] = [JSON, TEXT];
}

/// HTTP status code constants
pub mod http_status {
    pub const OK: u16 = 200;
    pub const IM_USED: u16 = 226;
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const IM_A_TEAPOT: u16 = 418;
    pub const TOO_MANY_REQUESTS: u16 = 429;
    pub const UNAVAILABLE_FOR_LEGAL_REASONS: u16 = 451;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    pub const NOT_IMPLEMENTED: u16 = 501;
    pub const BAD_GATEWAY: u16 = 502;
    pub const SERVICE_UNAVAILABLE: u16 = 503;
    pub const GATEWAY_TIMEOUT: u16 = 504;
    pub const NETWORK_AUTHENTICATION_REQUIRED: u16 = 511;

    /// Lowest and highest codes accepted in a configured policy
    pub const MIN_VALID: u16 = 100;
    pub const MAX_VALID: u16 = 599;

    /// Status codes treated as success unless configured otherwise (200-208, 226)
    pub const DEFAULT_SUCCESS_CODES: [u16; 10] = [200, 201, 202, 203, 204, 205, 206, 207, 208, 226];
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    /// Maximum accepted timeout in seconds (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86400;
}

/// Human readable explanations attached to failure records
pub mod messages {
    pub const SERVER_ERROR: &str = "Link not working due to their server error. Try again later, and/or contact the owner of the page";
    pub const AUTH: &str =
        "Not allowed to access this page. Perhaps a username/password is required.";
    pub const BAD_URL: &str =
        "The link seems to be to something that doesn't exist. Double-check the link.";
    pub const FORMAT: &str = "This does not appear to be a valid URL. Double-check the link";
    pub const VALIDATOR: &str = "Unable to check this link right now. Try again later, and/or double-check the link.";
    pub const UNMAPPED_STATUS: &str =
        "The link returned an unexpected status code. Double-check the link.";
    pub const TEAPOT: &str = "You tried to link to a teapot";
    pub const TOO_MANY_REQUESTS: &str =
        "Too many requests to this site. Try waiting, or contacting the site owner.";
    pub const LEGAL: &str = "https://en.wikipedia.org/wiki/Gag_order";
    pub const NETWORK_AUTH: &str = "You probably need to make sure you're signed in to the wifi";
}

/// Configuration file locations
pub mod files {
    /// Name of the config file searched for in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".linkvet.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}
