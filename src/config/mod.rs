//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments, and turns it into the [`StatusPolicy`]
//! the validation engine runs against.

pub mod policy;

pub use policy::{PolicyMessages, StatusPolicy};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{files, http_status, output_formats, timeouts};
use crate::core::error::{LinkVetError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Status codes treated as success, replaces the default set
    pub success_codes: Option<Vec<u16>>,

    /// Explanations per failing status code, merged over the defaults
    pub error_messages: Option<BTreeMap<String, String>>,

    /// Fixed messages, the `[policy.messages]` table
    pub messages: Option<PolicyMessagesConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyMessagesConfig {
    /// Message for URLs that fail format validation
    pub format: Option<String>,

    /// Message for requests that failed without a status code
    pub validator: Option<String>,

    /// Message for failing status codes without an explanation
    pub unmapped_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Timeout in seconds for HTTP requests
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// HTTP/HTTPS proxy URL
    pub proxy: Option<String>,

    /// Skip SSL certificate verification
    pub skip_ssl_verification: Option<bool>,

    /// Output format (json, text)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Status code policy overrides
    pub policy: Option<PolicyConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            user_agent: None,
            proxy: None,
            skip_ssl_verification: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            policy: None,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinkVetError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            LinkVetError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(files::CONFIG_FILE_NAME) {
            return config;
        }

        for i in 1..=files::CONFIG_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), files::CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }

        // Network & security
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref proxy) = cli_config.proxy {
            self.proxy = Some(proxy.clone());
        }
        if cli_config.skip_ssl_verification {
            self.skip_ssl_verification = Some(true);
        }

        // Output & format
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }

        // Policy
        if let Some(ref success_codes) = cli_config.success_codes {
            self.policy
                .get_or_insert_with(PolicyConfig::default)
                .success_codes = Some(success_codes.clone());
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Build the status policy, layering configured overrides over the defaults
    pub fn status_policy(&self) -> Result<StatusPolicy> {
        let mut policy = StatusPolicy::default();
        let Some(ref overrides) = self.policy else {
            return Ok(policy);
        };

        if let Some(ref codes) = overrides.success_codes {
            policy.success_codes = codes.iter().copied().collect();
        }
        if let Some(ref error_messages) = overrides.error_messages {
            for (code, message) in error_messages {
                policy
                    .error_messages
                    .insert(parse_status_code(code)?, message.clone());
            }
        }
        if let Some(ref messages) = overrides.messages {
            if let Some(ref message) = messages.format {
                policy.messages.format = message.clone();
            }
            if let Some(ref message) = messages.validator {
                policy.messages.validator = message.clone();
            }
            if let Some(ref message) = messages.unmapped_status {
                policy.messages.unmapped_status = message.clone();
            }
        }

        Ok(policy)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(LinkVetError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(LinkVetError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(LinkVetError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}",
                output_formats::ALL.join(", ")
            )));
        }

        if let Some(ref proxy) = self.proxy
            && url::Url::parse(proxy).is_err()
        {
            return Err(LinkVetError::Config(format!(
                "Invalid proxy URL '{proxy}'"
            )));
        }

        if let Some(ref policy) = self.policy {
            if let Some(ref codes) = policy.success_codes {
                for &code in codes {
                    check_status_code_range(code)?;
                }
            }
            if let Some(ref error_messages) = policy.error_messages {
                for code in error_messages.keys() {
                    parse_status_code(code)?;
                }
            }
        }

        Ok(())
    }
}

fn parse_status_code(code: &str) -> Result<u16> {
    let parsed = code.trim().parse::<u16>().map_err(|_| {
        LinkVetError::Config(format!(
            "'{code}' is not a valid HTTP status code. Expected a number between {}-{}.",
            http_status::MIN_VALID,
            http_status::MAX_VALID
        ))
    })?;
    check_status_code_range(parsed)?;
    Ok(parsed)
}

fn check_status_code_range(code: u16) -> Result<()> {
    if (http_status::MIN_VALID..=http_status::MAX_VALID).contains(&code) {
        Ok(())
    } else {
        Err(LinkVetError::Config(format!(
            "Status code {code} is not a valid HTTP status code. Expected a number between {}-{}.",
            http_status::MIN_VALID,
            http_status::MAX_VALID
        )))
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
    pub skip_ssl_verification: bool,
    pub output_format: Option<String>,
    pub verbose: bool,
    pub success_codes: Option<Vec<u16>>,
}
