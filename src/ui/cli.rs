// Command-line interface definitions and parsing for linkvet

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use crate::core::error::{LinkVetError, Result};
use crate::core::types::UrlInput;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URLs to validate
    pub urls: Vec<String>,

    // Input
    /// JSON array of URLs, e.g. '["http://www.example.com"]'
    #[arg(long, value_name = "ARRAY", help_heading = "Input")]
    pub json: Option<String>,

    // Core Options
    /// Request timeout in seconds (default: 30)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// Status codes counted as success (comma-separated, default: 200-208,226)
    #[arg(long, value_name = "CODES", help_heading = "Core Options")]
    pub success_codes: Option<String>,

    // Output & Verbosity
    /// Suppress log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: json)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Network & Security
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    /// HTTP/HTTPS proxy URL
    #[arg(long, value_name = "URL", help_heading = "Network & Security")]
    pub proxy: Option<String>,

    /// Skip SSL certificate verification
    #[arg(long, help_heading = "Network & Security")]
    pub insecure: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

impl Cli {
    /// All URLs to validate: positional ones first, then the `--json` array.
    pub fn collect_urls(&self) -> Result<Vec<UrlInput>> {
        let mut urls: Vec<UrlInput> = self.urls.iter().cloned().map(UrlInput::from).collect();

        if let Some(ref json) = self.json {
            let parsed: Vec<UrlInput> = serde_json::from_str(json).map_err(|e| {
                LinkVetError::InvalidArgument(format!(
                    "--json expects a JSON array of URLs: {e}"
                ))
            })?;
            urls.extend(parsed);
        }

        Ok(urls)
    }
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> Result<CliConfig> {
    let success_codes = match cli.success_codes {
        Some(ref codes) => Some(parse_status_codes(codes)?),
        None => None,
    };

    Ok(CliConfig {
        timeout: cli.timeout,
        user_agent: cli.user_agent.clone(),
        proxy: cli.proxy.clone(),
        skip_ssl_verification: cli.insecure,
        output_format: cli.format.clone(),
        verbose: cli.verbose,
        success_codes,
    })
}

fn parse_status_codes(codes: &str) -> Result<Vec<u16>> {
    codes
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| {
            code.parse::<u16>().map_err(|_| {
                LinkVetError::InvalidArgument(format!(
                    "Status code '{code}' is not a valid number"
                ))
            })
        })
        .collect()
}
