use clap::Parser;
use linkvet::config::Config;
use linkvet::core::constants::output_formats;
use linkvet::logging;
use linkvet::ui::{Cli, cli_to_config, render};
use linkvet::validation::UrlValidator;

const USAGE_HINT: &str = "Try adding some URLs, like: linkvet http://www.example.com or linkvet --json '[\"http://www.example.com\"]'";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_linkvet_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main URL validation logic, returns the process exit code
async fn run_linkvet_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli)?;
    let mut config = load_config(cli)?;
    config.merge_with_cli(&cli_config);
    config.validate()?;

    logging::init_logger(config.verbose.unwrap_or(false), cli.quiet);
    logging::log_config_info(&config);

    let urls = cli.collect_urls()?;
    if urls.is_empty() {
        eprintln!("{USAGE_HINT}");
        return Ok(1);
    }

    let validator = UrlValidator::from_config(&config)?;
    let failures = validator.validate_batch(urls).await?;

    let format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT);
    println!("{}", render(&failures, format)?);

    Ok(if failures.is_empty() { 0 } else { 1 })
}

fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    if cli.no_config {
        return Ok(Config::default());
    }
    match cli.config {
        Some(ref path) => Ok(Config::load_from_file(path)?),
        None => Ok(Config::load_from_standard_locations()),
    }
}
