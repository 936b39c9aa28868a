use crate::config::Config;
use crate::core::types::ValidationOutcome;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // Ignore the error when a logger is already installed (tests, embedding)
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config.timeout_duration().as_secs();
    let skip_ssl_verification = config.skip_ssl_verification.unwrap_or(false);
    let proxy = config.proxy.as_deref().unwrap_or("none");

    info!("Configuration: timeout={timeout}s, skip_ssl={skip_ssl_verification}, proxy={proxy}");
    if config.policy.is_some() {
        info!("Using a custom status policy");
    }
}

/// Log validation progress
pub fn log_validation_start(url_count: usize) {
    info!("Starting validation of {url_count} URLs");
}

/// Log validation completion
pub fn log_validation_complete(url_count: usize, issues: usize, duration_ms: u128) {
    if issues == 0 {
        info!("Validation complete: {url_count}/{url_count} URLs valid ({duration_ms}ms)");
    } else {
        warn!(
            "Validation complete: {}/{} URLs valid, {} issues found ({}ms)",
            url_count - issues,
            url_count,
            issues,
            duration_ms
        );
    }
}

/// Log individual URL validation results for debugging
pub fn log_url_result(url: &str, outcome: &ValidationOutcome) {
    match outcome {
        ValidationOutcome::Pass => debug!("✓ {url}"),
        ValidationOutcome::StatusFailure { status_code, .. } => {
            debug!("✗ {url} -> {status_code}")
        }
        ValidationOutcome::FormatFailure { .. } => debug!("✗ {url} -> invalid format"),
        ValidationOutcome::TransportFailure { .. } => debug!("✗ {url} -> transport failure"),
    }
}

/// Log the underlying transport error before it is reduced to a generic message
pub fn log_transport_error(url: &str, err: &dyn std::error::Error) {
    match err.source() {
        Some(source) => debug!("Request to {url} failed: {err} ({source})"),
        None => debug!("Request to {url} failed: {err}"),
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
