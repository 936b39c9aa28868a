//! Reachability checks
//!
//! One GET per URL. Whatever the HTTP stack reports is resolved here, once,
//! into a [`CheckResponse`]: either a status code or an opaque transport
//! failure. Callers never inspect client errors themselves.

use async_trait::async_trait;

use crate::config::Config;
use crate::core::error::Result;
use crate::logging;

/// Outcome of a single reachability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResponse {
    /// The server answered (or the client surfaced a status with its error)
    StatusCode(u16),
    /// The request failed without any status code to interpret
    Transport(String),
}

#[async_trait]
pub trait CheckStatus: Send + Sync {
    /// Issue one GET to `url`.
    ///
    /// `Err` is reserved for failures of the checking machinery itself; an
    /// unreachable host is an `Ok(CheckResponse::Transport(..))`.
    async fn check_status(&self, url: &str) -> Result<CheckResponse>;
}

/// Reachability checker backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpChecker {
    client: reqwest::Client,
}

impl HttpChecker {
    /// Build a checker whose client honours the configured timeout, user
    /// agent, proxy and TLS settings.
    pub fn new(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let mut client_builder = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .user_agent(user_agent);

        if config.skip_ssl_verification.unwrap_or(false) {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = config.proxy {
            client_builder = client_builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
        }

        Ok(Self::with_client(client_builder.build()?))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Map a transport-level error to a status code when the client attached
    /// one, otherwise to an opaque transport failure.
    pub fn resolve_error(err: &reqwest::Error) -> CheckResponse {
        match err.status() {
            Some(status) => CheckResponse::StatusCode(status.as_u16()),
            None => {
                let description = std::error::Error::source(err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                CheckResponse::Transport(description)
            }
        }
    }
}

#[async_trait]
impl CheckStatus for HttpChecker {
    async fn check_status(&self, url: &str) -> Result<CheckResponse> {
        match self.client.get(url).send().await {
            Ok(response) => Ok(CheckResponse::StatusCode(response.status().as_u16())),
            Err(err) => {
                logging::log_transport_error(url, &err);
                Ok(Self::resolve_error(&err))
            }
        }
    }
}
