use futures::{StreamExt, stream};
use std::time::Instant;

use crate::config::{Config, StatusPolicy};
use crate::core::error::Result;
use crate::core::types::{BatchResult, UrlInput, ValidationOutcome};
use crate::logging;
use crate::validation::checker::{CheckResponse, CheckStatus, HttpChecker};
use crate::validation::format::is_valid_input;

/// Validates URLs by format and by live status code.
///
/// The checker and the status policy are both injected, so the engine holds
/// no global state and every call is independent of the previous one.
#[derive(Debug)]
pub struct UrlValidator<C = HttpChecker> {
    checker: C,
    policy: StatusPolicy,
}

impl UrlValidator<HttpChecker> {
    /// Build a validator with an HTTP checker and the policy described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpChecker::new(config)?, config.status_policy()?))
    }
}

impl<C: CheckStatus> UrlValidator<C> {
    pub fn new(checker: C, policy: StatusPolicy) -> Self {
        Self { checker, policy }
    }

    pub fn policy(&self) -> &StatusPolicy {
        &self.policy
    }

    /// Validate a single URL.
    ///
    /// Malformed input fails fast without a request. Otherwise the URL is
    /// checked once and the response is classified against the policy.
    /// Only a failure of the checker itself is returned as `Err`.
    pub async fn validate_one(&self, url: &UrlInput) -> Result<ValidationOutcome> {
        let Some(candidate) = url.as_str().filter(|_| is_valid_input(url)) else {
            let outcome = ValidationOutcome::FormatFailure {
                url: url.clone(),
                error: self.policy.messages.format.clone(),
            };
            logging::log_url_result(&url.to_string(), &outcome);
            return Ok(outcome);
        };

        let outcome = match self.checker.check_status(candidate).await? {
            CheckResponse::Transport(_) => ValidationOutcome::TransportFailure {
                url: url.clone(),
                error: self.policy.messages.validator.clone(),
            },
            CheckResponse::StatusCode(code) if self.policy.is_success(code) => {
                ValidationOutcome::Pass
            }
            CheckResponse::StatusCode(code) => ValidationOutcome::StatusFailure {
                url: url.clone(),
                status_code: code,
                error: self.policy.explain(code).to_string(),
            },
        };

        logging::log_url_result(candidate, &outcome);
        Ok(outcome)
    }

    /// Validate every URL of a batch concurrently and return the failures.
    ///
    /// One check is in flight per URL. The result is in completion order, so
    /// it should be treated as a set. The first internal error drops all
    /// checks still in flight and is returned instead of partial results.
    pub async fn validate_batch<I>(&self, urls: I) -> Result<BatchResult>
    where
        I: IntoIterator,
        I::Item: Into<UrlInput>,
    {
        let urls: Vec<UrlInput> = urls.into_iter().map(Into::into).collect();
        let url_count = urls.len();
        if url_count == 0 {
            return Ok(BatchResult::new());
        }

        logging::log_validation_start(url_count);
        let started = Instant::now();

        let mut outcomes = stream::iter(urls)
            .map(|url| async move { self.validate_one(&url).await })
            .buffer_unordered(url_count);

        let mut failures = BatchResult::new();
        while let Some(outcome) = outcomes.next().await {
            match outcome {
                Ok(outcome) if outcome.is_failure() => failures.push(outcome),
                Ok(_) => {}
                Err(err) => {
                    logging::log_error("URL validation aborted", Some(&err));
                    return Err(err);
                }
            }
        }

        logging::log_validation_complete(url_count, failures.len(), started.elapsed().as_millis());
        Ok(failures)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::constants::messages;
    use crate::core::error::LinkVetError;
    use async_trait::async_trait;
    use mockito::Server;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Debug, Clone)]
    enum Canned {
        Status(u16),
        Transport(&'static str),
        Internal(&'static str),
    }

    /// Checker answering from a fixed table and recording every call
    #[derive(Debug, Default)]
    struct MockChecker {
        responses: HashMap<String, Canned>,
        delay: Option<Duration>,
        calls: Mutex<Vec<String>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl MockChecker {
        fn with(responses: &[(&str, Canned)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(url, canned)| (url.to_string(), canned.clone()))
                    .collect(),
                ..Default::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CheckStatus for MockChecker {
        async fn check_status(&self, url: &str) -> Result<CheckResponse> {
            self.calls.lock().unwrap().push(url.to_string());

            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(current, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            match self.responses.get(url) {
                Some(Canned::Status(code)) => Ok(CheckResponse::StatusCode(*code)),
                Some(Canned::Transport(description)) => {
                    Ok(CheckResponse::Transport(description.to_string()))
                }
                Some(Canned::Internal(msg)) => Err(LinkVetError::Internal(msg.to_string())),
                None => Err(LinkVetError::Internal(format!("unexpected url {url}"))),
            }
        }
    }

    fn validator(responses: &[(&str, Canned)]) -> UrlValidator<MockChecker> {
        UrlValidator::new(MockChecker::with(responses), StatusPolicy::default())
    }

    #[tokio::test]
    async fn test_validate_one__fails_fast_on_format_error() {
        let validator = validator(&[("abc", Canned::Status(200))]);

        let actual = validator.validate_one(&UrlInput::from("abc")).await.unwrap();

        assert_eq!(validator.checker.call_count(), 0);
        assert_eq!(
            actual,
            ValidationOutcome::FormatFailure {
                url: UrlInput::from("abc"),
                error: messages::FORMAT.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_validate_one__non_string_input_is_format_failure() {
        let validator = validator(&[]);

        for value in [json!(42), serde_json::Value::Null, json!({"url": "http://a.b"})] {
            let input = UrlInput::Other(value);
            let actual = validator.validate_one(&input).await.unwrap();
            assert_eq!(
                actual,
                ValidationOutcome::FormatFailure {
                    url: input,
                    error: messages::FORMAT.to_string(),
                }
            );
        }
        assert_eq!(validator.checker.call_count(), 0);
    }

    #[tokio::test]
    async fn test_validate_one__format_gate_agrees_with_is_valid_input() {
        let inputs = [
            UrlInput::from("HTTPS://UPPER.EXAMPLE"),
            UrlInput::from("http://good.example"),
            UrlInput::from("https://bad.example/%zz"),
            UrlInput::from("ftp://other.example"),
            UrlInput::Other(json!(["http://good.example"])),
        ];
        let validator = validator(&[
            ("HTTPS://UPPER.EXAMPLE", Canned::Status(200)),
            ("http://good.example", Canned::Status(200)),
        ]);

        for input in &inputs {
            let actual = validator.validate_one(input).await.unwrap();
            let format_failed = matches!(actual, ValidationOutcome::FormatFailure { .. });
            assert_eq!(format_failed, !is_valid_input(input), "{input}");
        }
        assert_eq!(validator.checker.call_count(), 2);
    }

    #[tokio::test]
    async fn test_validate_one__passes_on_success_code() {
        let url = "http://good.example";
        let validator = validator(&[(url, Canned::Status(200))]);

        let actual = validator.validate_one(&UrlInput::from(url)).await.unwrap();

        assert_eq!(actual, ValidationOutcome::Pass);
        assert_eq!(validator.checker.call_count(), 1);
    }

    #[tokio::test]
    async fn test_validate_one__passes_on_every_default_success_code() {
        for code in [200, 201, 202, 203, 204, 205, 206, 207, 208, 226] {
            let url = "https://good.example";
            let validator = validator(&[(url, Canned::Status(code))]);

            let actual = validator.validate_one(&UrlInput::from(url)).await.unwrap();
            assert_eq!(actual, ValidationOutcome::Pass, "{code} should pass");
        }
    }

    #[tokio::test]
    async fn test_validate_one__explains_404() {
        let url = "http://good.example/missing";
        let validator = validator(&[(url, Canned::Status(404))]);

        let actual = validator.validate_one(&UrlInput::from(url)).await.unwrap();

        assert_eq!(
            actual,
            ValidationOutcome::StatusFailure {
                url: UrlInput::from(url),
                status_code: 404,
                error: messages::BAD_URL.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_validate_one__explains_503() {
        let url = "http://down.example";
        let validator = validator(&[(url, Canned::Status(503))]);

        let actual = validator.validate_one(&UrlInput::from(url)).await.unwrap();

        assert_eq!(actual.status_code(), Some(503));
        assert_eq!(actual.error(), Some(messages::SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_validate_one__unmapped_code_gets_fallback_message() {
        let url = "http://moved.example";
        let validator = validator(&[(url, Canned::Status(302))]);

        let actual = validator.validate_one(&UrlInput::from(url)).await.unwrap();

        assert_eq!(actual.status_code(), Some(302));
        assert_eq!(actual.error(), Some(messages::UNMAPPED_STATUS));
    }

    #[tokio::test]
    async fn test_validate_one__transport_failure_gets_validator_message() {
        let url = "http://unreachable.example";
        let validator = validator(&[(url, Canned::Transport("dns error"))]);

        let actual = validator.validate_one(&UrlInput::from(url)).await.unwrap();

        assert_eq!(
            actual,
            ValidationOutcome::TransportFailure {
                url: UrlInput::from(url),
                error: messages::VALIDATOR.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_validate_one__internal_error_is_propagated() {
        let url = "http://broken.example";
        let validator = validator(&[(url, Canned::Internal("Impossible"))]);

        let actual = validator.validate_one(&UrlInput::from(url)).await;

        assert!(matches!(actual, Err(LinkVetError::Internal(msg)) if msg == "Impossible"));
    }

    #[tokio::test]
    async fn test_validate_one__is_idempotent() {
        let url = "http://good.example/missing";
        let validator = validator(&[(url, Canned::Status(404))]);
        let input = UrlInput::from(url);

        let first = validator.validate_one(&input).await.unwrap();
        for _ in 0..5 {
            assert_eq!(validator.validate_one(&input).await.unwrap(), first);
        }
        assert_eq!(validator.checker.call_count(), 6);
    }

    #[tokio::test]
    async fn test_validate_one__uses_injected_policy() {
        let url = "http://teapot.example";
        let mut policy = StatusPolicy::default();
        policy.success_codes.insert(418);
        policy.messages.format = "custom format message".to_string();
        let validator = UrlValidator::new(MockChecker::with(&[(url, Canned::Status(418))]), policy);

        assert_eq!(
            validator.validate_one(&UrlInput::from(url)).await.unwrap(),
            ValidationOutcome::Pass
        );
        assert_eq!(
            validator
                .validate_one(&UrlInput::from("nope"))
                .await
                .unwrap()
                .error(),
            Some("custom format message")
        );
    }

    #[tokio::test]
    async fn test_validate_batch__returns_only_failures() {
        let urls = [
            "http://good.example",
            "https://good.example",
            "not a url",
            "http://good.example/missing",
        ];
        let validator = validator(&[
            (urls[0], Canned::Status(200)),
            (urls[1], Canned::Status(200)),
            (urls[3], Canned::Status(404)),
        ]);

        let actual = validator.validate_batch(urls).await.unwrap();

        let format_failure = ValidationOutcome::FormatFailure {
            url: UrlInput::from("not a url"),
            error: messages::FORMAT.to_string(),
        };
        let not_found = ValidationOutcome::StatusFailure {
            url: UrlInput::from("http://good.example/missing"),
            status_code: 404,
            error: messages::BAD_URL.to_string(),
        };

        assert_eq!(actual.len(), 2);
        assert!(actual.contains(&format_failure));
        assert!(actual.contains(&not_found));
        assert!(!actual.contains(&ValidationOutcome::Pass));

        let mut checked = validator.checker.calls.lock().unwrap().clone();
        checked.sort();
        assert_eq!(
            checked,
            vec![
                "http://good.example",
                "http://good.example/missing",
                "https://good.example",
            ]
        );
    }

    #[tokio::test]
    async fn test_validate_batch__empty_input() {
        let validator = validator(&[]);

        let actual = validator.validate_batch(Vec::<String>::new()).await.unwrap();

        assert!(actual.is_empty());
        assert_eq!(validator.checker.call_count(), 0);
    }

    #[tokio::test]
    async fn test_validate_batch__internal_error_fails_whole_batch() {
        let validator = validator(&[
            ("http://good.example", Canned::Status(200)),
            ("http://missing.example", Canned::Status(404)),
            ("http://broken.example", Canned::Internal("Impossible")),
        ]);

        let actual = validator
            .validate_batch([
                "http://good.example",
                "http://missing.example",
                "bla",
                "http://broken.example",
            ])
            .await;

        assert!(matches!(actual, Err(LinkVetError::Internal(msg)) if msg == "Impossible"));
    }

    #[tokio::test]
    async fn test_validate_batch__transport_failure_does_not_abort_siblings() {
        let validator = validator(&[
            ("http://down.example", Canned::Transport("connection refused")),
            ("http://missing.example", Canned::Status(404)),
            ("http://good.example", Canned::Status(200)),
        ]);

        let actual = validator
            .validate_batch([
                "http://down.example",
                "http://missing.example",
                "http://good.example",
            ])
            .await
            .unwrap();

        assert_eq!(actual.len(), 2);
        assert!(actual.contains(&ValidationOutcome::TransportFailure {
            url: UrlInput::from("http://down.example"),
            error: messages::VALIDATOR.to_string(),
        }));
        assert!(actual.iter().any(|outcome| outcome.status_code() == Some(404)));
    }

    #[tokio::test]
    async fn test_validate_batch__checks_all_urls_concurrently() {
        let urls: Vec<String> = (0..8).map(|i| format!("http://host{i}.example")).collect();
        let responses: Vec<(&str, Canned)> = urls
            .iter()
            .map(|url| (url.as_str(), Canned::Status(200)))
            .collect();
        let mut checker = MockChecker::with(&responses);
        checker.delay = Some(Duration::from_millis(50));
        let validator = UrlValidator::new(checker, StatusPolicy::default());

        let actual = validator.validate_batch(urls.clone()).await.unwrap();

        assert!(actual.is_empty());
        assert_eq!(validator.checker.call_count(), urls.len());
        assert_eq!(
            validator.checker.max_in_flight.load(Ordering::SeqCst),
            urls.len()
        );
    }

    #[tokio::test]
    async fn test_validate_batch__accepts_json_values() {
        let validator = validator(&[("https://good.example", Canned::Status(200))]);
        let inputs: Vec<UrlInput> =
            serde_json::from_value(json!(["https://good.example", 42])).unwrap();

        let actual = validator.validate_batch(inputs).await.unwrap();

        assert_eq!(
            actual,
            vec![ValidationOutcome::FormatFailure {
                url: UrlInput::Other(json!(42)),
                error: messages::FORMAT.to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_validate_batch__against_http_server() {
        let config = Config {
            timeout: Some(5), // 5 seconds for CI stability
            ..Default::default()
        };
        let validator = UrlValidator::from_config(&config).unwrap();
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create_async().await;
        let _m404 = server.mock("GET", "/404").with_status(404).create_async().await;
        let _m502 = server.mock("GET", "/502").with_status(502).create_async().await;
        let endpoint_200 = server.url() + "/200";
        let endpoint_404 = server.url() + "/404";
        let endpoint_502 = server.url() + "/502";

        let actual = validator
            .validate_batch(vec![
                endpoint_200.clone(),
                endpoint_404.clone(),
                endpoint_502.clone(),
                "bla".to_string(),
            ])
            .await
            .unwrap();

        assert_eq!(actual.len(), 3);
        assert!(actual.contains(&ValidationOutcome::StatusFailure {
            url: UrlInput::from(endpoint_404),
            status_code: 404,
            error: messages::BAD_URL.to_string(),
        }));
        assert!(actual.contains(&ValidationOutcome::StatusFailure {
            url: UrlInput::from(endpoint_502),
            status_code: 502,
            error: messages::SERVER_ERROR.to_string(),
        }));
        assert!(
            actual
                .iter()
                .all(|outcome| outcome.url() != Some(&UrlInput::from(endpoint_200.as_str())))
        );
    }
}
