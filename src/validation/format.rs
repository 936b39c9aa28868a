//! Static URL format validation
//!
//! Only practical, fully-qualified web URLs are accepted: links are meant to
//! be clicked from an email, so relative references and non-HTTP schemes are
//! rejected even where they are technically standards compliant.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::core::types::UrlInput;
use crate::logging;

/// Schemes accepted for links, matched ASCII case-insensitively
const WEB_SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Compiled character rules. ASCII-only patterns, no optional regex features needed.
#[derive(Debug)]
struct FormatRules {
    /// Characters allowed anywhere in a URI (RFC 3986 unreserved, reserved and `%`)
    uri_characters: Regex,
    /// A `%` that does not start a two digit hex escape
    broken_percent_escape: Regex,
}

impl FormatRules {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            uri_characters: Regex::new(r"^[A-Za-z0-9:/?#\[\]@!$&'()*+,;=._~%-]+$")?,
            broken_percent_escape: Regex::new(
                r"%(?:[^0-9A-Fa-f]|[0-9A-Fa-f](?:[^0-9A-Fa-f]|$)|$)",
            )?,
        })
    }
}

static FORMAT_RULES: Lazy<Option<FormatRules>> = Lazy::new(|| match FormatRules::compile() {
    Ok(rules) => Some(rules),
    Err(err) => {
        logging::log_error("URL format rules failed to compile", Some(&err));
        None
    }
});

fn has_web_scheme(url: &str) -> bool {
    WEB_SCHEME_PREFIXES.iter().any(|prefix| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Check whether `url` is a valid, fully-qualified HTTP or HTTPS URI.
///
/// Pure and allocation-light; safe to call for every URL of a batch before
/// any network traffic happens. Rejects everything if the character rules
/// could not be compiled.
pub fn is_valid_format(url: &str) -> bool {
    let Some(rules) = FORMAT_RULES.as_ref() else {
        return false;
    };

    if !has_web_scheme(url)
        || !rules.uri_characters.is_match(url)
        || rules.broken_percent_escape.is_match(url)
    {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Format check for caller input that may not be a string at all.
pub fn is_valid_input(input: &UrlInput) -> bool {
    input.as_str().is_some_and(is_valid_format)
}
