use crate::error::{SendError, UrlError};
use regex::Regex;
use reqwest::Url;

const OUTLOOK_PREFIX: &str = "https://outlook.office.com/webhook/";
const OUTLOOK_365_PREFIX: &str = "https://outlook.office365.com/webhook/";
const TENANT_PATTERN: &str = r"^https://[a-z0-9-]+\.webhook\.office\.com/webhookb2/";

/// One entry of the webhook allow-list.
#[derive(Debug, Clone)]
pub enum HostMatcher {
    Prefix(String),
    Pattern(Regex),
}

impl HostMatcher {
    /// A prefix that parses as an absolute URL is stored in its serialized form
    /// (lowercase host, no default port), the same form request URLs are compared in.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();

        match Url::parse(&prefix) {
            Ok(url) => Self::Prefix(url.into()),
            Err(_) => Self::Prefix(prefix),
        }
    }

    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    pub fn matches(&self, url: &str) -> bool {
        match self {
            Self::Prefix(prefix) => url.starts_with(prefix.as_str()),
            Self::Pattern(regex) => regex.is_match(url),
        }
    }
}

/// Known Teams connector endpoints.
pub fn default_matchers() -> Vec<HostMatcher> {
    vec![
        HostMatcher::prefix(OUTLOOK_PREFIX),
        HostMatcher::prefix(OUTLOOK_365_PREFIX),
        HostMatcher::Pattern(Regex::new(TENANT_PATTERN).expect("tenant pattern is valid")),
    ]
}

/// Checks that `webhook_url` is a URL and that it points at an accepted webhook host.
///
/// A relative reference (the empty string included) is well-formed but has no host,
/// so it is reported as an unrecognized host rather than a malformed URL.
pub fn validate_webhook_url(
    webhook_url: &str,
    matchers: &[HostMatcher],
) -> Result<Url, SendError> {
    // Url::parse silently drops tabs and newlines
    if webhook_url.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlError::ControlCharacter.into());
    }

    let url = match Url::parse(webhook_url) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            return Err(SendError::UnrecognizedWebhookHost(webhook_url.to_string()));
        }
        Err(e) => return Err(UrlError::Parse(e).into()),
    };

    if !matchers.iter().any(|m| m.matches(url.as_str())) {
        return Err(SendError::UnrecognizedWebhookHost(url.to_string()));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind::{self, MalformedUrl, UnrecognizedWebhookHost};

    fn accepted(url: &str, matchers: &[HostMatcher]) -> bool {
        validate_webhook_url(url, matchers).is_ok()
    }

    fn kind_of(url: &str) -> Option<ErrorKind> {
        validate_webhook_url(url, &default_matchers())
            .err()
            .map(|e| e.kind())
    }

    #[test]
    fn control_characters_are_malformed() {
        assert_eq!(kind_of("ht\ttp://"), Some(MalformedUrl));
        assert_eq!(kind_of("https://outlook.office.com/\n"), Some(MalformedUrl));
    }

    #[test]
    fn unparseable_urls_are_malformed() {
        assert_eq!(kind_of("http://"), Some(MalformedUrl));
        assert_eq!(kind_of("https://[::1"), Some(MalformedUrl));
    }

    #[test]
    fn unknown_hosts_are_rejected() {
        for url in [
            "",
            "/webhook/xxx",
            "https://example.com/x",
            "http://outlook.office.com/webhook/xxx",
        ] {
            assert_eq!(kind_of(url), Some(UnrecognizedWebhookHost));
        }
    }

    #[test]
    fn teams_hosts_are_accepted() {
        for url in [
            "https://outlook.office.com/webhook/xxx",
            "https://outlook.office365.com/webhook/xxx",
            "https://contoso.webhook.office.com/webhookb2/abc@def/IncomingWebhook/1/2",
            // host is lowercased before matching
            "https://OUTLOOK.office.com/webhook/xxx",
        ] {
            assert_eq!(kind_of(url), None);
        }
    }

    #[test]
    fn validation_is_repeatable() {
        for url in [
            "",
            "ht\ttp://",
            "https://example.com/x",
            "https://outlook.office.com/webhook/xxx",
        ] {
            assert_eq!(kind_of(url), kind_of(url));
        }
    }

    #[test]
    fn custom_matchers_replace_defaults() {
        let matchers = vec![HostMatcher::prefix("http://127.0.0.1:8080/")];

        assert!(accepted("http://127.0.0.1:8080/hook", &matchers));
        assert!(!accepted("https://outlook.office.com/webhook/x", &matchers));
    }

    #[test]
    fn prefixes_are_normalized_like_urls() {
        let matchers = vec![
            HostMatcher::prefix("http://LocalHost:9000/"),
            HostMatcher::prefix("https://hooks.example.com:443/in/"),
        ];

        assert!(accepted("http://LocalHost:9000/hook", &matchers));
        assert!(accepted("http://localhost:9000/hook", &matchers));
        assert!(accepted("https://hooks.example.com/in/1", &matchers));
        assert!(!accepted("http://localhost:9001/hook", &matchers));
    }

    #[test]
    fn pattern_matcher() {
        let matcher = HostMatcher::pattern(r"^https://hooks\.test/").unwrap();

        assert!(matcher.matches("https://hooks.test/a"));
        assert!(!matcher.matches("https://hooks.testing/a"));
        assert!(HostMatcher::pattern("(").is_err());
    }
}
