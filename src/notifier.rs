use crate::card::MessageCard;
use crate::error::SendError;
use crate::transport::{ReqwestTransport, Transport};
use crate::webhook::{default_matchers, validate_webhook_url, HostMatcher};
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, warn};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Posts message cards to Teams incoming webhooks.
///
/// Holds no state between calls, so one notifier can be shared across threads
/// whenever its transport can.
pub struct Notifier<T = ReqwestTransport> {
    transport: T,
    matchers: Vec<HostMatcher>,
}

impl Notifier<ReqwestTransport> {
    /// A notifier for the known Teams webhook hosts with the default timeout.
    pub fn new() -> reqwest::Result<Self> {
        Ok(Self::with_transport(ReqwestTransport::new()?))
    }

    pub fn builder() -> NotifierBuilder {
        NotifierBuilder::default()
    }
}

impl<T: Transport> Notifier<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            matchers: default_matchers(),
        }
    }

    pub fn with_matchers(transport: T, matchers: Vec<HostMatcher>) -> Self {
        Self { transport, matchers }
    }

    pub fn matchers(&self) -> &[HostMatcher] {
        &self.matchers
    }

    pub fn validate(&self, webhook_url: &str) -> Result<Url, SendError> {
        validate_webhook_url(webhook_url, &self.matchers)
    }

    pub fn send(&self, webhook_url: &str, card: &MessageCard) -> Result<(), SendError> {
        let url = self.validate(webhook_url)?;
        let body = card.to_json()?;

        debug!(
            host = url.host_str().unwrap_or_default(),
            bytes = body.len(),
            "Posting message card"
        );

        let response = self
            .transport
            .post(&url, JSON_CONTENT_TYPE, body.into_bytes())
            .map_err(SendError::Transport)?;

        if !response.is_success() {
            warn!(
                status = response.status,
                body = %response.body,
                "Webhook rejected message card"
            );
            return Err(SendError::UnexpectedStatus {
                status: response.status,
                body: response.body,
            });
        }

        debug!(status = response.status, "Message card delivered");

        Ok(())
    }
}

/// Configures a [`Notifier`] backed by [`ReqwestTransport`].
#[derive(Default)]
pub struct NotifierBuilder {
    timeout: Option<Duration>,
    matchers: Option<Vec<HostMatcher>>,
    extra_matchers: Vec<HostMatcher>,
}

impl NotifierBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the default Teams hosts.
    pub fn matchers(mut self, matchers: Vec<HostMatcher>) -> Self {
        self.matchers = Some(matchers);
        self
    }

    /// Accepts URLs starting with `prefix` in addition to the other matchers.
    pub fn allow_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.extra_matchers.push(HostMatcher::prefix(prefix));
        self
    }

    pub fn build(self) -> reqwest::Result<Notifier> {
        let transport = match self.timeout {
            Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
            None => ReqwestTransport::new()?,
        };

        let mut matchers = self.matchers.unwrap_or_else(default_matchers);
        matchers.extend(self.extra_matchers);

        Ok(Notifier::with_matchers(transport, matchers))
    }
}
