use crate::error::BoxError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = concat!("teams-notifier/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP POST and reports what came back.
///
/// Any status the server answers with is a successful transport call; only
/// failures to complete the exchange are errors.
pub trait Transport {
    fn post(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<TransportResponse, BoxError>;
}

impl<F> Transport for F
where
    F: Fn(&Url, &str, Vec<u8>) -> Result<TransportResponse, BoxError>,
{
    fn post(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<TransportResponse, BoxError> {
        self(url, content_type, body)
    }
}

pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> reqwest::Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn post(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<TransportResponse, BoxError> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()?;

        let status = response.status().as_u16();
        // the body is diagnostic only, so a broken read is not a failure
        let body = response.text().unwrap_or_default();

        Ok(TransportResponse { status, body })
    }
}
