use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a webhook URL could not be parsed.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("invalid control character in URL")]
    ControlCharacter,

    #[error(transparent)]
    Parse(#[from] url::ParseError),
}

/// Errors returned by [`crate::Notifier::send`].
///
/// Only the variant is meaningful to callers; the rendered messages may change.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("malformed webhook URL: {0}")]
    MalformedUrl(#[from] UrlError),

    #[error("webhook URL `{0}` does not match any accepted webhook host")]
    UnrecognizedWebhookHost(String),

    #[error("webhook request failed: {0}")]
    Transport(#[source] BoxError),

    #[error("webhook responded with status {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// Cannot happen for cards built through the public API.
    #[error("unable to serialize message card: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedUrl,
    UnrecognizedWebhookHost,
    Transport,
    UnexpectedStatus,
    Serialization,
}

impl SendError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedUrl(_) => ErrorKind::MalformedUrl,
            Self::UnrecognizedWebhookHost(_) => ErrorKind::UnrecognizedWebhookHost,
            Self::Transport(_) => ErrorKind::Transport,
            Self::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// The HTTP status the webhook answered with, if it answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
