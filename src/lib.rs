//! Client for Microsoft Teams incoming webhooks.
//!
//! Build a [`MessageCard`], then hand it to [`Notifier::send`] together with the
//! channel's webhook URL:
//!
//! ```no_run
//! use teams_notifier::{MessageCard, Notifier, Section, ThemeColor};
//!
//! let notifier = Notifier::new()?;
//! let card = MessageCard::new()
//!     .title("Nightly build")
//!     .text("All 214 tests passed")
//!     .theme(ThemeColor::Success)
//!     .section(Section::new().fact("Branch", "main"));
//!
//! notifier.send("https://outlook.office.com/webhook/xxx", &card)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! A send makes at most one HTTP request and never retries; the caller decides
//! what to do with a [`SendError`].

pub mod card;
pub mod error;
pub mod notifier;
pub mod transport;
pub mod webhook;

pub use card::{Fact, MessageCard, PotentialAction, Section, Target, ThemeColor};
pub use error::{BoxError, ErrorKind, SendError, UrlError};
pub use notifier::{Notifier, NotifierBuilder};
pub use transport::{ReqwestTransport, Transport, TransportResponse, DEFAULT_TIMEOUT};
pub use webhook::{default_matchers, validate_webhook_url, HostMatcher};
