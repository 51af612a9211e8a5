//! Legacy Office 365 connector card ("MessageCard") payloads.
//!
//! Cards are assembled with consuming builder methods and only validated by the
//! receiving service. The one thing enforced locally is that a non-empty
//! `summary` goes out on the wire whenever the card has any text at all.

use serde::{Deserialize, Serialize};

const CARD_TYPE: &str = "MessageCard";
const CARD_CONTEXT: &str = "https://schema.org/extensions";
const OPEN_URI_TYPE: &str = "OpenUri";
const DEFAULT_OS: &str = "default";

/// Named theme colours for the card's accent strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Info,
    Success,
    Warning,
    Critical,
}

impl ThemeColor {
    pub const fn as_hex(&self) -> &'static str {
        match self {
            Self::Info => "3498DB",
            Self::Success => "2ECC71",
            Self::Warning => "F39C12",
            Self::Critical => "E74C3C",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCard {
    #[serde(rename = "@type")]
    card_type: String,
    #[serde(rename = "@context")]
    context: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(rename = "themeColor")]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub theme_color: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    #[serde(rename = "potentialAction")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub potential_actions: Vec<PotentialAction>,
}

impl Default for MessageCard {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCard {
    pub fn new() -> Self {
        Self {
            card_type: CARD_TYPE.to_string(),
            context: CARD_CONTEXT.to_string(),
            summary: String::new(),
            title: String::new(),
            text: String::new(),
            theme_color: String::new(),
            sections: vec![],
            potential_actions: vec![],
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Accepts `"E74C3C"` or `"#E74C3C"`.
    pub fn theme_color(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.theme_color = color.trim_start_matches('#').to_string();
        self
    }

    pub fn theme(self, color: ThemeColor) -> Self {
        self.theme_color(color.as_hex())
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn action(mut self, action: PotentialAction) -> Self {
        self.potential_actions.push(action);
        self
    }

    /// The summary that is actually sent: `summary`, else `text`, else `title`.
    pub fn effective_summary(&self) -> &str {
        [&self.summary, &self.text, &self.title]
            .into_iter()
            .find(|s| !s.is_empty())
            .map_or("", String::as_str)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        if self.summary.is_empty() && !self.effective_summary().is_empty() {
            let mut card = self.clone();
            card.summary = self.effective_summary().to_string();
            return serde_json::to_string(&card);
        }

        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub activity_title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub activity_subtitle: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub activity_image: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub activity_text: String,
    #[serde(default = "default_markdown")]
    pub markdown: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub start_group: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facts: Vec<Fact>,
    #[serde(rename = "potentialAction")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub potential_actions: Vec<PotentialAction>,
}

fn default_markdown() -> bool {
    true
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

impl Section {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            text: String::new(),
            activity_title: String::new(),
            activity_subtitle: String::new(),
            activity_image: String::new(),
            activity_text: String::new(),
            markdown: true,
            start_group: false,
            facts: vec![],
            potential_actions: vec![],
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn activity_title(mut self, title: impl Into<String>) -> Self {
        self.activity_title = title.into();
        self
    }

    pub fn activity_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.activity_subtitle = subtitle.into();
        self
    }

    pub fn activity_image(mut self, image_url: impl Into<String>) -> Self {
        self.activity_image = image_url.into();
        self
    }

    pub fn activity_text(mut self, text: impl Into<String>) -> Self {
        self.activity_text = text.into();
        self
    }

    pub fn markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    pub fn start_group(mut self) -> Self {
        self.start_group = true;
        self
    }

    pub fn fact(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.facts.push(Fact {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn action(mut self, action: PotentialAction) -> Self {
        self.potential_actions.push(action);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialAction {
    #[serde(rename = "@type")]
    action_type: String,
    pub name: String,
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl PotentialAction {
    /// An `OpenUri` button that opens `uri` on every platform.
    pub fn open_uri(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            action_type: OPEN_URI_TYPE.to_string(),
            name: name.into(),
            targets: vec![],
        }
        .target(DEFAULT_OS, uri)
    }

    /// Adds a platform-specific target (`"default"`, `"iOS"`, `"android"`, `"windows"`).
    pub fn target(mut self, os: impl Into<String>, uri: impl Into<String>) -> Self {
        self.targets.push(Target {
            os: os.into(),
            uri: uri.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub os: String,
    pub uri: String,
}
