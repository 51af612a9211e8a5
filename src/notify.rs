use anyhow::{bail, Result};
use teams_notifier::{MessageCard, PotentialAction, Section};

pub struct NotifyContent {
    pub title: Option<String>,
    pub text: String,
    pub summary: Option<String>,
    pub color: Option<String>,
    pub facts: Vec<(String, String)>,
    pub links: Vec<(String, String)>,
}

/// Splits a `NAME=VALUE` argument at the first `=`.
pub fn parse_pair(arg: &str) -> Result<(String, String)> {
    let Some((name, value)) = arg.split_once('=') else {
        bail!("expected NAME=VALUE, got `{arg}`");
    };

    let name = name.trim();
    if name.is_empty() {
        bail!("missing name in `{arg}`");
    }

    Ok((name.to_string(), value.trim().to_string()))
}

pub fn build_card(content: NotifyContent) -> MessageCard {
    let mut card = MessageCard::new().text(content.text);

    if let Some(title) = content.title {
        card = card.title(title);
    }
    if let Some(summary) = content.summary {
        card = card.summary(summary);
    }
    if let Some(color) = content.color {
        card = card.theme_color(color);
    }

    if !content.facts.is_empty() {
        let mut section = Section::new();
        for (name, value) in content.facts {
            section = section.fact(name, value);
        }
        card = card.section(section);
    }

    for (name, uri) in content.links {
        card = card.action(PotentialAction::open_uri(name, uri));
    }

    card
}
