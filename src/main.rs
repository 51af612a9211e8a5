use crate::notify::{build_card, parse_pair, NotifyContent};
use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use teams_notifier::Notifier;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod notify;

/// Post a message card to a Microsoft Teams incoming webhook.
#[derive(Parser)]
#[command(name = "teams-notify", version)]
struct Cli {
    /// Webhook URL (defaults to TEAMS_WEBHOOK_URL)
    #[arg(long)]
    webhook_url: Option<String>,

    #[arg(long)]
    title: Option<String>,

    /// Message body, markdown allowed
    #[arg(long)]
    text: String,

    /// Notification preview text (defaults to the text, then the title)
    #[arg(long)]
    summary: Option<String>,

    /// Theme colour as hex, e.g. E74C3C
    #[arg(long)]
    color: Option<String>,

    /// Fact shown in the card body
    #[arg(long = "fact", value_name = "NAME=VALUE", value_parser = parse_pair)]
    facts: Vec<(String, String)>,

    /// Button that opens a URL
    #[arg(long = "link", value_name = "NAME=URL", value_parser = parse_pair)]
    links: Vec<(String, String)>,

    /// Additional accepted webhook URL prefix (also TEAMS_ALLOWED_PREFIXES)
    #[arg(long = "allow-prefix", value_name = "PREFIX")]
    allow_prefixes: Vec<String>,

    /// Request timeout (defaults to TEAMS_TIMEOUT_SECS, then 5)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// Print the JSON payload instead of sending it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("teams_notifier=info,teams_notify=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = config::get_config().context("Unable to load config")?;

    let card = build_card(NotifyContent {
        title: cli.title,
        text: cli.text,
        summary: cli.summary,
        color: cli.color,
        facts: cli.facts,
        links: cli.links,
    });

    if cli.dry_run {
        println!("{}", card.to_json()?);
        return Ok(());
    }

    let webhook_url = cli
        .webhook_url
        .or(config.webhook_url)
        .context("No webhook URL given: pass --webhook-url or set TEAMS_WEBHOOK_URL")?;

    let timeout = cli.timeout_secs.map_or(config.timeout, Duration::from_secs);

    let mut builder = Notifier::builder().timeout(timeout);
    for prefix in config.allowed_prefixes.iter().chain(&cli.allow_prefixes) {
        builder = builder.allow_prefix(prefix);
    }
    let notifier = builder.build().context("Unable to create HTTP client")?;

    notifier
        .send(&webhook_url, &card)
        .context("Unable to send message card")?;

    info!("Message card sent");

    Ok(())
}
