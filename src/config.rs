use anyhow::{bail, Result};
use std::time::Duration;
use teams_notifier::DEFAULT_TIMEOUT;

const WEBHOOK_URL_VAR: &str = "TEAMS_WEBHOOK_URL";
const TIMEOUT_VAR: &str = "TEAMS_TIMEOUT_SECS";
const ALLOWED_PREFIXES_VAR: &str = "TEAMS_ALLOWED_PREFIXES";

#[derive(Debug, PartialEq)]
pub struct Config {
    pub webhook_url: Option<String>,
    pub timeout: Duration,
    pub allowed_prefixes: Vec<String>,
}

pub fn get_config() -> Result<Config> {
    config_from(|name| std::env::var(name).ok())
}

fn config_from(var: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let webhook_url = var(WEBHOOK_URL_VAR).filter(|url| !url.is_empty());

    let timeout = match var(TIMEOUT_VAR) {
        Some(secs) => parse_timeout(&secs)?,
        None => DEFAULT_TIMEOUT,
    };

    let allowed_prefixes = var(ALLOWED_PREFIXES_VAR)
        .map(|prefixes| {
            prefixes
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Config {
        webhook_url,
        timeout,
        allowed_prefixes,
    })
}

fn parse_timeout(secs: &str) -> Result<Duration> {
    match secs.trim().parse::<u64>() {
        Ok(0) => bail!("{TIMEOUT_VAR} must be at least one second"),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => bail!("{TIMEOUT_VAR} is not a number of seconds: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const WEBHOOK: &str = "https://outlook.office.com/webhook/xxx";
    const PREFIXES: &str = "http://localhost:8080/, ,https://hooks.test/";

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        config_from(|name| vars.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn defaults() {
        assert_eq!(
            config(&[]).unwrap(),
            Config {
                webhook_url: None,
                timeout: DEFAULT_TIMEOUT,
                allowed_prefixes: vec![],
            }
        );
    }

    #[test]
    fn reads_all_variables() {
        let config = config(&[
            ("TEAMS_WEBHOOK_URL", WEBHOOK),
            ("TEAMS_TIMEOUT_SECS", " 12 "),
            ("TEAMS_ALLOWED_PREFIXES", PREFIXES),
        ])
        .unwrap();

        assert_eq!(config.webhook_url.as_deref(), Some(WEBHOOK));
        assert_eq!(config.timeout, Duration::from_secs(12));
        assert_eq!(
            config.allowed_prefixes,
            ["http://localhost:8080/", "https://hooks.test/"]
        );
    }

    #[test]
    fn empty_webhook_url_is_unset() {
        let config = config(&[("TEAMS_WEBHOOK_URL", "")]).unwrap();
        assert_eq!(config.webhook_url, None);
    }

    #[test]
    fn bad_timeout() {
        for secs in ["soon", "-1", "0", " 0 "] {
            assert!(config(&[("TEAMS_TIMEOUT_SECS", secs)]).is_err());
        }
    }
}
