//! # Share Configuration
//!
//! Named options for a share operation. Defaults are overlaid by an optional
//! YAML file, which is in turn overlaid by `DISCORD_SHARE_*` environment
//! variables (a `.env` file is loaded by the binary via dotenvy).
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};
use log::{debug, warn};
use regex::Regex;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::ShareError;
use crate::core::response::{EMBED_LIMIT, MESSAGE_LIMIT};

/// Environment variable pointing at a YAML configuration file
pub const CONFIG_PATH_ENV: &str = "DISCORD_SHARE_CONFIG";

const WEBHOOK_MISSING: &str =
    "Discord webhook URL not configured. Please set it in the settings.";

const DISCORD_WEBHOOK_PATTERN: &str =
    r"^https://(?:(?:ptb|canary)\.)?discord(?:app)?\.com/api(?:/v\d+)?/webhooks/\d+/[\w-]+/?$";

/// How payloads are presented in the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ShareMode {
    /// Rich embed with title, footer and timestamp
    #[default]
    #[serde(rename = "embed")]
    Embed,
    /// Bare message content. The bold file-name line is left out unless
    /// `show_file_name` is set explicitly.
    #[serde(rename = "message", alias = "plain")]
    PlainMessage,
}

impl ShareMode {
    /// Discord's hard limit for the body of this kind of message
    pub fn discord_limit(self) -> usize {
        match self {
            ShareMode::Embed => EMBED_LIMIT,
            ShareMode::PlainMessage => MESSAGE_LIMIT,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "embed" => Some(ShareMode::Embed),
            "message" | "plain" => Some(ShareMode::PlainMessage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShareConfig {
    pub webhook_url: Option<String>,
    pub mode: ShareMode,
    pub show_line_numbers: bool,
    pub show_author: bool,
    pub author_name: Option<String>,
    /// Bold file-name line above the code block; unset means on for embeds only
    pub show_file_name: Option<bool>,
    pub embed_limit: usize,
    pub message_limit: usize,
    /// Minimum characters reserved for decoration around each chunk
    pub wrapper_overhead: usize,
    pub color: u32,
    /// Ask for a comment when none was given on the command line
    pub ask_comment: bool,
    /// Ask for confirmation before sending
    pub confirm: bool,
    pub log_level: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            mode: ShareMode::Embed,
            show_line_numbers: false,
            show_author: false,
            author_name: None,
            show_file_name: None,
            embed_limit: EMBED_LIMIT,
            message_limit: MESSAGE_LIMIT,
            wrapper_overhead: 0,
            color: 0x0099ff,
            ask_comment: false,
            confirm: false,
            log_level: "warn".to_string(),
        }
    }
}

impl ShareConfig {
    /// Load a YAML file (explicit path, else `DISCORD_SHARE_CONFIG`), then apply the environment.
    ///
    /// Nothing is validated or logged here, so this can run before the logger
    /// is installed; call [`ShareConfig::validate`] afterwards.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_PATH_ENV).ok();
        let path = path.or(env_path.as_deref().map(Path::new));

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_from(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a YAML configuration file without validating it
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ShareConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Overlay values from `DISCORD_SHARE_*` variables resolved through `lookup`
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(&format!("DISCORD_SHARE_{name}")).filter(|v| !v.trim().is_empty())
        };

        if let Some(url) = var("WEBHOOK_URL") {
            self.webhook_url = Some(url.trim().to_string());
        }
        if let Some(mode) = var("MODE") {
            self.mode = ShareMode::parse(&mode)
                .ok_or_else(|| anyhow::anyhow!("Unknown share mode: {}", mode))?;
        }
        if let Some(v) = var("SHOW_LINE_NUMBERS") {
            self.show_line_numbers = parse_bool("SHOW_LINE_NUMBERS", &v)?;
        }
        if let Some(v) = var("SHOW_AUTHOR") {
            self.show_author = parse_bool("SHOW_AUTHOR", &v)?;
        }
        if let Some(name) = var("AUTHOR_NAME") {
            self.author_name = Some(name);
        }
        if let Some(v) = var("SHOW_FILE_NAME") {
            self.show_file_name = Some(parse_bool("SHOW_FILE_NAME", &v)?);
        }
        if let Some(v) = var("EMBED_LIMIT") {
            self.embed_limit = v.trim().parse().context("DISCORD_SHARE_EMBED_LIMIT")?;
        }
        if let Some(v) = var("MESSAGE_LIMIT") {
            self.message_limit = v.trim().parse().context("DISCORD_SHARE_MESSAGE_LIMIT")?;
        }
        if let Some(v) = var("WRAPPER_OVERHEAD") {
            self.wrapper_overhead = v.trim().parse().context("DISCORD_SHARE_WRAPPER_OVERHEAD")?;
        }
        if let Some(v) = var("COLOR") {
            self.color = parse_color(&v)?;
        }
        if let Some(v) = var("ASK_COMMENT") {
            self.ask_comment = parse_bool("ASK_COMMENT", &v)?;
        }
        if let Some(v) = var("CONFIRM") {
            self.confirm = parse_bool("CONFIRM", &v)?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(())
    }

    /// Check limits against Discord's hard limits and log any warnings
    pub fn validate(&self) -> Result<()> {
        for (key, mode) in [
            ("embed_limit", ShareMode::Embed),
            ("message_limit", ShareMode::PlainMessage),
        ] {
            let limit = self.max_payload_length(mode);
            if limit == 0 || limit > mode.discord_limit() {
                return Err(anyhow::anyhow!(
                    "{} must be between 1 and {} (got {})",
                    key,
                    mode.discord_limit(),
                    limit
                ));
            }
        }
        if self.color > 0xFF_FF_FF {
            return Err(anyhow::anyhow!("color must be a 24-bit RGB value"));
        }

        for warning in self.warnings()? {
            warn!("{warning}");
        }
        debug!("Configuration validated (mode: {:?})", self.mode);
        Ok(())
    }

    /// Settings that are accepted but probably not what the user meant
    pub fn warnings(&self) -> Result<Vec<String>> {
        let mut warnings = Vec::new();
        if let Some(url) = self.webhook_url.as_deref().map(str::trim) {
            let pattern = Regex::new(DISCORD_WEBHOOK_PATTERN)?;
            let without_query = url.split(&['?', '#'][..]).next().unwrap_or(url);
            if !url.is_empty() && !pattern.is_match(without_query) {
                warnings.push(format!(
                    "Webhook URL does not look like a Discord webhook: {}",
                    redact(without_query)
                ));
            }
        }
        Ok(warnings)
    }

    /// Whether the bold file-name line is shown in `mode`
    pub fn shows_file_name(&self, mode: ShareMode) -> bool {
        self.show_file_name.unwrap_or(mode == ShareMode::Embed)
    }

    /// The configured endpoint, or a configuration error if absent or unparsable
    pub fn webhook_url(&self) -> Result<Url, ShareError> {
        let raw = self
            .webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ShareError::configuration(WEBHOOK_MISSING))?;

        let mut url = Url::parse(raw).map_err(|e| {
            ShareError::configuration(format!("Invalid Discord webhook URL: {e}"))
        })?;
        if url.host_str().is_none() || !matches!(url.scheme(), "http" | "https") {
            return Err(ShareError::configuration(
                "Invalid Discord webhook URL: expected an http(s) URL with a host",
            ));
        }
        // Discord answers 200 instead of 204 when `?wait=true` is passed
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }

    /// Per-message size limit for the given mode
    pub fn max_payload_length(&self, mode: ShareMode) -> usize {
        match mode {
            ShareMode::Embed => self.embed_limit,
            ShareMode::PlainMessage => self.message_limit,
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "enabled" => Ok(true),
        "0" | "false" | "no" | "off" | "disabled" => Ok(false),
        other => Err(anyhow::anyhow!(
            "DISCORD_SHARE_{} must be a boolean (got {})",
            name,
            other
        )),
    }
}

/// Accepts `0x0099ff`, `#0099ff` or a decimal value
fn parse_color(value: &str) -> Result<u32> {
    let value = value.trim();
    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .or_else(|| value.strip_prefix('#'));
    let color = match hex {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    }
    .with_context(|| format!("Invalid color: {}", value))?;
    Ok(color)
}

/// Webhook URLs embed a secret token; keep it out of logs
fn redact(url: &str) -> String {
    match url.rsplit_once('/') {
        Some((head, _)) => format!("{head}/***"),
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ShareConfig::default();
        assert_eq!(config.mode, ShareMode::Embed);
        assert_eq!(config.embed_limit, 4096);
        assert_eq!(config.message_limit, 2000);
        assert_eq!(config.color, 0x0099ff);
        assert!(config.max_payload_length(ShareMode::Embed)
            > config.max_payload_length(ShareMode::PlainMessage));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_webhook_is_configuration_error() {
        let config = ShareConfig::default();
        match config.webhook_url() {
            Err(ShareError::Configuration(msg)) => assert_eq!(msg, WEBHOOK_MISSING),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_webhook_url() {
        let config = ShareConfig {
            webhook_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.webhook_url(),
            Err(ShareError::Configuration(_))
        ));
    }

    #[test]
    fn test_webhook_url_parses() {
        let config = ShareConfig {
            webhook_url: Some("https://discord.com/api/webhooks/123/abc".to_string()),
            ..Default::default()
        };
        let url = config.webhook_url().unwrap();
        assert_eq!(url.host_str(), Some("discord.com"));
        assert_eq!(url.path(), "/api/webhooks/123/abc");
    }

    #[test]
    fn test_webhook_url_drops_query_and_fragment() {
        let config = ShareConfig {
            webhook_url: Some("https://discord.com/api/webhooks/1/t?wait=true#top".to_string()),
            ..Default::default()
        };
        let url = config.webhook_url().unwrap();
        assert_eq!(url.as_str(), "https://discord.com/api/webhooks/1/t");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_warnings_for_non_discord_url() {
        let config = ShareConfig {
            webhook_url: Some("https://example.com/hooks/secret".to_string()),
            ..Default::default()
        };
        let warnings = config.warnings().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("https://example.com/hooks/***"));
        assert!(!warnings[0].contains("secret"));
        // Still a usable configuration
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_warnings_for_discord_url() {
        let config = ShareConfig {
            webhook_url: Some("https://discord.com/api/webhooks/1/tok?wait=true".to_string()),
            ..Default::default()
        };
        assert!(config.warnings().unwrap().is_empty());
        assert!(ShareConfig::default().warnings().unwrap().is_empty());
    }

    #[test]
    fn test_load_does_not_validate() {
        let path = std::env::temp_dir().join(format!(
            "discord-share-load-{}.yaml",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, "embed_limit: 9000\n").unwrap();

        let loaded = ShareConfig::load(Some(&path));
        std::fs::remove_file(&path).ok();

        let config = loaded.unwrap();
        assert_eq!(config.embed_limit, 9000);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("embed_limit must be between 1 and 4096"));
    }

    #[test]
    fn test_file_name_default_depends_on_mode() {
        let config = ShareConfig::default();
        assert!(config.shows_file_name(ShareMode::Embed));
        assert!(!config.shows_file_name(ShareMode::PlainMessage));

        let config = ShareConfig {
            show_file_name: Some(true),
            ..Default::default()
        };
        assert!(config.shows_file_name(ShareMode::PlainMessage));

        let mut config = ShareConfig::default();
        config
            .apply_env_from(|key| (key == "DISCORD_SHARE_SHOW_FILE_NAME").then(|| "no".to_string()))
            .unwrap();
        assert!(!config.shows_file_name(ShareMode::Embed));
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("DISCORD_SHARE_WEBHOOK_URL", "https://discord.com/api/webhooks/1/x"),
            ("DISCORD_SHARE_MODE", "message"),
            ("DISCORD_SHARE_SHOW_LINE_NUMBERS", "true"),
            ("DISCORD_SHARE_SHOW_AUTHOR", "yes"),
            ("DISCORD_SHARE_AUTHOR_NAME", "octocat"),
            ("DISCORD_SHARE_COLOR", "#ff0000"),
            ("DISCORD_SHARE_WRAPPER_OVERHEAD", "40"),
        ]);
        let mut config = ShareConfig::default();
        config
            .apply_env_from(|k| vars.get(k).cloned())
            .unwrap();

        assert_eq!(config.mode, ShareMode::PlainMessage);
        assert!(config.show_line_numbers);
        assert!(config.show_author);
        assert_eq!(config.author_name.as_deref(), Some("octocat"));
        assert_eq!(config.color, 0xff0000);
        assert_eq!(config.wrapper_overhead, 40);
    }

    #[test]
    fn test_blank_env_values_ignored() {
        let vars = env(&[("DISCORD_SHARE_WEBHOOK_URL", "  ")]);
        let mut config = ShareConfig::default();
        config.apply_env_from(|k| vars.get(k).cloned()).unwrap();
        assert!(config.webhook_url.is_none());
    }

    #[test]
    fn test_bad_env_values_rejected() {
        let vars = env(&[("DISCORD_SHARE_MODE", "carrier-pigeon")]);
        let mut config = ShareConfig::default();
        assert!(config.apply_env_from(|k| vars.get(k).cloned()).is_err());

        let vars = env(&[("DISCORD_SHARE_CONFIRM", "maybe")]);
        assert!(config.apply_env_from(|k| vars.get(k).cloned()).is_err());
    }

    #[test]
    fn test_yaml_config() {
        let yaml = r#"
webhook_url: https://discord.com/api/webhooks/123/abc
mode: message
show_line_numbers: true
message_limit: 1500
"#;
        let config: ShareConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.mode, ShareMode::PlainMessage);
        assert_eq!(config.message_limit, 1500);
        assert!(config.show_line_numbers);
        // Unset keys keep their defaults
        assert_eq!(config.embed_limit, EMBED_LIMIT);
        assert_eq!(config.show_file_name, None);
    }

    #[test]
    fn test_limits_above_discord_rejected() {
        let config = ShareConfig {
            message_limit: 2500,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = ShareConfig {
            embed_limit: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("embed_limit"));
        assert_eq!(ShareMode::Embed.discord_limit(), EMBED_LIMIT);
        assert_eq!(ShareMode::PlainMessage.discord_limit(), MESSAGE_LIMIT);
    }

    #[test]
    fn test_parse_color_formats() {
        assert_eq!(parse_color("0x0099ff").unwrap(), 0x0099ff);
        assert_eq!(parse_color("#0099FF").unwrap(), 0x0099ff);
        assert_eq!(parse_color("39423").unwrap(), 39423);
        assert!(parse_color("blue").is_err());
    }

    #[test]
    fn test_redact_hides_token() {
        assert_eq!(
            redact("https://discord.com/api/webhooks/123/secret"),
            "https://discord.com/api/webhooks/123/***"
        );
    }

    #[test]
    fn test_webhook_pattern() {
        let pattern = Regex::new(DISCORD_WEBHOOK_PATTERN).unwrap();
        assert!(pattern.is_match("https://discord.com/api/webhooks/123/abc-DEF_1"));
        assert!(pattern.is_match("https://canary.discordapp.com/api/v10/webhooks/1/t"));
        assert!(!pattern.is_match("https://example.com/hook"));
    }
}
