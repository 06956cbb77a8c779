//! Console configuration loading.

use std::path::Path;

use serde::Deserialize;
use smol_str::SmolStr;

use crate::error::ConsoleError;
use crate::i18n::Language;

/// Default MQTT client id when the config omits one.
pub const DEFAULT_CLIENT_ID: &str = "ats-console";
/// Default UI refresh interval in milliseconds.
pub const DEFAULT_REFRESH_MS: u64 = 250;
/// Default MQTT keep-alive in seconds.
pub const DEFAULT_KEEP_ALIVE_SECS: u64 = 30;

/// Validated console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub broker: BrokerConfig,
    pub topic_root: SmolStr,
    pub refresh_ms: u64,
    pub language: Language,
}

/// Broker connection parameters.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub url: SmolStr,
    pub username: SmolStr,
    pub password: SmolStr,
    pub client_id: SmolStr,
    pub keep_alive_secs: u64,
}

impl ConsoleConfig {
    /// Loads and validates `console.toml`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConsoleError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|err| {
            ConsoleError::InvalidConfig(SmolStr::new(format!("console.toml: {err}")))
        })?;
        parse_console_toml_from_text(&text, "console.toml")
    }

    /// Wildcard subscription covering every device sub-topic.
    #[must_use]
    pub fn subscribe_filter(&self) -> String {
        format!("{}/#", self.topic_root)
    }

    /// The single topic control commands are published on.
    #[must_use]
    pub fn control_topic(&self) -> String {
        format!("{}/control", self.topic_root)
    }
}

/// Validates console.toml text without building a config.
pub fn validate_console_toml_text(text: &str) -> Result<(), ConsoleError> {
    parse_console_toml_from_text(text, "console.toml").map(|_| ())
}

fn parse_console_toml_from_text(
    text: &str,
    file_name: &str,
) -> Result<ConsoleConfig, ConsoleError> {
    let raw: ConsoleToml = toml::from_str(text).map_err(|err| {
        ConsoleError::InvalidConfig(SmolStr::new(format!("{file_name}: {err}")))
    })?;
    raw.into_config().map_err(|err| match err {
        ConsoleError::InvalidConfig(message) => {
            ConsoleError::InvalidConfig(SmolStr::new(format!("{file_name}: {message}")))
        }
        other => other,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsoleToml {
    broker: BrokerSection,
    topics: TopicsSection,
    console: Option<ConsoleSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BrokerSection {
    url: String,
    username: String,
    password: String,
    client_id: Option<String>,
    keep_alive_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TopicsSection {
    root: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsoleSection {
    refresh_ms: Option<u64>,
    language: Option<String>,
}

impl ConsoleToml {
    fn into_config(self) -> Result<ConsoleConfig, ConsoleError> {
        let url = self.broker.url.trim();
        if !(url.starts_with("wss://") || url.starts_with("ws://")) {
            return Err(ConsoleError::InvalidConfig(SmolStr::new(format!(
                "broker.url must start with ws:// or wss://, got '{url}'"
            ))));
        }
        if self.broker.username.trim().is_empty() {
            return Err(ConsoleError::InvalidConfig(SmolStr::new(
                "broker.username must not be empty",
            )));
        }
        let root = self.topics.root.trim();
        if root.is_empty() {
            return Err(ConsoleError::InvalidConfig(SmolStr::new(
                "topics.root must not be empty",
            )));
        }
        if root.ends_with('/') || root.contains('#') || root.contains('+') {
            return Err(ConsoleError::InvalidConfig(SmolStr::new(format!(
                "topics.root must be a plain topic prefix, got '{root}'"
            ))));
        }
        let console = self.console.unwrap_or(ConsoleSection {
            refresh_ms: None,
            language: None,
        });
        let refresh_ms = console.refresh_ms.unwrap_or(DEFAULT_REFRESH_MS);
        if refresh_ms < 16 {
            return Err(ConsoleError::InvalidConfig(SmolStr::new(
                "console.refresh_ms must be >= 16",
            )));
        }
        let language = match console.language.as_deref() {
            None => Language::default(),
            Some(code) => Language::parse(code).ok_or_else(|| {
                ConsoleError::InvalidConfig(SmolStr::new(format!(
                    "console.language must be 'en' or 'km', got '{code}'"
                )))
            })?,
        };
        let client_id = self
            .broker
            .client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_CLIENT_ID);
        Ok(ConsoleConfig {
            broker: BrokerConfig {
                url: SmolStr::new(url),
                username: SmolStr::new(self.broker.username.trim()),
                password: SmolStr::new(self.broker.password),
                client_id: SmolStr::new(client_id),
                keep_alive_secs: self
                    .broker
                    .keep_alive_secs
                    .unwrap_or(DEFAULT_KEEP_ALIVE_SECS)
                    .max(5),
            },
            topic_root: SmolStr::new(root),
            refresh_ms,
            language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console_toml() -> String {
        r#"
[broker]
url = "wss://broker.example.com:8884/mqtt"
username = "device"
password = "secret"

[topics]
root = "ats/home1"

[console]
refresh_ms = 250
language = "en"
"#
        .to_string()
    }

    #[test]
    fn schema_accepts_complete_config() {
        let config = parse_console_toml_from_text(&console_toml(), "console.toml")
            .expect("valid config");
        assert_eq!(config.subscribe_filter(), "ats/home1/#");
        assert_eq!(config.control_topic(), "ats/home1/control");
        assert_eq!(config.broker.client_id, DEFAULT_CLIENT_ID);
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn schema_rejects_unknown_keys() {
        let text = format!("{}\n[extra]\nflag = true\n", console_toml());
        let err = validate_console_toml_text(&text).expect_err("schema should fail");
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn schema_rejects_non_websocket_url() {
        let text = console_toml().replace(
            "wss://broker.example.com:8884/mqtt",
            "tcp://broker.example.com:1883",
        );
        let err = validate_console_toml_text(&text).expect_err("url scheme should fail");
        assert!(err.to_string().contains("broker.url"));
    }

    #[test]
    fn schema_rejects_wildcard_topic_root() {
        let text = console_toml().replace("ats/home1", "ats/home1/#");
        let err = validate_console_toml_text(&text).expect_err("topic root should fail");
        assert!(err.to_string().contains("topics.root"));
    }

    #[test]
    fn schema_rejects_too_small_refresh() {
        let text = console_toml().replace("refresh_ms = 250", "refresh_ms = 5");
        let err = validate_console_toml_text(&text).expect_err("refresh range should fail");
        assert!(err.to_string().contains("console.refresh_ms must be >= 16"));
    }

    #[test]
    fn schema_rejects_unknown_language() {
        let text = console_toml().replace("language = \"en\"", "language = \"fr\"");
        let err = validate_console_toml_text(&text).expect_err("language should fail");
        assert!(err.to_string().contains("console.language"));
    }

    #[test]
    fn console_section_is_optional() {
        let text = console_toml()
            .replace("[console]\nrefresh_ms = 250\nlanguage = \"en\"\n", "");
        let config =
            parse_console_toml_from_text(&text, "console.toml").expect("defaults apply");
        assert_eq!(config.refresh_ms, DEFAULT_REFRESH_MS);
        assert_eq!(config.language, Language::En);
    }
}
