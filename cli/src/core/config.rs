//! # EvBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates the bot configuration. Every field
//! has a default, so running with no configuration file at all reproduces the
//! classic demo bot.
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (or `EVBOT_CONFIG`)
//! 2. Project-specific `.evbot.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [responses]
//! greeting = "Howdy!"
//!
//! [demo]
//! pause_secs = 0.5
//!
//! [[replies]]
//! key = "ping"
//! text = "pong"
//! ```
//!
use crate::core::error::{EvbotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub responses: ResponsesConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    /// Extra fixed-text replies, registered after the built-in handlers.
    #[serde(default)]
    pub replies: Vec<ReplyConfig>,
}

/// Wording of the fixed built-in responses.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResponsesConfig {
    /// Line printed for `hi`.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Line printed for `bye`.
    #[serde(default = "default_farewell")]
    pub farewell: String,
}

/// Settings for `evbot demo`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// Pause between the greeting and the age query, in seconds.
    #[serde(default = "default_pause_secs")]
    pub pause_secs: f64,
}

/// Settings for `evbot chat`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Message key that ends the chat session once it has been dispatched.
    #[serde(default = "default_exit_key")]
    pub exit_key: String,
}

/// A single extra reply: `text` is printed whenever `key` is dispatched.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReplyConfig {
    pub key: String,
    pub text: String,
}

fn default_greeting() -> String {
    "Hello!".to_string()
}
fn default_farewell() -> String {
    "Nice chatting with you!".to_string()
}
fn default_pause_secs() -> f64 {
    2.2
}
fn default_prompt() -> String {
    "You: ".to_string()
}
fn default_exit_key() -> String {
    "bye".to_string()
}

impl Default for ResponsesConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            farewell: default_farewell(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            pause_secs: default_pause_secs(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            exit_key: default_exit_key(),
        }
    }
}

impl DemoConfig {
    /// The configured pause as a `Duration`. Negative, non-finite and
    /// too-large values are a configuration error.
    pub fn pause(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.pause_secs).map_err(|_| {
            anyhow!(EvbotError::Config(format!(
                "demo.pause_secs must be a non-negative number of seconds, got {}",
                self.pause_secs
            )))
        })
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".evbot.toml";

/// Loads the effective configuration, layering user, project and explicit files.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let user_config = load_user_config()?;
    let project_config = load_project_config(&current_dir)?;
    let mut merged = merge_configs(user_config.unwrap_or_default(), project_config);

    if let Some(path) = explicit {
        info!("Loading configuration from: {}", path.display());
        let explicit_config = load_config_from_path(path)?;
        merged = merge_configs(merged, Some(explicit_config));
    }

    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "EvBot", "evbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    match find_project_config_path(start) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No {} found from {}", PROJECT_CONFIG_FILENAME, start.display());
            Ok(None)
        }
    }
}

/// Walks from `start` towards the root looking for `.evbot.toml`.
/// The search stops at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Field-by-field merge: an override value wins when it differs from the default.
/// Extra replies from both layers are kept, base layer first.
fn merge_configs(base: Config, overrides: Option<Config>) -> Config {
    let over = match overrides {
        Some(o) => o,
        None => return base,
    };
    let mut merged = Config::default();

    merged.responses.greeting = if over.responses.greeting != default_greeting() {
        over.responses.greeting
    } else {
        base.responses.greeting
    };
    merged.responses.farewell = if over.responses.farewell != default_farewell() {
        over.responses.farewell
    } else {
        base.responses.farewell
    };
    merged.demo.pause_secs = if over.demo.pause_secs != default_pause_secs() {
        over.demo.pause_secs
    } else {
        base.demo.pause_secs
    };
    merged.chat.prompt = if over.chat.prompt != default_prompt() {
        over.chat.prompt
    } else {
        base.chat.prompt
    };
    merged.chat.exit_key = if over.chat.exit_key != default_exit_key() {
        over.chat.exit_key
    } else {
        base.chat.exit_key
    };
    merged.replies = base.replies;
    merged.replies.extend(over.replies);
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.responses.greeting.trim().is_empty() {
        return Err(anyhow!(EvbotError::Config(
            "responses.greeting cannot be empty".to_string()
        )));
    }
    if config.responses.farewell.trim().is_empty() {
        return Err(anyhow!(EvbotError::Config(
            "responses.farewell cannot be empty".to_string()
        )));
    }
    config.demo.pause()?;
    for reply in &config.replies {
        if reply.key.trim().is_empty() {
            return Err(anyhow!(EvbotError::Config(format!(
                "Reply key cannot be blank (text: '{}').",
                reply.text
            ))));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [responses]
            greeting = "Howdy!"

            [demo]
            pause_secs = 0.25

            [[replies]]
            key = "ping"
            text = "pong"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.responses.greeting, "Howdy!");
        assert_eq!(config.responses.farewell, default_farewell()); // Default
        assert_eq!(config.demo.pause_secs, 0.25);
        assert_eq!(config.chat, ChatConfig::default());
        assert_eq!(
            config.replies,
            vec![ReplyConfig {
                key: "ping".into(),
                text: "pong".into()
            }]
        );
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.responses.greeting, "Hello!");
        assert_eq!(config.demo.pause().unwrap(), Duration::from_millis(2200));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[responses]\nhello = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_prefers_non_default_override() {
        let mut user = Config::default();
        user.responses.greeting = "Hi from user".into();
        user.chat.exit_key = "quit".into();
        user.replies.push(ReplyConfig {
            key: "ping".into(),
            text: "pong".into(),
        });

        let mut project = Config::default();
        project.responses.farewell = "Later!".into();
        project.replies.push(ReplyConfig {
            key: "ping".into(),
            text: "pong again".into(),
        });

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.responses.greeting, "Hi from user");
        assert_eq!(merged.responses.farewell, "Later!");
        assert_eq!(merged.chat.exit_key, "quit");
        assert_eq!(merged.replies.len(), 2);
        assert_eq!(merged.replies[1].text, "pong again");
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let root = tempdir().unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = find_project_config_path(&nested);
        assert_eq!(found, Some(root.path().join(PROJECT_CONFIG_FILENAME)));
    }

    #[test]
    fn test_project_search_stops_at_git_dir() {
        let root = tempdir().unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = root.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert_eq!(find_project_config_path(&repo), None);
    }

    #[test]
    fn test_load_config_from_path_reports_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[demo]\npause_secs = \"soon\"").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_negative_pause() {
        let config = Config {
            demo: DemoConfig { pause_secs: -1.0 },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("demo.pause_secs"));
    }

    #[test]
    fn test_validate_config_huge_pause() {
        for pause_secs in [1e300, f64::INFINITY, f64::NAN] {
            let config = Config {
                demo: DemoConfig { pause_secs },
                ..Default::default()
            };
            let err = validate_config(&config).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<EvbotError>(),
                Some(EvbotError::Config(_))
            ));
            assert!(config.demo.pause().is_err());
        }
    }

    #[test]
    fn test_validate_config_blank_reply_key() {
        let config = Config {
            replies: vec![ReplyConfig {
                key: "  ".into(),
                text: "unreachable from chat".into(),
            }],
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Reply key cannot be blank"));
    }

    #[test]
    fn test_validate_config_empty_reply_key() {
        let config = Config {
            replies: vec![ReplyConfig {
                key: String::new(),
                text: "nobody hears this".into(),
            }],
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EvbotError>(),
            Some(EvbotError::Config(_))
        ));
    }
}
