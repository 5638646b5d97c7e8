use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use tgsearch::locale::UnknownLocale;
use tgsearch::search::catalog;
use tgsearch::ui::style;
use tgsearch::{Locale, SearchHistory, UiConfig, app_dirs, logging};

use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";

/// Configuration values that parse but cannot be used.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unknown theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },
    #[error(transparent)]
    Locale(#[from] UnknownLocale),
    #[error("invalid log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    search: SearchSection,
    ui: UiSection,
    log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    phone: Option<String>,
    locale: Option<String>,
    theme: Option<String>,
    seed_history: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
    level: Option<String>,
}

pub struct ResolvedConfig {
    pub ui: UiConfig,
    pub theme_name: String,
    pub seed_history: bool,
    pub log_level: LevelFilter,
}

impl ResolvedConfig {
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Locale: {}", self.ui.locale);
        println!("  Theme: {}", self.theme_name);
        println!("  Search delay: {} ms", self.ui.search_delay.as_millis());
        if self.ui.initial_phone.is_empty() {
            println!("  Initial phone: (empty)");
        } else {
            println!("  Initial phone: {}", self.ui.initial_phone);
        }
        println!("  Seed history: {}", bool_to_word(self.seed_history));
        println!("  Log level: {}", self.log_level);
    }
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli, None)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    Ok(raw.resolve()?)
}

/// Assemble the layered sources. `env_source` replaces the process
/// environment, which keeps tests independent of the caller's shell.
fn build_config(cli: &CliArgs, env_source: Option<config::Map<String, String>>) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix("tgsearch")
            .prefix_separator("_")
            .separator("__")
            .source(env_source),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(path) = app_dirs::config_file() {
        files.push(path);
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".tgsearch.toml"));
        files.push(current_dir.join("tgsearch.toml"));
    }

    files
}

impl RawConfig {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(delay) = cli.delay_ms {
            self.search.delay_ms = Some(delay);
        }
        if let Some(phone) = cli.phone.clone() {
            self.ui.phone = Some(phone);
        }
        if let Some(locale) = cli.locale {
            self.ui.locale = Some(Locale::from(locale).as_str().to_string());
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if cli.no_seed_history {
            self.ui.seed_history = Some(false);
        }
        if let Some(level) = cli.log_level.clone() {
            self.log.level = Some(level);
        }
    }

    fn resolve(self) -> Result<ResolvedConfig, SettingsError> {
        let locale = match self.ui.locale.as_deref() {
            Some(value) => value.parse::<Locale>()?,
            None => Locale::default(),
        };

        let theme_name = self
            .ui
            .theme
            .map(|name| name.trim().to_ascii_lowercase())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        let theme = style::by_name(&theme_name).ok_or_else(|| SettingsError::UnknownTheme {
            name: theme_name.clone(),
            available: style::names().join(", "),
        })?;

        let log_level = match self.log.level {
            Some(value) => {
                logging::parse_level(&value).ok_or(SettingsError::InvalidLogLevel(value))?
            }
            None => LevelFilter::Info,
        };

        let seed_history = self.ui.seed_history.unwrap_or(true);
        let history = if seed_history {
            catalog::seeded_history(locale)
        } else {
            SearchHistory::new()
        };

        let mut ui = UiConfig {
            locale,
            theme,
            initial_phone: self.ui.phone.unwrap_or_default(),
            history: Some(history),
            ..UiConfig::default()
        };
        if let Some(delay) = self.search.delay_ms {
            ui.search_delay = Duration::from_millis(delay);
        }

        Ok(ResolvedConfig {
            ui,
            theme_name,
            seed_history,
            log_level,
        })
    }
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
