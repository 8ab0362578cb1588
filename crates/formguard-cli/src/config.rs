//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`FORMGUARD__OUTPUT__NO_COLOR=true`)
//! 3. Config file (`--config`, else [`AppConfig::config_path`]; optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Validation report settings.
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// List fields that passed alongside the failures.
    pub show_passing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            report: ReportConfig { show_passing: true },
        }
    }
}

/// Keys accepted by `config get` / `config set`.
pub const KEYS: [&str; 3] = ["output.no_color", "output.format", "report.show_passing"];

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist unless `create_ok` is set (the
    /// commands that write the file); the default location is optional.
    pub fn load(config_file: Option<&PathBuf>, create_ok: bool) -> anyhow::Result<Self> {
        let file_source = match config_file {
            Some(path) => config::File::from(path.as_path()).required(!create_ok),
            None => config::File::from(Self::config_path()).required(false),
        };

        Self::builder()?
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix("FORMGUARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Defaults plus the file at `path`, ignoring the environment. Used
    /// when rewriting the file so env overrides are not persisted.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        Self::builder()?
            .add_source(config::File::from(path).required(true))
            .build()
            .with_context(|| format!("Failed to read '{}'", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;
        Ok(config::Config::builder().add_source(defaults))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.formguard.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "formguard", "formguard")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".formguard.toml"))
    }

    /// Value of a dotted key, rendered as text.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            "report.show_passing" => Some(self.report.show_passing.to_string()),
            _ => None,
        }
    }

    /// Set a dotted key from text. Errors name what was wrong.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "output.no_color" => self.output.no_color = parse_bool(value)?,
            "output.format" => {
                let format = value.trim().to_ascii_lowercase();
                if !["auto", "human", "plain", "json"].contains(&format.as_str()) {
                    return Err(format!(
                        "'{value}' is not a format (expected auto, human, plain or json)"
                    ));
                }
                self.output.format = format;
            }
            "report.show_passing" => self.report.show_passing = parse_bool(value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Write this configuration as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let toml = toml::to_string_pretty(self).context("Failed to serialise configuration")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        std::fs::write(path, toml).with_context(|| format!("Failed to write '{}'", path.display()))
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("'{value}' is not a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_show_passing_fields() {
        let cfg = AppConfig::default();
        assert!(cfg.report.show_passing);
        assert_eq!(cfg.output.format, "auto");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("formguard.toml");
        std::fs::write(&path, "[report]\nshow_passing = false\n").unwrap();

        let cfg = AppConfig::load(Some(&path), false).unwrap();
        assert!(!cfg.report.show_passing);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path), false).is_err());
        assert!(AppConfig::load(Some(&path), true).is_ok());
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = AppConfig::default();
        cfg.set("output.format", "JSON").unwrap();
        cfg.set("output.no_color", "yes").unwrap();
        cfg.save(&path).unwrap();

        assert_eq!(AppConfig::load(Some(&path), false).unwrap(), cfg);
    }

    #[test]
    fn set_rejects_bad_values_and_keys() {
        let mut cfg = AppConfig::default();
        assert!(cfg.set("output.format", "xml").is_err());
        assert!(cfg.set("report.show_passing", "maybe").is_err());
        assert!(cfg.set("does.not.exist", "1").is_err());
    }

    #[test]
    fn every_key_is_readable() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(cfg.get(key).is_some(), "{key} unreadable");
        }
        assert_eq!(cfg.get("nope"), None);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
