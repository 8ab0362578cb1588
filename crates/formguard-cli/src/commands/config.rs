//! `formguard config`: read and write configuration values.

use std::path::Path;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, KEYS},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = global.config.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            for key in KEYS {
                let value = get_config_value(&config, key)?;
                output.print(&format!("{key} = {value}"))?;
            }
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    })
}

/// Update one key in the file at `path`, keeping its other values.
/// Environment overrides are not written back.
fn set_config_value(path: &Path, key: &str, value: &str) -> CliResult<()> {
    let mut file_config = if path.exists() {
        AppConfig::load_file(path).map_err(|e| CliError::ConfigError {
            message: format!("Failed to read '{}'", path.display()),
            source: Some(e.into()),
        })?
    } else {
        AppConfig::default()
    };

    file_config
        .set(key, value)
        .map_err(|message| CliError::ConfigError {
            message,
            source: None,
        })?;

    file_config.save(path).map_err(|e| CliError::ConfigError {
        message: format!("Failed to write '{}'", path.display()),
        source: Some(e.into()),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
