//! `formguard init`: create a default configuration file.

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Write the built-in defaults to the config file (`--config` or the
/// platform location).
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = global.config.unwrap_or_else(AppConfig::config_path);

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    AppConfig::default()
        .save(&config_path)
        .map_err(|e| CliError::ConfigError {
            message: format!("Failed to write config to '{}'", config_path.display()),
            source: Some(e.into()),
        })?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}
