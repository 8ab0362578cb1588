//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "formguard",
    bin_name = "formguard",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate sign-up form submissions",
    long_about = "formguard checks a username, email, phone number, password and \
                  password confirmation, and reports a message for every field \
                  that would block the submission.",
    after_help = "EXAMPLES:\n\
        \x20 formguard validate --username alice --email a@abc.com --phone 1234567890 \\\n\
        \x20     --password 'Abc1234&' --confirm-password 'Abc1234&'\n\
        \x20 formguard validate --input signup.json --output-format json\n\
        \x20 formguard validate --interactive\n\
        \x20 formguard rules",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a form submission.
    #[command(
        visible_alias = "v",
        about = "Validate a form submission",
        after_help = "Fields not given on the command line (or in --input) are empty.\n\
            Exit status is 0 when the form is valid and 2 when it must be rejected.\n\n\
            EXAMPLES:\n\
            \x20 formguard validate -u alice -e a@abc.com -p 1234567890 \\\n\
            \x20     --password 'Abc1234&' --confirm-password 'Abc1234&'\n\
            \x20 FORMGUARD_PASSWORD='Abc1234&' formguard validate --input signup.toml\n\
            \x20 formguard validate --input signup.json --phone 0123456789"
    )]
    Validate(ValidateArgs),

    /// Describe each field's rules.
    #[command(
        about = "Show the rules applied to each field",
        after_help = "EXAMPLES:\n\
            \x20 formguard rules\n\
            \x20 formguard rules password"
    )]
    Rules(RulesArgs),

    /// Initialise a formguard configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 formguard init\n\
            \x20 formguard init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 formguard completions bash > ~/.local/share/bash-completion/completions/formguard\n\
            \x20 formguard completions zsh  > ~/.zfunc/_formguard\n\
            \x20 formguard completions fish > ~/.config/fish/completions/formguard.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the formguard configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 formguard config get output.format\n\
            \x20 formguard config set report.show_passing false\n\
            \x20 formguard config list"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `formguard validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Username.
    #[arg(short = 'u', long = "username", value_name = "NAME", help = "Username")]
    pub username: Option<String>,

    /// Email address.
    #[arg(short = 'e', long = "email", value_name = "EMAIL", help = "Email address")]
    pub email: Option<String>,

    /// Phone number.
    #[arg(short = 'p', long = "phone", value_name = "PHONE", help = "Phone number")]
    pub phone: Option<String>,

    /// Password; prefer the environment variable to keep it out of shell history.
    #[arg(
        long = "password",
        value_name = "PASSWORD",
        env = "FORMGUARD_PASSWORD",
        hide_env_values = true,
        help = "Password"
    )]
    pub password: Option<String>,

    /// Password confirmation.
    #[arg(
        long = "confirm-password",
        value_name = "PASSWORD",
        env = "FORMGUARD_CONFIRM_PASSWORD",
        hide_env_values = true,
        help = "Password confirmation"
    )]
    pub confirm_password: Option<String>,

    /// Read the submission from a `.json` or `.toml` file. Field flags
    /// override values from the file.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Submission file (.json or .toml)"
    )]
    pub input: Option<PathBuf>,

    /// Prompt for every field not given as a flag.
    #[arg(
        long = "interactive",
        conflicts_with = "input",
        help = "Prompt for missing fields"
    )]
    pub interactive: bool,
}

// ── rules ─────────────────────────────────────────────────────────────────────

/// Arguments for `formguard rules`.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Only show this field (e.g. `email`, `confirm-password`).
    #[arg(value_name = "FIELD", help = "Field to describe")]
    pub field: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `formguard init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `formguard completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `formguard config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Set a configuration key in the config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_validate_command() {
        let cli = Cli::parse_from([
            "formguard",
            "validate",
            "-u",
            "alice",
            "--email",
            "a@abc.com",
            "--confirm-password",
            "Abc1234&",
        ]);
        let Commands::Validate(args) = cli.command else {
            panic!("expected Validate command");
        };
        assert_eq!(args.username.as_deref(), Some("alice"));
        assert_eq!(args.email.as_deref(), Some("a@abc.com"));
        assert_eq!(args.confirm_password.as_deref(), Some("Abc1234&"));
        assert!(args.phone.is_none());
    }

    #[test]
    fn empty_flag_value_is_kept() {
        let cli = Cli::parse_from(["formguard", "validate", "--username", ""]);
        let Commands::Validate(args) = cli.command else {
            panic!("expected Validate command");
        };
        assert_eq!(args.username.as_deref(), Some(""));
    }

    #[test]
    fn interactive_conflicts_with_input() {
        let result = Cli::try_parse_from([
            "formguard",
            "validate",
            "--interactive",
            "--input",
            "form.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rules_takes_optional_field() {
        let cli = Cli::parse_from(["formguard", "rules", "confirm-password"]);
        let Commands::Rules(args) = cli.command else {
            panic!("expected Rules command");
        };
        assert_eq!(args.field.as_deref(), Some("confirm-password"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["formguard", "--quiet", "--verbose", "rules"]);
        assert!(result.is_err());
    }
}
