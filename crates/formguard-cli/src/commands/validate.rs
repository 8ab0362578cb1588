//! Implementation of the `formguard validate` command.
//!
//! Responsibility: gather the submission, hand it to the core validator
//! through the adapters, and render what the error sink ended up showing.
//! The rules themselves live in `formguard-core`.

use tracing::{debug, info, instrument};

use formguard_adapters::{FileFieldSource, MemoryErrorSink, MemoryFieldSource};
use formguard_core::{
    application::{FormValidator, ports::FieldSource},
    domain::{FieldId, FieldValues, ValidationResult},
};

use crate::{
    cli::{OutputFormat, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `formguard validate` command.
///
/// 1. Build the field source (file, flags, prompts)
/// 2. Run the validator against a fresh in-memory sink
/// 3. Print the report
/// 4. Reject the submission (exit 2) when any slot shows a message
#[instrument(skip_all)]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let source = build_source(&args)?;
    let sink = MemoryErrorSink::new();

    let validator = FormValidator::new(source, Box::new(sink.clone()));
    let result = validator.validate();

    match output.format() {
        OutputFormat::Json => output.json(&result)?,
        _ => render_report(&sink, &config, &output)?,
    }

    if result.is_valid() {
        info!("Submission accepted");
        Ok(())
    } else {
        Err(CliError::FormRejected {
            fields: rejected_fields(&result),
        })
    }
}

/// Pick the field source for this run.
///
/// A plain `--input` run reads straight from the file. Flags and prompts
/// layer on top of the file (or of an empty form) in a memory source.
fn build_source(args: &ValidateArgs) -> CliResult<Box<dyn FieldSource>> {
    let file = args.input.as_ref().map(FileFieldSource::load).transpose()?;

    let overrides = flag_values(args);
    let mut values = match file {
        Some(file) if overrides.is_empty() => {
            debug!(path = %file.path().display(), "Validating submission file as-is");
            return Ok(Box::new(file));
        }
        Some(file) => file.values().clone(),
        None => FieldValues::default(),
    };
    for (field, value) in overrides {
        values.set(field, value);
    }

    if args.interactive {
        prompt_missing(args, &mut values)?;
    }

    Ok(Box::new(MemoryFieldSource::from_values(&values)))
}

/// Field values given explicitly on the command line (or via env).
fn flag_values(args: &ValidateArgs) -> Vec<(FieldId, &str)> {
    [
        (FieldId::Username, &args.username),
        (FieldId::Email, &args.email),
        (FieldId::Phone, &args.phone),
        (FieldId::Password, &args.password),
        (FieldId::ConfirmPassword, &args.confirm_password),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    .collect()
}

#[cfg(feature = "interactive")]
fn prompt_missing(args: &ValidateArgs, values: &mut FieldValues) -> CliResult<()> {
    use dialoguer::{Input, Password};

    let given: Vec<FieldId> = flag_values(args).into_iter().map(|(f, _)| f).collect();

    for field in FieldId::ALL.into_iter().filter(|f| !given.contains(f)) {
        let answer = match field {
            FieldId::Password | FieldId::ConfirmPassword => Password::new()
                .with_prompt(field.label())
                .allow_empty_password(true)
                .interact(),
            _ => Input::<String>::new()
                .with_prompt(field.label())
                .allow_empty(true)
                .interact_text(),
        }
        .map_err(prompt_error)?;
        values.set(field, answer);
    }

    Ok(())
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        other => CliError::InvalidInput {
            message: format!("Prompt failed: {other}"),
            source: Some(Box::new(other)),
        },
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_missing(_args: &ValidateArgs, _values: &mut FieldValues) -> CliResult<()> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Print each field with the text its error slot shows.
fn render_report(
    sink: &MemoryErrorSink,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    output.header("Sign-up form")?;

    for field in FieldId::ALL {
        let text = sink.text(field);
        if !text.is_empty() {
            output.error(&format!("{}: {}", field.label(), text))?;
        } else if config.report.show_passing {
            output.success(field.label())?;
        }
    }

    Ok(())
}

fn rejected_fields(result: &ValidationResult) -> Vec<String> {
    result
        .invalid_fields()
        .into_iter()
        .map(|field| field.to_string())
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────
