//! Implementation of the `formguard rules` command.

use serde::Serialize;

use formguard_core::{
    domain::{FieldId, PasswordRequirement},
    error::FormGuardError,
};

use crate::{
    cli::{OutputFormat, RulesArgs},
    error::CliResult,
    output::OutputManager,
};

/// What one field must satisfy, as shown to the user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldRules {
    field: FieldId,
    label: &'static str,
    trimmed: bool,
    rules: Vec<String>,
}

pub fn execute(args: RulesArgs, output: OutputManager) -> CliResult<()> {
    let fields = match args.field {
        Some(name) => vec![name.parse::<FieldId>().map_err(FormGuardError::from)?],
        None => FieldId::ALL.to_vec(),
    };
    let described: Vec<FieldRules> = fields.into_iter().map(describe).collect();

    if output.format() == OutputFormat::Json {
        output.json(&described)?;
        return Ok(());
    }

    for entry in &described {
        output.header(&format!("{} ({})", entry.label, entry.field))?;
        output.print(if entry.trimmed {
            "  surrounding whitespace is ignored"
        } else {
            "  checked exactly as typed"
        })?;
        for rule in &entry.rules {
            output.print(&format!("  - {rule}"))?;
        }
    }

    Ok(())
}

fn describe(field: FieldId) -> FieldRules {
    let mut rules = vec!["must not be empty".to_string()];
    match field {
        FieldId::Username => {}
        FieldId::Email => rules.push(
            "letters, digits or '_', then '@', exactly 3 letters, '.', \
             and 2 or more letters, digits or '_'"
                .into(),
        ),
        FieldId::Phone => rules.push("exactly 10 digits (0-9)".into()),
        FieldId::Password => rules.extend(PasswordRequirement::ALL.iter().map(|r| r.to_string())),
        FieldId::ConfirmPassword => rules.push("must equal the password".into()),
    }

    FieldRules {
        field,
        label: field.label(),
        trimmed: field.is_trimmed(),
        rules,
    }
}
