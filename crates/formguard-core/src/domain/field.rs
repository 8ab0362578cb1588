//! The fixed set of form fields and the raw values submitted for them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, messages};

/// Identifier of one of the five form fields.
///
/// Variants are declared in form order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Username,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields, in form order.
    pub const ALL: [FieldId; 5] = [
        Self::Username,
        Self::Email,
        Self::Phone,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// Identifier of the input element, e.g. `confirmPassword`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Identifier of the element that displays this field's error text.
    pub const fn error_slot(self) -> &'static str {
        match self {
            Self::Username => "usernameError",
            Self::Email => "emailError",
            Self::Phone => "phoneError",
            Self::Password => "passwordError",
            Self::ConfirmPassword => "confirmPasswordError",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Phone => "Phone number",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether surrounding whitespace is stripped before checking.
    ///
    /// Password content is never altered.
    pub const fn is_trimmed(self) -> bool {
        !matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Message recorded when the field is empty.
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Username => messages::USERNAME_EMPTY,
            Self::Email => messages::EMAIL_EMPTY,
            Self::Phone => messages::PHONE_EMPTY,
            Self::Password => messages::PASSWORD_EMPTY,
            Self::ConfirmPassword => messages::CONFIRM_PASSWORD_EMPTY,
        }
    }

    /// Apply this field's trim policy to a raw value.
    pub fn normalize(self, raw: &str) -> &str {
        if self.is_trimmed() {
            trim_field(raw)
        } else {
            raw
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "password" => Ok(Self::Password),
            "confirmpassword" => Ok(Self::ConfirmPassword),
            _ => Err(DomainError::UnknownField {
                name: s.to_string(),
            }),
        }
    }
}

/// Strip leading and trailing whitespace the way a browser's `trim()` does.
///
/// That is Unicode `White_Space` plus the byte-order mark, minus U+0085.
pub fn trim_field(raw: &str) -> &str {
    raw.trim_matches(is_form_whitespace)
}

fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Raw values submitted for the five fields.
///
/// Missing keys deserialize as empty strings; unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FieldValues {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(alias = "confirm_password", alias = "confirm-password")]
    pub confirm_password: String,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Username => &mut self.username,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Copy with every field's trim policy applied.
    pub fn normalized(&self) -> Self {
        let mut out = Self::default();
        for field in FieldId::ALL {
            out.set(field, field.normalize(self.get(field)));
        }
        out
    }
}
