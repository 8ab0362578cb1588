//! Outcome of one validation pass.

use serde::{Serialize, ser::SerializeStruct};

use crate::domain::field::FieldId;

/// A field's error message as recorded by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

/// Per-field error messages plus the overall verdict.
///
/// Failures are kept in the order the checks recorded them. A field holds at
/// most one message; recording a second one replaces the first in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    failures: Vec<FieldError>,
}

impl ValidationResult {
    /// A result with every error slot cleared.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, field: FieldId, message: impl Into<String>) {
        let message = message.into();
        match self.failures.iter_mut().find(|f| f.field == field) {
            Some(existing) => existing.message = message,
            None => self.failures.push(FieldError { field, message }),
        }
    }

    /// `true` iff no field has an error message.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Error message for `field`, if any.
    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.failures
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message.as_str())
    }

    pub fn has_error(&self, field: FieldId) -> bool {
        self.error(field).is_some()
    }

    /// Failures in the order they were recorded.
    pub fn failures(&self) -> &[FieldError] {
        &self.failures
    }

    /// Every field with its optional message, in form order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, Option<&str>)> + '_ {
        FieldId::ALL.into_iter().map(|f| (f, self.error(f)))
    }

    /// Fields that failed, in form order.
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|f| self.has_error(*f))
            .collect()
    }
}

/// `{"isValid": bool, "errors": {"username": null, ...}}`
impl Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Errors<'a>(&'a ValidationResult);

        impl Serialize for Errors<'_> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(FieldId::ALL.len()))?;
                for (field, message) in self.0.fields() {
                    map.serialize_entry(field.as_str(), &message)?;
                }
                map.end()
            }
        }

        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &Errors(self))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.fields().all(|(_, m)| m.is_none()));
    }

    #[test]
    fn recording_replaces_in_place() {
        let mut result = ValidationResult::new();
        result.record(FieldId::Phone, "first");
        result.record(FieldId::Email, "other");
        result.record(FieldId::Phone, "second");

        assert_eq!(result.failures().len(), 2);
        assert_eq!(result.failures()[0].field, FieldId::Phone);
        assert_eq!(result.error(FieldId::Phone), Some("second"));
        assert!(!result.is_valid());
    }

    #[test]
    fn invalid_fields_follow_form_order() {
        let mut result = ValidationResult::new();
        result.record(FieldId::Email, "e");
        result.record(FieldId::Username, "u");
        assert_eq!(
            result.invalid_fields(),
            vec![FieldId::Username, FieldId::Email]
        );
    }

    #[test]
    fn serializes_every_field() {
        let mut result = ValidationResult::new();
        result.record(FieldId::ConfirmPassword, "Passwords do not match.");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"]["username"], serde_json::Value::Null);
        assert_eq!(json["errors"]["confirmPassword"], "Passwords do not match.");
        assert_eq!(json["errors"].as_object().unwrap().len(), 5);
    }
}
