//! Form Validator - the one use case of the application.
//!
//! Each call to [`FormValidator::validate`]:
//! 1. Reads all five values from the field source (trim policy applied)
//! 2. Clears every error slot on the sink
//! 3. Evaluates the rule set
//! 4. Writes each failure to the sink, in the order the checks fired
//!
//! Nothing carries over between calls beyond what the sink displays, and the
//! reset in step 2 overwrites that.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{ErrorSink, FieldSource},
    domain::{FieldId, FieldValues, FormRules, ValidationResult},
};

/// Validates the sign-up form through injected collaborators.
pub struct FormValidator {
    source: Box<dyn FieldSource>,
    sink: Box<dyn ErrorSink>,
}

impl FormValidator {
    /// Create a validator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use formguard_core::application::{FormValidator, ports::*};
    /// # fn example(source: Box<dyn FieldSource>, sink: Box<dyn ErrorSink>) {
    ///
    /// let validator = FormValidator::new(
    ///     source, // impl FieldSource
    ///     sink,   // impl ErrorSink
    /// );
    /// if !validator.validate().is_valid() {
    ///     // suppress the submission
    /// }
    /// # }
    /// ```
    pub fn new(source: Box<dyn FieldSource>, sink: Box<dyn ErrorSink>) -> Self {
        Self { source, sink }
    }

    /// Validate the current form contents and publish the messages.
    #[instrument(skip_all)]
    pub fn validate(&self) -> ValidationResult {
        let values = self.read_values();

        for field in FieldId::ALL {
            self.sink.set_error_text(field, "");
        }

        let result = Self::check(&values);

        for failure in result.failures() {
            debug!(field = %failure.field, "Field rejected");
            self.sink.set_error_text(failure.field, &failure.message);
        }

        info!(
            valid = result.is_valid(),
            failures = result.failures().len(),
            "Form validated"
        );
        result
    }

    /// Read every field from the source with its trim policy applied.
    pub fn read_values(&self) -> FieldValues {
        let mut values = FieldValues::new();
        for field in FieldId::ALL {
            let raw = self.source.value(field);
            values.set(field, field.normalize(&raw));
        }
        values
    }

    /// Evaluate `values` without touching any collaborator.
    ///
    /// The trim policy is applied here too, so raw values are accepted.
    pub fn check(values: &FieldValues) -> ValidationResult {
        FormRules::evaluate(&values.normalized())
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::application::ports::{MockErrorSink, MockFieldSource};
    use crate::domain::messages;

    fn source_from(values: FieldValues) -> MockFieldSource {
        let mut source = MockFieldSource::new();
        source
            .expect_value()
            .returning(move |field| values.get(field).to_string());
        source
    }

    fn valid_values() -> FieldValues {
        FieldValues::new()
            .with(FieldId::Username, "alice")
            .with(FieldId::Email, "a@abc.com")
            .with(FieldId::Phone, "1234567890")
            .with(FieldId::Password, "Abc1234&")
            .with(FieldId::ConfirmPassword, "Abc1234&")
    }

    #[test]
    fn valid_form_only_clears_slots() {
        let mut sink = MockErrorSink::new();
        sink.expect_set_error_text()
            .withf(|_, message| message.is_empty())
            .times(5)
            .return_const(());

        let validator = FormValidator::new(Box::new(source_from(valid_values())), Box::new(sink));
        assert!(validator.validate().is_valid());
    }

    #[test]
    fn reset_precedes_every_failure_write() {
        let mut seq = Sequence::new();
        let mut sink = MockErrorSink::new();

        for field in FieldId::ALL {
            sink.expect_set_error_text()
                .withf(move |f, message| *f == field && message.is_empty())
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }
        sink.expect_set_error_text()
            .withf(|f, message| *f == FieldId::Phone && message == messages::PHONE_FORMAT)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_set_error_text()
            .withf(|f, message| *f == FieldId::Email && message == messages::EMAIL_FORMAT)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let values = valid_values()
            .with(FieldId::Phone, "12345")
            .with(FieldId::Email, "user@abcd.com");
        let validator = FormValidator::new(Box::new(source_from(values)), Box::new(sink));

        let result = validator.validate();
        assert!(!result.is_valid());
        assert_eq!(result.invalid_fields(), vec![FieldId::Email, FieldId::Phone]);
    }

    #[test]
    fn source_values_are_trimmed_except_passwords() {
        let values = FieldValues::new()
            .with(FieldId::Username, "  alice  ")
            .with(FieldId::Email, "\ta@abc.com\n")
            .with(FieldId::Phone, " 1234567890 ")
            .with(FieldId::Password, " Abc1234& ")
            .with(FieldId::ConfirmPassword, "Abc1234&");

        let mut sink = MockErrorSink::new();
        sink.expect_set_error_text().return_const(());
        let validator = FormValidator::new(Box::new(source_from(values)), Box::new(sink));

        let read = validator.read_values();
        assert_eq!(read.username, "alice");
        assert_eq!(read.email, "a@abc.com");
        assert_eq!(read.password, " Abc1234& ");

        // the untrimmed password no longer matches its confirmation
        let result = validator.validate();
        assert_eq!(
            result.error(FieldId::ConfirmPassword),
            Some(messages::PASSWORD_MISMATCH)
        );
        assert_eq!(result.invalid_fields(), vec![FieldId::ConfirmPassword]);
    }

    #[test]
    fn whitespace_only_username_is_empty() {
        let values = valid_values().with(FieldId::Username, " \t ");
        let result = FormValidator::check(&values);
        assert_eq!(result.error(FieldId::Username), Some(messages::USERNAME_EMPTY));
    }

    #[test]
    fn check_is_idempotent() {
        let values = valid_values()
            .with(FieldId::Password, "abc")
            .with(FieldId::Email, "");
        assert_eq!(FormValidator::check(&values), FormValidator::check(&values));
    }
}
