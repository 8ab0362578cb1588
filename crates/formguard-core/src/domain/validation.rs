use tracing::debug;

use crate::domain::{
    field::{FieldId, FieldValues},
    grammar, messages,
    result::ValidationResult,
};

/// The ordered rule set for the sign-up form.
///
/// Every check runs; none short-circuits the others. Format checks are gated
/// on non-empty input, so a field never carries both an emptiness and a
/// format message.
pub struct FormRules;

impl FormRules {
    /// Run every check against `values` (trim policy already applied).
    pub fn evaluate(values: &FieldValues) -> ValidationResult {
        let mut result = ValidationResult::new();

        Self::check_empty(values, &mut result);
        Self::check_phone(values.get(FieldId::Phone), &mut result);
        Self::check_password(values.get(FieldId::Password), &mut result);
        Self::check_match(
            values.get(FieldId::Password),
            values.get(FieldId::ConfirmPassword),
            &mut result,
        );
        Self::check_email(values.get(FieldId::Email), &mut result);

        result
    }

    fn check_empty(values: &FieldValues, result: &mut ValidationResult) {
        for field in FieldId::ALL {
            if values.get(field).is_empty() {
                result.record(field, field.empty_message());
            }
        }
    }

    fn check_phone(phone: &str, result: &mut ValidationResult) {
        if !phone.is_empty() && !grammar::is_valid_phone(phone) {
            result.record(FieldId::Phone, messages::PHONE_FORMAT);
        }
    }

    fn check_password(password: &str, result: &mut ValidationResult) {
        if password.is_empty() {
            return;
        }
        let unmet = grammar::unmet_password_requirements(password);
        if !unmet.is_empty() {
            debug!(?unmet, "Password does not meet complexity rules");
            result.record(FieldId::Password, messages::PASSWORD_COMPLEXITY);
        }
    }

    fn check_match(password: &str, confirm: &str, result: &mut ValidationResult) {
        if !password.is_empty() && !confirm.is_empty() && password != confirm {
            result.record(FieldId::ConfirmPassword, messages::PASSWORD_MISMATCH);
        }
    }

    fn check_email(email: &str, result: &mut ValidationResult) {
        if !email.is_empty() && !grammar::is_valid_email(email) {
            result.record(FieldId::Email, messages::EMAIL_FORMAT);
        }
    }
}
