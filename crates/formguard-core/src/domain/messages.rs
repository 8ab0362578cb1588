//! User-facing error text.

pub const USERNAME_EMPTY: &str = "Username cannot be empty.";
pub const EMAIL_EMPTY: &str = "Email cannot be empty.";
pub const PHONE_EMPTY: &str = "Phone number cannot be empty.";
pub const PASSWORD_EMPTY: &str = "Password cannot be empty.";
pub const CONFIRM_PASSWORD_EMPTY: &str = "Confirm Password cannot be empty.";

pub const PHONE_FORMAT: &str = "Phone number must be exactly 10 numeric digits.";
pub const PASSWORD_COMPLEXITY: &str = "Password must be at least 7 chars long and contain: 1 Cap Letter, 1 Digit, 1 Special Char (&, $, #, or @).";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const EMAIL_FORMAT: &str =
    "Email must be in format: letters@3letters.domain (e.g., user@abc.com)";
