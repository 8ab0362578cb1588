//! Character-level grammars for the formatted fields.
//!
//! Each grammar is a named predicate over an already-normalized value, so the
//! patterns can be tested without the rule orchestration around them.
//!
//! | Field    | Grammar                                                        |
//! |----------|----------------------------------------------------------------|
//! | phone    | exactly 10 ASCII digits                                        |
//! | email    | `[A-Za-z0-9_]+` `@` 3 ASCII letters `.` `[A-Za-z0-9_]{2,}`     |
//! | password | single line, >= 7 UTF-16 units, an `A-Z`, a `0-9`, one of `& $#@` |

use std::{fmt, sync::LazyLock};

use regex::Regex;

/// Minimum password length, in UTF-16 code units.
pub const PASSWORD_MIN_LEN: usize = 7;

/// Characters that satisfy the special-character requirement. Includes the space.
///
/// `$` belongs to the set: the complexity message names it.
pub const PASSWORD_SPECIALS: [char; 5] = ['&', ' ', '$', '#', '@'];

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone grammar is a valid regex"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+@[A-Za-z]{3}\.[A-Za-z0-9_]{2,}$")
        .expect("email grammar is a valid regex")
});

static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("uppercase class is a valid regex"));

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("digit class is a valid regex"));

static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[& $#@]").expect("special class is a valid regex"));

static LINE_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\n\r\x{2028}\x{2029}]").expect("line terminator class is a valid regex")
});

/// `true` if `phone` is exactly ten decimal digits and nothing else.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

/// `true` if `email` matches `word+ @ letter{3} . word{2,}`.
///
/// Deliberately narrow: the domain label must be exactly three letters.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// `true` if `password` satisfies every [`PasswordRequirement`].
pub fn is_valid_password(password: &str) -> bool {
    PasswordRequirement::ALL
        .iter()
        .all(|req| req.is_met_by(password))
}

/// The requirements `password` fails, in declaration order.
pub fn unmet_password_requirements(password: &str) -> Vec<PasswordRequirement> {
    PasswordRequirement::ALL
        .into_iter()
        .filter(|req| !req.is_met_by(password))
        .collect()
}

/// One clause of the password grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    /// At least [`PASSWORD_MIN_LEN`] UTF-16 code units.
    MinLength,
    /// At least one `A`-`Z`.
    Uppercase,
    /// At least one `0`-`9`.
    Digit,
    /// At least one of [`PASSWORD_SPECIALS`].
    SpecialChar,
    /// No `\n`, `\r`, U+2028 or U+2029.
    SingleLine,
}

impl PasswordRequirement {
    pub const ALL: [PasswordRequirement; 5] = [
        Self::MinLength,
        Self::Uppercase,
        Self::Digit,
        Self::SpecialChar,
        Self::SingleLine,
    ];

    pub fn is_met_by(self, password: &str) -> bool {
        match self {
            Self::MinLength => password.encode_utf16().count() >= PASSWORD_MIN_LEN,
            Self::Uppercase => UPPERCASE.is_match(password),
            Self::Digit => DIGIT.is_match(password),
            Self::SpecialChar => SPECIAL.is_match(password),
            Self::SingleLine => !LINE_TERMINATOR.is_match(password),
        }
    }

    pub const fn describe(self) -> &'static str {
        match self {
            Self::MinLength => "at least 7 characters",
            Self::Uppercase => "an uppercase letter (A-Z)",
            Self::Digit => "a digit (0-9)",
            Self::SpecialChar => "a special character (&, space, $, # or @)",
            Self::SingleLine => "no line breaks",
        }
    }
}

impl fmt::Display for PasswordRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
