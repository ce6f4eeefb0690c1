//! Acceptance rules for user records.
//!
//! Checks run in a fixed order and stop at the first failure, so a result
//! always names exactly one defect. [`InvalidReason::IsValid`] is the explicit
//! "no defect" value.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::json;
use unicode_general_category::{GeneralCategory, get_general_category};

use super::{Error, UserCandidate, UserProfile};

/// Minimum username length, counted in characters.
pub const USERNAME_MIN_CHARS: usize = 4;
/// Minimum password length, counted in characters.
pub const PASSWORD_MIN_CHARS: usize = 8;
/// Upper bound on email length in bytes.
pub const EMAIL_MAX_LEN: usize = 255;

/// Outcome of a validation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    IsValid,
    UsernameShort,
    NameEmpty,
    SurnameEmpty,
    PasswordShort,
    PasswordWeak,
    EmailNotValid,
    AgeNotValid,
}

impl InvalidReason {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::IsValid)
    }

    /// Message shown to API callers.
    pub fn message(self) -> &'static str {
        match self {
            Self::IsValid => "User is valid.",
            Self::UsernameShort => "Username is too short. There should be at least 4 characters.",
            Self::NameEmpty => "Name cannot be empty.",
            Self::SurnameEmpty => "Surname cannot be empty.",
            Self::PasswordShort => "Password is too short. There should be at least 8 characters.",
            Self::PasswordWeak => {
                "Password is weak. There should be at least one letter, one digit, one symbol."
            }
            Self::EmailNotValid => "Email format is not correct.",
            Self::AgeNotValid => "Age cannot be negative.",
        }
    }

    /// Stable snake_case code used in error details.
    pub fn code(self) -> &'static str {
        match self {
            Self::IsValid => "is_valid",
            Self::UsernameShort => "username_short",
            Self::NameEmpty => "name_empty",
            Self::SurnameEmpty => "surname_empty",
            Self::PasswordShort => "password_short",
            Self::PasswordWeak => "password_weak",
            Self::EmailNotValid => "email_not_valid",
            Self::AgeNotValid => "age_not_valid",
        }
    }

    /// Request field the defect refers to.
    pub fn field(self) -> Option<&'static str> {
        match self {
            Self::IsValid => None,
            Self::UsernameShort => Some("username"),
            Self::NameEmpty => Some("name"),
            Self::SurnameEmpty => Some("surname"),
            Self::PasswordShort | Self::PasswordWeak => Some("password"),
            Self::EmailNotValid => Some("email"),
            Self::AgeNotValid => Some("age"),
        }
    }

    /// Convert a failing outcome into a domain error.
    ///
    /// Returns `None` for [`InvalidReason::IsValid`].
    pub fn into_error(self) -> Option<Error> {
        let field = self.field()?;
        Some(
            Error::invalid_request(self.message())
                .with_details(json!({ "field": field, "code": self.code() })),
        )
    }
}

type ProfileCheck = fn(&UserProfile) -> InvalidReason;

const HEAD_CHECKS: [ProfileCheck; 3] = [check_username, check_name, check_surname];
const TAIL_CHECKS: [ProfileCheck; 2] = [check_email, check_age];

/// Validate a registration candidate.
///
/// # Examples
/// ```
/// use backend::domain::{InvalidReason, UserCandidate, UserProfile, validate_user};
///
/// let candidate = UserCandidate::new(
///     UserProfile {
///         username: "john".into(),
///         name: "john".into(),
///         surname: "jack".into(),
///         email: "a@mail.com".into(),
///         age: 10,
///     },
///     "asdf1234.-",
///     false,
/// );
/// assert_eq!(validate_user(&candidate), (true, InvalidReason::IsValid));
/// ```
pub fn validate_user(candidate: &UserCandidate) -> (bool, InvalidReason) {
    let profile = &candidate.profile;
    let reason = first_failure(&HEAD_CHECKS, profile)
        .or_else(|| {
            let (valid, reason) = validate_password(candidate.password());
            (!valid).then_some(reason)
        })
        .or_else(|| first_failure(&TAIL_CHECKS, profile))
        .unwrap_or(InvalidReason::IsValid);
    (reason.is_valid(), reason)
}

/// Validate profile fields only, as used by profile updates where the
/// password cannot change.
pub fn validate_profile(profile: &UserProfile) -> (bool, InvalidReason) {
    let reason = first_failure(&HEAD_CHECKS, profile)
        .or_else(|| first_failure(&TAIL_CHECKS, profile))
        .unwrap_or(InvalidReason::IsValid);
    (reason.is_valid(), reason)
}

fn first_failure(checks: &[ProfileCheck], profile: &UserProfile) -> Option<InvalidReason> {
    checks
        .iter()
        .map(|check| check(profile))
        .find(|reason| !reason.is_valid())
}

fn check_username(profile: &UserProfile) -> InvalidReason {
    if profile.username.chars().count() < USERNAME_MIN_CHARS {
        InvalidReason::UsernameShort
    } else {
        InvalidReason::IsValid
    }
}

fn check_name(profile: &UserProfile) -> InvalidReason {
    if profile.name.is_empty() {
        InvalidReason::NameEmpty
    } else {
        InvalidReason::IsValid
    }
}

fn check_surname(profile: &UserProfile) -> InvalidReason {
    if profile.surname.is_empty() {
        InvalidReason::SurnameEmpty
    } else {
        InvalidReason::IsValid
    }
}

fn check_email(profile: &UserProfile) -> InvalidReason {
    if validate_email(&profile.email) {
        InvalidReason::IsValid
    } else {
        InvalidReason::EmailNotValid
    }
}

fn check_age(profile: &UserProfile) -> InvalidReason {
    if profile.age < 0 {
        InvalidReason::AgeNotValid
    } else {
        InvalidReason::IsValid
    }
}

#[derive(Default)]
struct CharClasses {
    letter: bool,
    digit: bool,
    symbol: bool,
}

impl CharClasses {
    fn record(&mut self, ch: char) {
        use GeneralCategory as C;
        match get_general_category(ch) {
            C::UppercaseLetter
            | C::LowercaseLetter
            | C::TitlecaseLetter
            | C::ModifierLetter
            | C::OtherLetter => self.letter = true,
            C::DecimalNumber | C::LetterNumber | C::OtherNumber => self.digit = true,
            C::MathSymbol
            | C::CurrencySymbol
            | C::ModifierSymbol
            | C::OtherSymbol
            | C::ConnectorPunctuation
            | C::DashPunctuation
            | C::OpenPunctuation
            | C::ClosePunctuation
            | C::InitialPunctuation
            | C::FinalPunctuation
            | C::OtherPunctuation => self.symbol = true,
            _ => {}
        }
    }

    fn complete(&self) -> bool {
        self.letter && self.digit && self.symbol
    }
}

/// Check password length and character mix.
///
/// Passwords shorter than [`PASSWORD_MIN_CHARS`] fail with
/// [`InvalidReason::PasswordShort`]; otherwise at least one letter, one
/// number and one symbol or punctuation character are required.
pub fn validate_password(password: &str) -> (bool, InvalidReason) {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return (false, InvalidReason::PasswordShort);
    }

    let mut classes = CharClasses::default();
    for ch in password.chars() {
        classes.record(ch);
        if classes.complete() {
            return (true, InvalidReason::IsValid);
        }
    }
    (false, InvalidReason::PasswordWeak)
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // ASCII word characters only; `\w` in this engine is Unicode-aware.
        let pattern = r"^[0-9A-Za-z_.\-]+@(?:[0-9A-Za-z_\-]+\.)+[0-9A-Za-z_\-]{2,4}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Full-string syntactic email check.
pub fn validate_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LEN && email_regex().is_match(email)
}
