//! Email shape and suffix validation.
//!
//! This is a syntactic check only. It does not tell whether an address is
//! deliverable, disposable, or backed by a mail exchanger.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::logging::MaskedEmail;
use crate::value::OptionValue;

/// Pattern every candidate address must match.
///
/// A local part of word characters, hyphens and dots, an `@`, one or more
/// dot-terminated labels of word characters and hyphens, and a final label
/// of two to four characters.
pub const EMAIL_PATTERN: &str = r"^[\w\-\.]+@([\w\-]+\.)+[\w\-]{2,4}$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Outcome of validating an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationStatus {
    /// No validation has been performed.
    Undefined,
    /// The address matched the pattern and any suffix requirement.
    Success,
    /// The address does not have the shape of an email address.
    FailedValidation,
    /// The address is well formed but does not end with the required suffix.
    SuffixMismatch,
    /// A suffix requirement was given but it is not a string.
    GivenSuffixNotString,
}

impl ValidationStatus {
    /// Stable numeric code for this status.
    pub fn code(self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Success => 1,
            Self::FailedValidation => 2,
            Self::SuffixMismatch => 3,
            Self::GivenSuffixNotString => 4,
        }
    }

    /// Fixed human-readable remark for this status.
    pub fn remark(self) -> &'static str {
        match self {
            Self::Undefined => "",
            Self::Success => "Success.",
            Self::FailedValidation => "Email failed the validation checks.",
            Self::SuffixMismatch => "Email does not end with the specified value.",
            Self::GivenSuffixNotString => {
                "The given argument to check if the email ends with a suffix is not a string. Unable to validate."
            }
        }
    }

    /// Returns `true` for [`ValidationStatus::Success`].
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Success => write!(f, "success"),
            Self::FailedValidation => write!(f, "failed validation"),
            Self::SuffixMismatch => write!(f, "suffix mismatch"),
            Self::GivenSuffixNotString => write!(f, "given suffix not a string"),
        }
    }
}

/// Status and message produced by [`validate_email`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// What the validator concluded
    pub status: ValidationStatus,
    /// Diagnostic message; names the address and suffix on a mismatch
    pub message: String,
}

impl Validation {
    fn new(status: ValidationStatus) -> Self {
        Self {
            status,
            message: status.remark().to_string(),
        }
    }

    /// Returns `true` if the address passed every check.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Returns `true` if `email` has the shape of an email address.
///
/// # Examples
///
/// ```
/// use header_email::is_email_shaped;
///
/// assert!(is_email_shaped("jane@example.com"));
/// assert!(!is_email_shaped("jane@localhost"));
/// ```
pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates `email` against [`EMAIL_PATTERN`] and an optional suffix.
///
/// The suffix is a loosely typed [`OptionValue`] because it is often read
/// from configuration; a non-string suffix yields
/// [`ValidationStatus::GivenSuffixNotString`]. The suffix check only runs
/// once the shape check has passed.
///
/// # Examples
///
/// ```
/// use header_email::{validate_email, OptionValue, ValidationStatus};
///
/// let ok = validate_email("a@b.com", Some(&OptionValue::from("b.com")));
/// assert_eq!(ok.status, ValidationStatus::Success);
///
/// let wrong = validate_email("a@b.com", Some(&OptionValue::from("c.com")));
/// assert_eq!(wrong.status, ValidationStatus::SuffixMismatch);
/// assert!(wrong.message.contains("[a@b.com]"));
/// assert!(wrong.message.contains("[c.com]"));
/// ```
pub fn validate_email(email: &str, ends_with: Option<&OptionValue>) -> Validation {
    let validation = if !is_email_shaped(email) {
        Validation::new(ValidationStatus::FailedValidation)
    } else {
        match ends_with {
            None => Validation::new(ValidationStatus::Success),
            Some(OptionValue::Text(suffix)) => check_suffix(email, suffix),
            Some(other) => {
                tracing::warn!(
                    suffix_type = other.type_name(),
                    "suffix requirement is not a string"
                );
                Validation::new(ValidationStatus::GivenSuffixNotString)
            }
        }
    };

    tracing::debug!(
        email = %MaskedEmail(email),
        status = %validation.status,
        "validated email"
    );
    validation
}

/// Validates `email` with a suffix requirement known to be a string.
pub fn validate_email_suffix(email: &str, ends_with: &str) -> Validation {
    validate_email(email, Some(&OptionValue::from(ends_with)))
}

fn check_suffix(email: &str, suffix: &str) -> Validation {
    if email.ends_with(suffix) {
        return Validation::new(ValidationStatus::Success);
    }

    let status = ValidationStatus::SuffixMismatch;
    Validation {
        status,
        message: format!(
            "{} [{}] does not end with [{}]",
            status.remark(),
            email,
            suffix
        ),
    }
}
