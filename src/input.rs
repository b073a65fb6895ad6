//! Session-bound email input helper.
//!
//! [`email_input`] renders one text box whose value is backed by the session:
//!
//! ```text
//! START
//!   ├─ session already holds the key ─→ ADOPT_SESSION
//!   └─ otherwise ─────────────────────→ EXTRACT_FROM_HEADER
//!   ↓
//! RENDER
//!   ↓
//! VALIDATE          (if enabled)
//!   ↓
//! PERSIST_OUTCOME   (if an output key is configured)
//!   ↓
//! RETURN widget value
//! ```
//!
//! Every invocation runs this once. Validation is advisory: a failing
//! address is still rendered and returned, but only an email-shaped value
//! stays bound under the widget key.

use std::fmt;

use crate::extract::{extract_email, ExtractOptions, DEFAULT_EMAIL_HEADER};
use crate::logging::MaskedEmail;
use crate::session::{SessionKey, SessionStore, SessionValue};
use crate::validate::{is_email_shaped, validate_email, ValidationStatus};
use crate::value::OptionValue;
use crate::web::HeaderSource;
use crate::widget::{TextInput, TextInputSpec};

/// Outcome of validating the rendered email value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputStatus {
    /// Validation was not run.
    #[default]
    Undefined,
    /// The rendered value passed validation.
    Success,
    /// Validation failed for a reason with no dedicated status.
    Fail,
    /// The rendered value is not shaped like an email address.
    FailNotValidEmail,
    /// The rendered value does not end with the required suffix.
    FailSuffixMismatch,
}

impl InputStatus {
    /// Stable numeric code for this status.
    pub fn code(self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Success => 1,
            Self::Fail => 2,
            Self::FailNotValidEmail => 3,
            Self::FailSuffixMismatch => 4,
        }
    }

    /// Returns `true` for [`InputStatus::Success`].
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<ValidationStatus> for InputStatus {
    fn from(status: ValidationStatus) -> Self {
        match status {
            ValidationStatus::Success => Self::Success,
            ValidationStatus::FailedValidation => Self::FailNotValidEmail,
            ValidationStatus::SuffixMismatch => Self::FailSuffixMismatch,
            ValidationStatus::Undefined | ValidationStatus::GivenSuffixNotString => Self::Fail,
        }
    }
}

impl fmt::Display for InputStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Success => write!(f, "success"),
            Self::Fail => write!(f, "fail"),
            Self::FailNotValidEmail => write!(f, "not a valid email"),
            Self::FailSuffixMismatch => write!(f, "suffix mismatch"),
        }
    }
}

/// Status, message and rendered email of one [`email_input`] call.
///
/// Stored under [`EmailInputOptions::output_session_key`] when configured.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputOutcome {
    /// Validation result mapped onto the input status set
    pub status: InputStatus,
    /// Validator message, empty when validation is disabled
    pub message: String,
    /// Value held by the widget after rendering
    pub email: String,
}

/// Options controlling [`email_input`].
///
/// # Examples
///
/// ```
/// use header_email::{EmailInputOptions, TextInputSpec};
///
/// let options = EmailInputOptions::new()
///     .session_key("email")
///     .output_session_key("email_outcome")
///     .email_ends_with("@example.com")
///     .widget(TextInputSpec::new("Email").placeholder("you@example.com"));
/// ```
#[derive(Debug, Clone)]
pub struct EmailInputOptions {
    /// Header to seed the widget from
    pub header_key: Option<OptionValue>,
    /// Session key the widget is bound to
    pub session_key: Option<SessionKey>,
    /// Session key receiving the [`InputOutcome`]
    pub output_session_key: Option<SessionKey>,
    /// Whether to validate the rendered value
    pub validate_email: bool,
    /// Suffix the rendered value must end with
    pub email_ends_with: Option<OptionValue>,
    /// Display options passed through to the render primitive
    pub widget: TextInputSpec,
}

impl Default for EmailInputOptions {
    fn default() -> Self {
        Self {
            header_key: Some(OptionValue::from(DEFAULT_EMAIL_HEADER)),
            session_key: None,
            output_session_key: None,
            validate_email: true,
            email_ends_with: None,
            widget: TextInputSpec::default(),
        }
    }
}

impl EmailInputOptions {
    /// Creates options reading `X-Email` with validation enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header to seed the widget from.
    pub fn header_key(mut self, key: impl Into<OptionValue>) -> Self {
        self.header_key = Some(key.into());
        self
    }

    /// Binds the widget to a session key.
    pub fn session_key(mut self, key: impl Into<SessionKey>) -> Self {
        self.session_key = Some(key.into());
        self
    }

    /// Records each outcome under `key`.
    pub fn output_session_key(mut self, key: impl Into<SessionKey>) -> Self {
        self.output_session_key = Some(key.into());
        self
    }

    /// Enables or disables validation of the rendered value.
    pub fn validate_email(mut self, validate: bool) -> Self {
        self.validate_email = validate;
        self
    }

    /// Requires the rendered value to end with `suffix`.
    pub fn email_ends_with(mut self, suffix: impl Into<OptionValue>) -> Self {
        self.email_ends_with = Some(suffix.into());
        self
    }

    /// Sets the display options for the render primitive.
    pub fn widget(mut self, widget: TextInputSpec) -> Self {
        self.widget = widget;
        self
    }
}

/// Renders a session-bound email input and returns its current value.
///
/// The starting value is the session entry under the widget key if there is
/// one, otherwise the email read from the request header, otherwise the
/// empty string. The rendered value is bound back under the widget key when
/// it is shaped like an email and the key is cleared when it is not. The
/// value is then validated and recorded as configured.
///
/// # Examples
///
/// ```
/// use header_email::web::RequestHeaders;
/// use header_email::{email_input, EmailInputOptions, MemorySession, TextInputSpec};
///
/// let headers: RequestHeaders = [("X-Email", "jane@example.com")].into_iter().collect();
/// let mut session = MemorySession::new();
/// let mut page = |spec: &TextInputSpec| spec.value.clone();
///
/// let email = email_input(
///     &headers,
///     &mut session,
///     &mut page,
///     &EmailInputOptions::new().session_key("email"),
/// );
/// assert_eq!(email, "jane@example.com");
/// ```
pub fn email_input<H, S>(
    headers: &H,
    session: &mut S,
    container: &mut dyn TextInput,
    options: &EmailInputOptions,
) -> String
where
    H: HeaderSource + ?Sized,
    S: SessionStore + ?Sized,
{
    email_input_outcome(headers, session, container, options).email
}

/// Same as [`email_input`], returning the full [`InputOutcome`].
pub fn email_input_outcome<H, S>(
    headers: &H,
    session: &mut S,
    container: &mut dyn TextInput,
    options: &EmailInputOptions,
) -> InputOutcome
where
    H: HeaderSource + ?Sized,
    S: SessionStore + ?Sized,
{
    let request_id = headers.request_id().unwrap_or("-");
    let seed = starting_value(headers, session, options);

    let mut spec = options.widget.clone();
    spec.value = seed;
    spec.key = options.session_key.clone();
    let email = container.text_input(&spec);

    if let Some(key) = &options.session_key {
        if is_email_shaped(&email) {
            session.set(key.clone(), SessionValue::from(email.as_str()));
        } else {
            session.remove(key);
        }
    }

    let mut outcome = InputOutcome {
        email,
        ..InputOutcome::default()
    };
    if options.validate_email {
        let validation = validate_email(&outcome.email, options.email_ends_with.as_ref());
        outcome.status = InputStatus::from(validation.status);
        outcome.message = validation.message;
    }

    tracing::debug!(
        request_id,
        email = %MaskedEmail(&outcome.email),
        status = %outcome.status,
        "rendered email input"
    );

    if let Some(key) = &options.output_session_key {
        session.set(key.clone(), SessionValue::from(outcome.clone()));
    }

    outcome
}

fn starting_value<H, S>(headers: &H, session: &mut S, options: &EmailInputOptions) -> String
where
    H: HeaderSource + ?Sized,
    S: SessionStore + ?Sized,
{
    let request_id = headers.request_id().unwrap_or("-");

    if let Some(existing) = options
        .session_key
        .as_ref()
        .and_then(|key| session.get_text(key))
    {
        tracing::debug!(request_id, "starting from session value");
        return existing.to_string();
    }

    // Extraction must not write the widget key, so it runs without one.
    let extract_options = ExtractOptions {
        header_key: options.header_key.clone(),
        session_key: None,
        fallback_email: None,
    };
    let extraction = extract_email(headers, session, &extract_options);

    if extraction.is_success() {
        tracing::debug!(request_id, "starting from request header");
        return extraction.email;
    }

    // Empty rather than the sentinel so the placeholder shows.
    tracing::debug!(request_id, status = %extraction.status, "starting empty");
    String::new()
}
