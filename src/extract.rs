//! Email extraction from request headers.

use std::fmt;

use crate::logging::MaskedEmail;
use crate::session::{SessionKey, SessionStore, SessionValue};
use crate::value::OptionValue;
use crate::web::HeaderSource;

/// Header the extractor reads unless configured otherwise.
pub const DEFAULT_EMAIL_HEADER: &str = "X-Email";

/// Session key the extractor writes unless configured otherwise.
pub const DEFAULT_SESSION_KEY: &str = "user_email";

/// Email reported when no header value or fallback is available.
pub const EMAIL_UNDEFINED: &str = "undefined";

const REMARK_FALLBACK_NOT_SET: &str = "Unable to set default email on failure.";

/// Outcome of extracting an email from the request headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractStatus {
    /// No extraction has been performed.
    Undefined,
    /// The header was found and its value stored.
    Success,
    /// Extraction failed for an unspecified reason.
    FailureUnspecified,
    /// The request carries no header with the configured name.
    NoEmailHeaderInRequest,
    /// No header key was configured.
    HeaderKeyIsNone,
    /// The configured header key is not a string.
    HeaderKeyNotString,
}

impl ExtractStatus {
    /// Stable numeric code for this status.
    pub fn code(self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Success => 1,
            Self::FailureUnspecified => 2,
            Self::NoEmailHeaderInRequest => 3,
            Self::HeaderKeyIsNone => 4,
            Self::HeaderKeyNotString => 5,
        }
    }

    /// Fixed human-readable remark for this status.
    pub fn remark(self) -> &'static str {
        match self {
            Self::Undefined => "",
            Self::Success => "Success.",
            Self::FailureUnspecified => "Unspecified failure.",
            Self::NoEmailHeaderInRequest => "No email header in the Request.",
            Self::HeaderKeyIsNone => "The given email header key to search for is absent.",
            Self::HeaderKeyNotString => "The given email header key to search for is not a string.",
        }
    }

    /// Returns `true` for [`ExtractStatus::Success`].
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for ExtractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Success => write!(f, "success"),
            Self::FailureUnspecified => write!(f, "unspecified failure"),
            Self::NoEmailHeaderInRequest => write!(f, "no email header in request"),
            Self::HeaderKeyIsNone => write!(f, "header key is none"),
            Self::HeaderKeyNotString => write!(f, "header key not a string"),
        }
    }
}

/// Status, message and email produced by [`extract_email`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// What the extractor concluded
    pub status: ExtractStatus,
    /// Diagnostic message
    pub message: String,
    /// Raw header value, the fallback email, or [`EMAIL_UNDEFINED`]
    pub email: String,
}

impl Extraction {
    fn new(status: ExtractStatus, email: impl Into<String>) -> Self {
        Self {
            status,
            message: status.remark().to_string(),
            email: email.into(),
        }
    }

    /// Returns `true` if the header was found.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Options controlling [`extract_email`].
///
/// The header key and fallback are [`OptionValue`]s so that options loaded
/// from untyped sources can be passed through unchanged; a missing or
/// non-string header key is reported as a status rather than rejected up
/// front.
///
/// # Examples
///
/// ```
/// use header_email::ExtractOptions;
///
/// let options = ExtractOptions::new()
///     .header_key("X-Forwarded-Email")
///     .session_key("email")
///     .fallback_email("guest@example.com");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Header to read
    pub header_key: Option<OptionValue>,
    /// Session entry to write; `None` persists nothing
    pub session_key: Option<SessionKey>,
    /// Email to report and store when extraction fails
    pub fallback_email: Option<OptionValue>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            header_key: Some(OptionValue::from(DEFAULT_EMAIL_HEADER)),
            session_key: Some(SessionKey::from(DEFAULT_SESSION_KEY)),
            fallback_email: None,
        }
    }
}

impl ExtractOptions {
    /// Creates options reading `X-Email` into the `user_email` session key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header to read.
    pub fn header_key(mut self, key: impl Into<OptionValue>) -> Self {
        self.header_key = Some(key.into());
        self
    }

    /// Clears the header key.
    pub fn without_header_key(mut self) -> Self {
        self.header_key = None;
        self
    }

    /// Sets the session entry to write.
    pub fn session_key(mut self, key: impl Into<SessionKey>) -> Self {
        self.session_key = Some(key.into());
        self
    }

    /// Disables all session writes: lookup only.
    pub fn without_session_key(mut self) -> Self {
        self.session_key = None;
        self
    }

    /// Sets the email used when extraction fails.
    pub fn fallback_email(mut self, email: impl Into<OptionValue>) -> Self {
        self.fallback_email = Some(email.into());
        self
    }
}

/// Reads the configured header and records it in the session.
///
/// On success the raw header value is stored under the session key and
/// returned. On any failure the session key is cleared first; a string
/// fallback is then stored and returned in place of [`EMAIL_UNDEFINED`].
/// With no session key configured, nothing is written or removed.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use header_email::{extract_email, ExtractOptions, ExtractStatus, MemorySession, SessionStore};
///
/// let headers: HashMap<String, String> =
///     [("X-Email".to_string(), "x@y.com".to_string())].into();
/// let mut session = MemorySession::new();
///
/// let extraction = extract_email(&headers, &mut session, &ExtractOptions::default());
///
/// assert_eq!(extraction.status, ExtractStatus::Success);
/// assert_eq!(extraction.email, "x@y.com");
/// assert_eq!(session.get_text(&"user_email".into()), Some("x@y.com"));
/// ```
pub fn extract_email<H, S>(headers: &H, session: &mut S, options: &ExtractOptions) -> Extraction
where
    H: HeaderSource + ?Sized,
    S: SessionStore + ?Sized,
{
    let request_id = headers.request_id().unwrap_or("-");

    let mut extraction = match &options.header_key {
        None => Extraction::new(ExtractStatus::HeaderKeyIsNone, EMAIL_UNDEFINED),
        Some(OptionValue::Other(_)) => {
            Extraction::new(ExtractStatus::HeaderKeyNotString, EMAIL_UNDEFINED)
        }
        Some(OptionValue::Text(name)) => match headers.header(name) {
            Some(email) => {
                if let Some(key) = &options.session_key {
                    session.set(key.clone(), SessionValue::from(email));
                }
                tracing::debug!(
                    request_id,
                    header = %name,
                    email = %MaskedEmail(email),
                    "extracted email from request header"
                );
                Extraction::new(ExtractStatus::Success, email)
            }
            None => Extraction::new(ExtractStatus::NoEmailHeaderInRequest, EMAIL_UNDEFINED),
        },
    };

    if !extraction.is_success() {
        tracing::warn!(
            request_id,
            status = %extraction.status,
            "email extraction failed"
        );
        apply_failure(&mut extraction, session, options, request_id);
    }

    extraction
}

fn apply_failure<S>(
    extraction: &mut Extraction,
    session: &mut S,
    options: &ExtractOptions,
    request_id: &str,
) where
    S: SessionStore + ?Sized,
{
    // Never leave a stale value from an earlier request behind.
    if let Some(key) = &options.session_key {
        session.remove(key);
    }

    match &options.fallback_email {
        None => {}
        Some(OptionValue::Text(fallback)) => {
            extraction.email = fallback.clone();
            if let Some(key) = &options.session_key {
                session.set(key.clone(), SessionValue::from(fallback.as_str()));
            }
            tracing::debug!(
                request_id,
                email = %MaskedEmail(fallback),
                "applied fallback email"
            );
        }
        Some(other) => {
            extraction.message.push(' ');
            extraction.message.push_str(REMARK_FALLBACK_NOT_SET);
            tracing::warn!(
                request_id,
                fallback_type = other.type_name(),
                "fallback email is not a string"
            );
        }
    }
}
