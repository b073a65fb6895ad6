//! Email extraction from HTTP request headers with session-bound input.
//!
//! Reverse proxies and identity-aware gateways often forward the
//! authenticated user's address in a request header. This crate provides:
//! - **Extraction**: reading that header into a session store, with cleanup
//!   and fallback handling when it is missing
//! - **Validation**: a syntactic email shape check with an optional required
//!   suffix (for example a corporate domain)
//! - **Session-bound input**: seeding a text-input widget from the session or
//!   the header, then validating whatever the widget holds
//!
//! Failures are reported through closed status enums, never panics. The UI
//! toolkit, the request and the session are all reached through traits
//! ([`TextInput`], [`web::HeaderSource`], [`SessionStore`]).
//!
//! # Core Types
//!
//! - [`extract_email`] / [`Extraction`]: header to session
//! - [`validate_email`] / [`Validation`]: shape and suffix checks
//! - [`email_input`] / [`InputOutcome`]: the full widget flow
//! - [`MemorySession`]: in-memory [`SessionStore`]
//! - [`MaskedEmail`]: log-safe formatting of addresses
//!
//! # Examples
//!
//! ```
//! use header_email::web::RequestHeaders;
//! use header_email::{
//!     email_input_outcome, EmailInputOptions, InputStatus, MemorySession, TextInputSpec,
//! };
//!
//! let headers: RequestHeaders = [("X-Email", "jane@corp.io")].into_iter().collect();
//! let mut session = MemorySession::new();
//! let mut page = |spec: &TextInputSpec| spec.value.clone();
//!
//! let options = EmailInputOptions::new()
//!     .session_key("email")
//!     .email_ends_with("@corp.io");
//!
//! let outcome = email_input_outcome(&headers, &mut session, &mut page, &options);
//! assert_eq!(outcome.email, "jane@corp.io");
//! assert_eq!(outcome.status, InputStatus::Success);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
mod error;
mod extract;
mod input;
mod logging;
mod session;
mod validate;
mod value;
pub mod web;
mod widget;

pub use error::{Error, Result};
pub use extract::{
    extract_email, ExtractOptions, ExtractStatus, Extraction, DEFAULT_EMAIL_HEADER,
    DEFAULT_SESSION_KEY, EMAIL_UNDEFINED,
};
pub use input::{email_input, email_input_outcome, EmailInputOptions, InputOutcome, InputStatus};
pub use logging::MaskedEmail;
pub use session::{MemorySession, SessionKey, SessionStore, SessionValue};
pub use validate::{
    is_email_shaped, validate_email, validate_email_suffix, Validation, ValidationStatus,
    EMAIL_PATTERN,
};
pub use value::OptionValue;
pub use widget::{ChangeCallback, InputType, LabelVisibility, TextInput, TextInputSpec};
