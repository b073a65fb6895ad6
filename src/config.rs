//! TOML configuration for the email input helper.
//!
//! Hosts that keep their widget options in a file load them here and get an
//! [`EmailInputOptions`] back, or [`ExtractOptions`] for plain extraction. Header keys, fallbacks and suffixes are read
//! as loosely typed values, so a mistyped entry surfaces later as an
//! extraction or validation status instead of a parse error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::extract::{ExtractOptions, DEFAULT_EMAIL_HEADER};
use crate::input::EmailInputOptions;
use crate::session::SessionKey;
use crate::value::OptionValue;
use crate::widget::{InputType, LabelVisibility, TextInputSpec};

/// Email input options as written in a configuration file.
///
/// Every field is optional. Missing fields take the same defaults as
/// [`EmailInputOptions::new`].
///
/// # Examples
///
/// ```
/// use header_email::config::EmailInputConfig;
///
/// let config = EmailInputConfig::from_toml_str(r#"
///     header_key = "X-Auth-Request-Email"
///     session_key = "email"
///     email_ends_with = "@example.com"
///     label = "Email"
/// "#).expect("valid config");
///
/// let options = config.into_options();
/// assert_eq!(options.widget.label, "Email");
/// assert!(options.validate_email);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmailInputConfig {
    /// Header to seed the widget from
    pub header_key: Option<OptionValue>,
    /// Session key the widget is bound to
    pub session_key: Option<SessionKey>,
    /// Session key receiving the outcome
    pub output_session_key: Option<SessionKey>,
    /// Email the extractor stores when the header cannot be read
    pub fallback_email: Option<OptionValue>,
    /// Whether to validate the rendered value (default `true`)
    pub validate_email: Option<bool>,
    /// Suffix the rendered value must end with
    pub email_ends_with: Option<OptionValue>,
    /// Widget label
    pub label: Option<String>,
    /// Widget placeholder
    pub placeholder: Option<String>,
    /// Widget help text
    pub help: Option<String>,
    /// Browser autocomplete hint
    pub autocomplete: Option<String>,
    /// Maximum number of characters
    pub max_chars: Option<usize>,
    /// Plain or masked display
    pub input_type: Option<InputType>,
    /// Label display mode
    pub label_visibility: Option<LabelVisibility>,
    /// Whether the widget is read-only
    pub disabled: Option<bool>,
}

impl EmailInputConfig {
    /// Parses a configuration document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|source| Error::Parse { source })?;
        config.check()?;
        Ok(config)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading email input config");
        Self::from_toml_str(&contents)
    }

    /// Extraction options sharing this file's header and session keys.
    ///
    /// The fallback email only applies here; the input helper always starts
    /// from an empty widget when extraction fails.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            header_key: Some(
                self.header_key
                    .clone()
                    .unwrap_or_else(|| OptionValue::from(DEFAULT_EMAIL_HEADER)),
            ),
            session_key: self.session_key.clone(),
            fallback_email: self.fallback_email.clone(),
        }
    }

    /// Converts the file representation into runtime options.
    pub fn into_options(self) -> EmailInputOptions {
        let mut widget = TextInputSpec::new(self.label.unwrap_or_default());
        widget.placeholder = self.placeholder;
        widget.help = self.help;
        widget.autocomplete = self.autocomplete;
        widget.max_chars = self.max_chars;
        widget.input_type = self.input_type.unwrap_or_default();
        widget.label_visibility = self.label_visibility.unwrap_or_default();
        widget.disabled = self.disabled.unwrap_or(false);

        EmailInputOptions {
            header_key: Some(
                self.header_key
                    .unwrap_or_else(|| OptionValue::from(DEFAULT_EMAIL_HEADER)),
            ),
            session_key: self.session_key,
            output_session_key: self.output_session_key,
            validate_email: self.validate_email.unwrap_or(true),
            email_ends_with: self.email_ends_with,
            widget,
        }
    }

    fn check(&self) -> Result<()> {
        if is_empty_key(self.session_key.as_ref()) {
            return Err(Error::InvalidSessionKey("session_key"));
        }
        if is_empty_key(self.output_session_key.as_ref()) {
            return Err(Error::InvalidSessionKey("output_session_key"));
        }
        Ok(())
    }
}

fn is_empty_key(key: Option<&SessionKey>) -> bool {
    key.and_then(SessionKey::as_name).is_some_and(str::is_empty)
}
