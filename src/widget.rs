//! Text-input render primitive boundary.
//!
//! The concrete UI toolkit is not part of this crate. All the email input
//! helper needs is "render a text box seeded with a string, return the string
//! currently held by it", which is [`TextInput`]. Everything else here is the
//! configuration bundle passed through to the toolkit untouched.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::session::SessionKey;
use crate::value::OptionValue;

/// How the text box displays its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Plain text
    #[default]
    Default,
    /// Masked characters
    Password,
}

/// How the widget label is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelVisibility {
    /// Label shown above the box
    #[default]
    Visible,
    /// Label space kept but text hidden
    Hidden,
    /// Label removed entirely
    Collapsed,
}

type ChangeHandler = dyn Fn(&[OptionValue], &BTreeMap<String, OptionValue>) + Send + Sync;

/// Callback invoked by the toolkit when the widget value changes.
///
/// Positional and keyword arguments are stored with the callback and handed
/// back verbatim on every invocation.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use header_email::ChangeCallback;
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let callback = ChangeCallback::new(move |args, _kwargs| {
///     counter.fetch_add(args.len(), Ordering::SeqCst);
/// })
/// .with_arg("email-field");
///
/// callback.invoke();
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone)]
pub struct ChangeCallback {
    handler: Arc<ChangeHandler>,
    args: Vec<OptionValue>,
    kwargs: BTreeMap<String, OptionValue>,
}

impl ChangeCallback {
    /// Wraps a change handler with no arguments.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&[OptionValue], &BTreeMap<String, OptionValue>) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            args: Vec::new(),
            kwargs: BTreeMap::new(),
        }
    }

    /// Appends a positional argument.
    pub fn with_arg(mut self, arg: impl Into<OptionValue>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds a keyword argument.
    pub fn with_kwarg(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.kwargs.insert(name.into(), value.into());
        self
    }

    /// Positional arguments passed to the handler.
    pub fn args(&self) -> &[OptionValue] {
        &self.args
    }

    /// Keyword arguments passed to the handler.
    pub fn kwargs(&self) -> &BTreeMap<String, OptionValue> {
        &self.kwargs
    }

    /// Calls the handler with the stored arguments.
    pub fn invoke(&self) {
        (self.handler)(&self.args, &self.kwargs);
    }
}

impl fmt::Debug for ChangeCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeCallback")
            .field("args", &self.args)
            .field("kwargs", &self.kwargs)
            .finish_non_exhaustive()
    }
}

/// Configuration bundle for one text-input render.
///
/// The email input helper fills in [`value`](Self::value) and
/// [`key`](Self::key); every other field is passed through as configured.
#[derive(Debug, Clone, Default)]
pub struct TextInputSpec {
    /// Label shown with the box
    pub label: String,
    /// Initial content of the box
    pub value: String,
    /// Maximum number of characters accepted
    pub max_chars: Option<usize>,
    /// Session key the widget is bound to
    pub key: Option<SessionKey>,
    /// Plain or masked display
    pub input_type: InputType,
    /// Tooltip help text
    pub help: Option<String>,
    /// Browser autocomplete hint
    pub autocomplete: Option<String>,
    /// Change callback and its arguments
    pub on_change: Option<ChangeCallback>,
    /// Text shown while the box is empty
    pub placeholder: Option<String>,
    /// Whether the box is read-only
    pub disabled: bool,
    /// Label display mode
    pub label_visibility: LabelVisibility,
}

impl TextInputSpec {
    /// Creates a spec with the given label and defaults elsewhere.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the help text.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Sets the autocomplete hint.
    pub fn autocomplete(mut self, hint: impl Into<String>) -> Self {
        self.autocomplete = Some(hint.into());
        self
    }

    /// Limits the number of characters.
    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    /// Sets plain or masked display.
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Sets the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the label display mode.
    pub fn label_visibility(mut self, visibility: LabelVisibility) -> Self {
        self.label_visibility = visibility;
        self
    }

    /// Sets the change callback.
    pub fn on_change(mut self, callback: ChangeCallback) -> Self {
        self.on_change = Some(callback);
        self
    }
}

/// The external text-input render primitive.
///
/// Implementations render a single-line text box described by `spec` and
/// return the string it currently holds. A page, sidebar or any other
/// container is simply another implementor.
///
/// Closures taking a `&TextInputSpec` implement this trait, which keeps test
/// doubles short:
///
/// ```
/// use header_email::{TextInput, TextInputSpec};
///
/// let mut echo = |spec: &TextInputSpec| spec.value.clone();
/// let spec = TextInputSpec {
///     value: "seed".to_string(),
///     ..TextInputSpec::new("Email")
/// };
/// assert_eq!(echo.text_input(&spec), "seed");
/// ```
pub trait TextInput {
    /// Renders the text box and returns its current value.
    fn text_input(&mut self, spec: &TextInputSpec) -> String;
}

impl<F> TextInput for F
where
    F: FnMut(&TextInputSpec) -> String,
{
    fn text_input(&mut self, spec: &TextInputSpec) -> String {
        self(spec)
    }
}
