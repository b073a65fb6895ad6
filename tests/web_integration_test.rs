//! Integration tests for the web boundary.
//!
//! These tests demonstrate the complete flow from a framework-specific
//! request, through header extraction, to the session-bound input widget.

use std::collections::HashMap;

use header_email::web::{HeaderSource, RequestHeaders};
use header_email::{
    email_input, email_input_outcome, extract_email, EmailInputOptions, ExtractOptions,
    ExtractStatus, InputStatus, MemorySession, SessionKey, SessionStore, SessionValue, TextInput,
    TextInputSpec,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A framework request type with its own header representation.
struct FrameworkRequest {
    id: u64,
    raw_headers: Vec<(String, String)>,
}

impl FrameworkRequest {
    fn to_headers(&self) -> RequestHeaders {
        let headers: RequestHeaders = self.raw_headers.iter().cloned().collect();
        headers.with_request_id(format!("req-{}", self.id))
    }
}

/// A page that keeps every rendered widget value, like a browser form would.
#[derive(Default)]
struct Page {
    typed: HashMap<SessionKey, String>,
    renders: usize,
}

impl TextInput for Page {
    fn text_input(&mut self, spec: &TextInputSpec) -> String {
        self.renders += 1;
        spec.key
            .as_ref()
            .and_then(|key| self.typed.get(key).cloned())
            .unwrap_or_else(|| spec.value.clone())
    }
}

#[test]
fn proxy_header_flows_into_widget() {
    init_tracing();

    let request = FrameworkRequest {
        id: 1,
        raw_headers: vec![
            ("host".to_string(), "app.internal".to_string()),
            ("x-email".to_string(), "jane@corp.io".to_string()),
        ],
    };
    let headers = request.to_headers();
    assert_eq!(headers.request_id(), Some("req-1"));

    let mut session = MemorySession::new();
    let mut page = Page::default();
    let options = EmailInputOptions::new()
        .session_key("email")
        .output_session_key("email_outcome")
        .email_ends_with("@corp.io")
        .widget(TextInputSpec::new("Email").placeholder("you@corp.io"));

    let email = email_input(&headers, &mut session, &mut page, &options);

    assert_eq!(email, "jane@corp.io");
    assert_eq!(page.renders, 1);
    let outcome = session
        .get(&"email_outcome".into())
        .and_then(SessionValue::as_outcome)
        .expect("outcome recorded");
    assert_eq!(outcome.status, InputStatus::Success);
    assert_eq!(outcome.message, "Success.");
}

#[test]
fn user_edit_survives_later_requests() {
    init_tracing();

    let mut session = MemorySession::new();
    let mut page = Page::default();
    let options = EmailInputOptions::new().session_key("email");
    let headers: RequestHeaders = [("X-Email", "header@corp.io")].into_iter().collect();

    // First render seeds from the header.
    assert_eq!(
        email_input(&headers, &mut session, &mut page, &options),
        "header@corp.io"
    );

    // The user types a different address.
    page.typed
        .insert(SessionKey::from("email"), "typed@corp.io".to_string());
    assert_eq!(
        email_input(&headers, &mut session, &mut page, &options),
        "typed@corp.io"
    );

    // A later request without any header keeps the typed value.
    page.typed.clear();
    let bare = RequestHeaders::new();
    assert_eq!(
        email_input(&bare, &mut session, &mut page, &options),
        "typed@corp.io"
    );
}

#[test]
fn invalid_user_input_is_returned_but_flagged() {
    let mut session = MemorySession::new();
    let mut page = Page::default();
    page.typed
        .insert(SessionKey::from("email"), "not-an-email".to_string());
    let options = EmailInputOptions::new()
        .session_key("email")
        .output_session_key("outcome");

    let outcome = email_input_outcome(
        &RequestHeaders::new(),
        &mut session,
        &mut page,
        &options,
    );

    assert_eq!(outcome.email, "not-an-email");
    assert_eq!(outcome.status, InputStatus::FailNotValidEmail);
    assert!(!session.contains(&"email".into()));
    assert!(session.contains(&"outcome".into()));
}

#[test]
fn extraction_and_widget_keys_are_independent() {
    let headers: RequestHeaders = [("X-Email", "x@y.com")].into_iter().collect();
    let mut session = MemorySession::new();

    let extraction = extract_email(&headers, &mut session, &ExtractOptions::default());
    assert_eq!(extraction.status, ExtractStatus::Success);
    assert_eq!(session.get_text(&"user_email".into()), Some("x@y.com"));

    let mut page = Page::default();
    let options = EmailInputOptions::new().session_key("widget_email");
    email_input(&headers, &mut session, &mut page, &options);

    assert_eq!(session.len(), 2);
    assert_eq!(session.get_text(&"widget_email".into()), Some("x@y.com"));
}

#[test]
fn exact_match_header_maps_are_supported() {
    let mut headers = HashMap::new();
    headers.insert("X-Email".to_string(), "x@y.com".to_string());
    let mut session = MemorySession::new();

    let exact = extract_email(&headers, &mut session, &ExtractOptions::default());
    assert!(exact.is_success());

    let wrong_case = extract_email(
        &headers,
        &mut session,
        &ExtractOptions::new().header_key("x-email"),
    );
    assert_eq!(wrong_case.status, ExtractStatus::NoEmailHeaderInRequest);
    assert!(!session.contains(&"user_email".into()));
}
