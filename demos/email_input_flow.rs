//! Email input flow demonstration.
//!
//! This example shows how a web host wires the crate into its request loop:
//! 1. Copy request headers into a header source
//! 2. Render the session-bound email input
//! 3. Read the recorded outcome back from the session
//!
//! Run with: `cargo run --example email_input_flow`

use header_email::web::RequestHeaders;
use header_email::{
    email_input, EmailInputOptions, MemorySession, SessionStore, SessionValue, TextInputSpec,
};

/// Simulates a terminal "widget" that shows the seeded value and keeps it.
fn render(spec: &TextInputSpec) -> String {
    let shown = if spec.value.is_empty() {
        spec.placeholder.as_deref().unwrap_or("")
    } else {
        spec.value.as_str()
    };
    println!("   [{}: {}]", spec.label, shown);
    spec.value.clone()
}

fn handle_request(
    request_id: &str,
    email_header: Option<&str>,
    session: &mut MemorySession,
    options: &EmailInputOptions,
) {
    println!("\n=== Processing {} ===", request_id);

    let mut headers = RequestHeaders::new().with_request_id(request_id);
    if let Some(email) = email_header {
        headers.add_header("X-Email", email);
    }

    let mut page = render;
    let email = email_input(&headers, session, &mut page, options);
    println!("   Widget value: {:?}", email);

    if let Some(outcome) = session
        .get(&"email_outcome".into())
        .and_then(SessionValue::as_outcome)
    {
        println!("   Outcome: {} ({})", outcome.status, outcome.message);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let options = EmailInputOptions::new()
        .session_key("email")
        .output_session_key("email_outcome")
        .email_ends_with("@corp.io")
        .widget(TextInputSpec::new("Email").placeholder("you@corp.io"));

    // Scenario 1: proxy forwards a corporate address
    let mut session = MemorySession::new();
    handle_request("req-1", Some("jane@corp.io"), &mut session, &options);

    // Scenario 2: same session, header gone; the session value is reused
    handle_request("req-2", None, &mut session, &options);

    // Scenario 3: fresh session with an address outside the required domain
    let mut session = MemorySession::new();
    handle_request("req-3", Some("jane@gmail.com"), &mut session, &options);

    // Scenario 4: fresh session with no header at all
    let mut session = MemorySession::new();
    handle_request("req-4", None, &mut session, &options);
}
