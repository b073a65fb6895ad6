use header_email::config::EmailInputConfig;
use header_email::web::RequestHeaders;
use header_email::{
    email_input_outcome, extract_email, ExtractStatus, InputStatus, MaskedEmail, MemorySession,
    SessionStore, TextInputSpec, EMAIL_UNDEFINED,
};

fn echo(spec: &TextInputSpec) -> String {
    spec.value.clone()
}

#[test]
fn configured_flow_end_to_end() {
    let options = EmailInputConfig::from_toml_str(
        r#"
        header_key = "X-Auth-Request-Email"
        session_key = "email"
        output_session_key = "email_outcome"
        email_ends_with = "@corp.io"
        label = "Email"
        "#,
    )
    .expect("valid config")
    .into_options();

    let headers: RequestHeaders = [("x-auth-request-email", "ops@corp.io")]
        .into_iter()
        .collect();
    let mut session = MemorySession::new();
    let mut page = echo;

    let outcome = email_input_outcome(&headers, &mut session, &mut page, &options);

    assert_eq!(outcome.email, "ops@corp.io");
    assert_eq!(outcome.status, InputStatus::Success);
    assert!(session.contains(&"email_outcome".into()));
}

#[test]
fn non_string_header_key_from_config_is_reported() {
    let config = EmailInputConfig::from_toml_str("header_key = 42\nsession_key = \"email\"\n")
        .expect("loose values parse");
    let extract_options = config.extract_options();
    let options = config.into_options();
    let headers: RequestHeaders = [("X-Email", "a@b.com")].into_iter().collect();
    let mut session = MemorySession::new();

    let extraction = extract_email(&headers, &mut session, &extract_options);
    assert_eq!(extraction.status, ExtractStatus::HeaderKeyNotString);
    assert_eq!(extraction.email, EMAIL_UNDEFINED);

    let mut page = echo;
    let outcome = email_input_outcome(&headers, &mut session, &mut page, &options);
    assert_eq!(outcome.email, "");
    assert_eq!(outcome.status, InputStatus::FailNotValidEmail);
}

#[test]
fn non_string_suffix_from_config_fails_generically() {
    let options = EmailInputConfig::from_toml_str("email_ends_with = [\"corp.io\"]\n")
        .expect("loose values parse")
        .into_options();
    let headers: RequestHeaders = [("X-Email", "a@corp.io")].into_iter().collect();
    let mut session = MemorySession::new();
    let mut page = echo;

    let outcome = email_input_outcome(&headers, &mut session, &mut page, &options);

    assert_eq!(outcome.email, "a@corp.io");
    assert_eq!(outcome.status, InputStatus::Fail);
}

#[test]
fn configured_fallback_feeds_extractor_not_widget() {
    let config = EmailInputConfig::from_toml_str(
        "session_key = \"email\"\nfallback_email = \"guest@corp.io\"\n",
    )
    .expect("valid config");
    let headers = RequestHeaders::new();

    let mut session = MemorySession::new();
    let extraction = extract_email(&headers, &mut session, &config.extract_options());
    assert_eq!(extraction.status, ExtractStatus::NoEmailHeaderInRequest);
    assert_eq!(extraction.email, "guest@corp.io");
    assert_eq!(session.get_text(&"email".into()), Some("guest@corp.io"));

    let mut fresh = MemorySession::new();
    let mut page = echo;
    let outcome = email_input_outcome(&headers, &mut fresh, &mut page, &config.into_options());
    assert_eq!(outcome.email, "");
    assert!(!fresh.contains(&"email".into()));
}

#[test]
fn masked_email_hides_identity() {
    let masked = MaskedEmail("jane.doe@corp.io").to_string();
    assert_eq!(masked, "j***@corp.io");
    assert!(!masked.contains("jane.doe"));
}
