use super::*;

// =============================================================
// ProviderError
// =============================================================

#[test]
fn provider_error_displays_message_verbatim() {
    let err = ProviderError::with_message("Firebase: Error (auth/email-already-in-use).");
    assert_eq!(err.to_string(), "Firebase: Error (auth/email-already-in-use).");
    assert_eq!(err.message(), Some("Firebase: Error (auth/email-already-in-use)."));
}

#[test]
fn provider_error_without_message_uses_fallback() {
    let err = ProviderError::unknown();
    assert_eq!(err.message(), None);
    assert_eq!(err.to_string(), UNKNOWN_ERROR_MESSAGE);
}

#[test]
fn provider_error_blank_message_counts_as_missing() {
    assert_eq!(ProviderError::with_message("   "), ProviderError::unknown());
}

// =============================================================
// describe_provider_code
// =============================================================

#[test]
fn describe_known_code_without_detail() {
    assert_eq!(describe_provider_code("EMAIL_EXISTS"), "Firebase: Error (auth/email-already-in-use).");
    assert_eq!(describe_provider_code("INVALID_EMAIL"), "Firebase: Error (auth/invalid-email).");
    assert_eq!(
        describe_provider_code("TOO_MANY_ATTEMPTS_TRY_LATER"),
        "Firebase: Error (auth/too-many-requests)."
    );
}

#[test]
fn describe_code_with_detail_keeps_detail_text() {
    assert_eq!(
        describe_provider_code("WEAK_PASSWORD : Password should be at least 6 characters"),
        "Firebase: Password should be at least 6 characters (auth/weak-password)."
    );
}

#[test]
fn describe_unrecognized_code_maps_to_internal_error() {
    assert_eq!(describe_provider_code("SOMETHING_NEW"), "Firebase: Error (auth/internal-error).");
}

#[test]
fn describe_api_key_aliases_share_code() {
    assert_eq!(describe_provider_code("API_KEY_INVALID"), describe_provider_code("INVALID_API_KEY"));
}

// =============================================================
// error_from_body
// =============================================================

#[test]
fn error_from_body_reads_nested_message() {
    let body = r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[{"message":"EMAIL_EXISTS","domain":"global","reason":"invalid"}]}}"#;
    assert_eq!(
        error_from_body(body).message(),
        Some("Firebase: Error (auth/email-already-in-use).")
    );
}

#[test]
fn error_from_body_without_message_is_unknown() {
    assert_eq!(error_from_body(r#"{"error":{"code":500}}"#), ProviderError::unknown());
}

#[test]
fn error_from_body_garbage_is_unknown() {
    assert_eq!(error_from_body("<html>bad gateway</html>"), ProviderError::unknown());
    assert_eq!(error_from_body(""), ProviderError::unknown());
}

#[test]
fn network_failure_uses_sdk_wording() {
    assert_eq!(network_failure().to_string(), "Firebase: Error (auth/network-request-failed).");
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn sign_up_request_serializes_camel_case() {
    let body = SignUpRequest { email: "a@b.com", password: "hunter22", return_secure_token: true };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "email": "a@b.com", "password": "hunter22", "returnSecureToken": true })
    );
}

#[test]
fn created_account_reads_provider_fields() {
    let body = r#"{"kind":"identitytoolkit#SignupNewUserResponse","idToken":"tok","email":"a@b.com","refreshToken":"ref","expiresIn":"3600","localId":"uid-1"}"#;
    let account: CreatedAccount = serde_json::from_str(body).unwrap();
    assert_eq!(account.uid, "uid-1");
    assert_eq!(account.email, "a@b.com");
    assert_eq!(account.id_token, "tok");
    assert_eq!(account.refresh_token, "ref");
}

#[test]
fn created_account_debug_hides_tokens() {
    let account = CreatedAccount {
        uid: "uid-1".to_owned(),
        email: "a@b.com".to_owned(),
        id_token: "secret-token".to_owned(),
        refresh_token: "secret-refresh".to_owned(),
    };
    let rendered = format!("{account:?}");
    assert!(rendered.contains("uid-1"));
    assert!(!rendered.contains("secret"));
}

// =============================================================
// IdentityToolkitProvider (non-hydrate)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn provider_outside_browser_reports_unknown_failure() {
    let provider = IdentityToolkitProvider::new(AuthConfig::new("k", None));
    let result = futures::executor::block_on(provider.create_account("a@b.com", "pw"));
    assert_eq!(result, Err(ProviderError::unknown()));
}
