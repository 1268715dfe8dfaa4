use super::*;

#[test]
fn new_defaults_endpoint_when_absent() {
    let cfg = AuthConfig::new("key-1", None);
    assert_eq!(cfg.endpoint, DEFAULT_AUTH_ENDPOINT);
    assert_eq!(cfg.api_key, "key-1");
}

#[test]
fn new_defaults_endpoint_when_blank() {
    let cfg = AuthConfig::new("key-1", Some("   "));
    assert_eq!(cfg.endpoint, DEFAULT_AUTH_ENDPOINT);
}

#[test]
fn new_trims_trailing_slash_from_override() {
    let cfg = AuthConfig::new("key-1", Some("http://localhost:9099/identitytoolkit.googleapis.com/v1/"));
    assert_eq!(cfg.endpoint, "http://localhost:9099/identitytoolkit.googleapis.com/v1");
}

#[test]
fn sign_up_url_appends_path_and_key() {
    let cfg = AuthConfig::new("abc", Some("https://auth.example.test/v1"));
    assert_eq!(cfg.sign_up_url(), "https://auth.example.test/v1/accounts:signUp?key=abc");
}

#[test]
fn has_api_key_false_for_blank_key() {
    assert!(!AuthConfig::new("  ", None).has_api_key());
    assert!(AuthConfig::new("k", None).has_api_key());
}
