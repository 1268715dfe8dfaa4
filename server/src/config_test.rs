use super::*;

#[test]
fn from_addr_defaults_when_absent() {
    let cfg = ServerConfig::from_addr(None).unwrap();
    assert_eq!(cfg.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
}

#[test]
fn from_addr_defaults_when_blank() {
    let cfg = ServerConfig::from_addr(Some("  ")).unwrap();
    assert_eq!(cfg.addr.port(), 3000);
}

#[test]
fn from_addr_parses_override() {
    let cfg = ServerConfig::from_addr(Some("127.0.0.1:8080")).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn from_addr_rejects_garbage() {
    let err = ServerConfig::from_addr(Some("not-an-addr")).unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));
    assert!(err.to_string().contains("SIGNUP_ADDR"));
}

#[test]
fn from_env_reads_signup_addr() {
    let key = "SIGNUP_ADDR";
    unsafe { std::env::set_var(key, "127.0.0.1:4555") };
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr.port(), 4555);
    unsafe { std::env::remove_var(key) };
}
