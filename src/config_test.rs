use super::*;

#[test]
fn from_vars_uses_defaults() {
    let cfg = HostConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, HostConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = HostConfig::from_vars(Some("127.0.0.1".into()), Some(" 8080 ".into())).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn from_vars_treats_blank_values_as_unset() {
    let cfg = HostConfig::from_vars(Some("  ".into()), Some(String::new())).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = HostConfig::from_vars(None, Some("http".into())).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
    assert!(err.to_string().starts_with("invalid PORT \"http\""));
}

#[test]
fn from_vars_rejects_out_of_range_port() {
    assert!(HostConfig::from_vars(None, Some("70000".into())).is_err());
}
