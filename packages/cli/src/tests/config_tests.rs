use crate::config::{Config, ConfigError};
use rstest::rstest;
use serial_test::serial;
use std::env;
use std::net::{IpAddr, Ipv4Addr};

fn clear_env() {
    env::remove_var("TODO_HOST");
    env::remove_var("TODO_PORT");
    env::remove_var("PORT");
    env::remove_var("TODO_CORS_ORIGIN");
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 3000);
    assert_eq!(config.cors_origin, None);
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_config_from_env_with_custom_port() {
    clear_env();
    env::set_var("TODO_PORT", "8080");

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 8080);

    clear_env();
}

#[test]
#[serial]
fn test_config_legacy_port_fallback() {
    clear_env();
    env::set_var("PORT", "4001");

    assert_eq!(Config::from_env().unwrap().port, 4001);

    env::set_var("TODO_PORT", "5001");
    assert_eq!(Config::from_env().unwrap().port, 5001);

    clear_env();
}

#[test]
#[serial]
fn test_config_with_custom_host_and_cors() {
    clear_env();
    env::set_var("TODO_HOST", "127.0.0.1");
    env::set_var("TODO_CORS_ORIGIN", "https://app.example.com");

    let config = Config::from_env().unwrap();

    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(
        config.cors_origin.as_deref(),
        Some("https://app.example.com")
    );

    clear_env();
}

#[rstest]
#[case("not-a-number")]
#[case("70000")]
#[case("-1")]
#[serial]
fn test_config_invalid_port(#[case] port: &str) {
    clear_env();
    env::set_var("TODO_PORT", port);

    let result = Config::from_env();
    assert!(matches!(result.unwrap_err(), ConfigError::InvalidPort(_)));

    clear_env();
}

#[test]
#[serial]
fn test_config_port_zero() {
    clear_env();
    env::set_var("TODO_PORT", "0");

    let result = Config::from_env();
    assert!(matches!(result.unwrap_err(), ConfigError::PortOutOfRange(0)));

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_host() {
    clear_env();
    env::set_var("TODO_HOST", "localhost:abc");

    let result = Config::from_env();
    assert!(matches!(result.unwrap_err(), ConfigError::InvalidHost(_)));

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_take_precedence() {
    clear_env();
    env::set_var("TODO_PORT", "8080");

    let config = Config::from_env()
        .unwrap()
        .with_overrides(Some(IpAddr::V4(Ipv4Addr::LOCALHOST)), Some(9090))
        .unwrap();

    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");

    let result = config.with_overrides(None, Some(0));
    assert!(matches!(result.unwrap_err(), ConfigError::PortOutOfRange(0)));

    clear_env();
}
