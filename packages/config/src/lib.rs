// ABOUTME: Configuration package for the to-do server
// ABOUTME: Environment variable names, defaults, and lookup helpers

pub mod constants;

use std::env;

use tracing::debug;

/// Read `primary`, falling back to `legacy` when it is unset or empty.
pub fn env_with_fallback(primary: &str, legacy: &str) -> Option<String> {
    if let Some(value) = non_empty_env(primary) {
        return Some(value);
    }

    let value = non_empty_env(legacy)?;
    debug!("Using legacy environment variable {} (prefer {})", legacy, primary);
    Some(value)
}

/// Read an environment variable, treating an empty value as unset.
pub fn non_empty_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Variable names are unique to each test so they can run in parallel.

    #[test]
    fn test_primary_wins_over_legacy() {
        env::set_var("TODO_CONFIG_TEST_PRIMARY_A", "8080");
        env::set_var("TODO_CONFIG_TEST_LEGACY_A", "9090");

        assert_eq!(
            env_with_fallback("TODO_CONFIG_TEST_PRIMARY_A", "TODO_CONFIG_TEST_LEGACY_A"),
            Some("8080".to_string())
        );

        env::remove_var("TODO_CONFIG_TEST_PRIMARY_A");
        env::remove_var("TODO_CONFIG_TEST_LEGACY_A");
    }

    #[test]
    fn test_legacy_used_when_primary_missing() {
        env::remove_var("TODO_CONFIG_TEST_PRIMARY_B");
        env::set_var("TODO_CONFIG_TEST_LEGACY_B", "9090");

        assert_eq!(
            env_with_fallback("TODO_CONFIG_TEST_PRIMARY_B", "TODO_CONFIG_TEST_LEGACY_B"),
            Some("9090".to_string())
        );

        env::remove_var("TODO_CONFIG_TEST_LEGACY_B");
    }

    #[test]
    fn test_empty_value_is_unset() {
        env::set_var("TODO_CONFIG_TEST_EMPTY", "   ");
        assert_eq!(non_empty_env("TODO_CONFIG_TEST_EMPTY"), None);
        env::remove_var("TODO_CONFIG_TEST_EMPTY");
    }
}
