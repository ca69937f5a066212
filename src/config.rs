//! Configuration constants and utilities for storely
//!
//! The remote catalog lives at a fixed origin; the environment override
//! exists so integration tests can point the client at a local server.

/// Default base origin of the remote catalog
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Environment variable name for overriding the base origin
pub const BASE_URL_ENV_VAR: &str = "STORELY_BASE_URL";

/// Get the base origin, checking environment variable first, then falling back to default
pub fn get_base_url() -> String {
    std::env::var_os(BASE_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(DEFAULT_BASE_URL, "https://fakestoreapi.com");
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(BASE_URL_ENV_VAR, "STORELY_BASE_URL");
    }

    #[test]
    fn test_get_base_url_default() {
        // Save current env var state
        let original = std::env::var_os(BASE_URL_ENV_VAR);

        // Remove env var if set
        std::env::remove_var(BASE_URL_ENV_VAR);
        assert_eq!(get_base_url(), DEFAULT_BASE_URL);

        // Restore original state
        if let Some(val) = original {
            std::env::set_var(BASE_URL_ENV_VAR, val);
        }
    }

    #[test]
    fn test_get_base_url_env_override() {
        // Save current env var state
        let original = std::env::var_os(BASE_URL_ENV_VAR);

        let test_url = "http://127.0.0.1:8080";
        std::env::set_var(BASE_URL_ENV_VAR, test_url);
        assert_eq!(get_base_url(), test_url);

        // Restore original state
        match original {
            Some(val) => std::env::set_var(BASE_URL_ENV_VAR, val),
            None => std::env::remove_var(BASE_URL_ENV_VAR),
        }
    }
}
