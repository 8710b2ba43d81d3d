//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MAHATTA_CATALOG` - Path to a YAML catalog seed (default: built-in catalog)
//! - `MAHATTA_OPEN_CART_ON_ADD` - Open the cart after adding a product (default: true)
//! - `RUST_LOG` - Log filter (default: `mahatta_cli=info,mahatta_core=info`)

use std::path::PathBuf;

use mahatta_core::StoreOptions;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Catalog seed file; `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// Controller behavior switches.
    pub store: StoreOptions,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_path = get_optional_env("MAHATTA_CATALOG").map(PathBuf::from);
        let open_cart_on_add = parse_bool(
            "MAHATTA_OPEN_CART_ON_ADD",
            &get_env_or_default("MAHATTA_OPEN_CART_ON_ADD", "true"),
        )?;

        Ok(Self {
            catalog_path,
            store: StoreOptions { open_cart_on_add },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse a boolean flag value.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(parse_bool("X", " ON ").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(!parse_bool("X", "no").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        let err = parse_bool("MAHATTA_OPEN_CART_ON_ADD", "maybe").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid environment variable MAHATTA_OPEN_CART_ON_ADD: expected a boolean, got 'maybe'"
        );
    }

    #[test]
    fn test_default_config_opens_cart() {
        let config = CliConfig::default();
        assert!(config.catalog_path.is_none());
        assert!(config.store.open_cart_on_add);
    }
}
