//! Gate paths and the return parameter, loaded from the environment

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Paths the gates redirect to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Where unauthenticated visitors are sent
    pub sign_in_path: String,
    /// Registration page, never resumed after sign-in
    pub sign_up_path: String,
    /// Where authenticated visitors with the wrong role are sent
    pub unauthorized_path: String,
    /// Authenticated landing page, used by the guest gate and after sign-in
    pub landing_path: String,
    /// Query parameter carrying the originally requested path
    pub return_param: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            sign_in_path: "/signin".to_string(),
            sign_up_path: "/signup".to_string(),
            unauthorized_path: "/unauthorized".to_string(),
            landing_path: "/dashboard".to_string(),
            return_param: "return_to".to_string(),
        }
    }
}

impl GateConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        let config = Self {
            sign_in_path: env::var("STOREFRONT_SIGN_IN_PATH").unwrap_or(defaults.sign_in_path),
            sign_up_path: env::var("STOREFRONT_SIGN_UP_PATH").unwrap_or(defaults.sign_up_path),
            unauthorized_path: env::var("STOREFRONT_UNAUTHORIZED_PATH")
                .unwrap_or(defaults.unauthorized_path),
            landing_path: env::var("STOREFRONT_LANDING_PATH").unwrap_or(defaults.landing_path),
            return_param: env::var("STOREFRONT_RETURN_PARAM").unwrap_or(defaults.return_param),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("STOREFRONT_SIGN_IN_PATH", &self.sign_in_path),
            ("STOREFRONT_SIGN_UP_PATH", &self.sign_up_path),
            ("STOREFRONT_UNAUTHORIZED_PATH", &self.unauthorized_path),
            ("STOREFRONT_LANDING_PATH", &self.landing_path),
        ] {
            ensure!(
                path.starts_with('/') && !path.starts_with("//"),
                "{name} must be a local absolute path, got '{path}'"
            );
        }
        let landing = self.landing_path.trim_end_matches('/');
        for (name, guest_path) in [
            ("STOREFRONT_SIGN_IN_PATH", &self.sign_in_path),
            ("STOREFRONT_SIGN_UP_PATH", &self.sign_up_path),
        ] {
            // Signed-in visitors are sent from guest pages to the landing path
            ensure!(
                landing != guest_path.trim_end_matches('/'),
                "STOREFRONT_LANDING_PATH must differ from {name}, both are '{guest_path}'"
            );
        }
        ensure!(
            !self.return_param.trim().is_empty(),
            "STOREFRONT_RETURN_PARAM must not be empty"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GateConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_local_paths() {
        let config = GateConfig {
            sign_in_path: "https://evil.example/login".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GateConfig {
            landing_path: "//evil.example".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn landing_on_a_guest_page_is_rejected() {
        let config = GateConfig {
            landing_path: "/signin".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GateConfig {
            landing_path: "/signup/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GateConfig {
            landing_path: "/dashboard".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_partial_config() {
        let config: GateConfig = serde_json::from_str(r#"{"landing_path":"/home"}"#).unwrap();
        assert_eq!(config.landing_path, "/home");
        assert_eq!(config.sign_in_path, "/signin");
    }
}
