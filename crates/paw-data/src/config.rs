//! Storefront configuration.

use crate::ApiError;
use paw_commerce::money::Currency;
use serde::Deserialize;

/// Configuration the storefront is deployed with.
///
/// Loaded from a TOML document; every field except the API base URL has a
/// working default.
#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL of the storefront REST API.
    pub api_base_url: String,
    /// Publishable key id for the payment provider's checkout flow.
    #[serde(default)]
    pub payment_key_id: String,
    /// Sender id the push platform scopes device tokens to.
    #[serde(default)]
    pub push_sender_id: String,
    /// Store currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl StorefrontConfig {
    /// Parse a TOML configuration document.
    pub fn from_toml_str(input: &str) -> Result<Self, ApiError> {
        toml::from_str(input).map_err(|e| ApiError::Config(e.to_string()))
    }

    /// The configured currency, falling back to INR for unknown codes.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.currency).unwrap_or(Currency::INR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            api_base_url = "https://api.pawmart.test"
            payment_key_id = "rzp_test_abc"
            push_sender_id = "104090"
            currency = "USD"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.pawmart.test");
        assert_eq!(config.payment_key_id, "rzp_test_abc");
        assert_eq!(config.currency(), Currency::USD);
    }

    #[test]
    fn test_defaults_apply() {
        let config =
            StorefrontConfig::from_toml_str(r#"api_base_url = "https://api.pawmart.test""#)
                .unwrap();
        assert_eq!(config.currency(), Currency::INR);
        assert!(config.payment_key_id.is_empty());
    }

    #[test]
    fn test_missing_base_url_rejected() {
        let result = StorefrontConfig::from_toml_str(r#"currency = "INR""#);
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_unknown_currency_falls_back() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            api_base_url = "https://api.pawmart.test"
            currency = "XYZ"
            "#,
        )
        .unwrap();
        assert_eq!(config.currency(), Currency::INR);
    }
}
