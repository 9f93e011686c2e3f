//! Payment configuration (sandbox gateway)

use serde::Deserialize;

use super::error::ValidationError;

/// Which payment provider adapter to wire in.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// Scriptable in-process mock that approves everything.
    #[default]
    Mock,

    /// The sandbox card gateway over HTTP.
    Sandbox,
}

/// Payment configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Provider adapter selector
    #[serde(default)]
    pub mode: PaymentMode,

    /// ISO 4217 code every payment settles in
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Gateway API base URL
    #[serde(default)]
    pub sandbox_base_url: String,

    /// Gateway public key (tokenization, merchant lookup)
    #[serde(default)]
    pub sandbox_public_key: String,

    /// Gateway private key (transaction creation)
    #[serde(default)]
    pub sandbox_private_key: String,

    /// Gateway integrity key (transaction signature)
    #[serde(default)]
    pub sandbox_integrity_key: String,
}

impl PaymentConfig {
    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrency);
        }

        if self.mode == PaymentMode::Mock {
            return Ok(());
        }

        if self.sandbox_base_url.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__SANDBOX_BASE_URL"));
        }
        if !self.sandbox_base_url.starts_with("http://")
            && !self.sandbox_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidGatewayUrl);
        }
        if self.sandbox_public_key.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PAYMENT__SANDBOX_PUBLIC_KEY",
            ));
        }
        if self.sandbox_private_key.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PAYMENT__SANDBOX_PRIVATE_KEY",
            ));
        }
        if self.sandbox_integrity_key.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PAYMENT__SANDBOX_INTEGRITY_KEY",
            ));
        }

        Ok(())
    }
}

fn default_currency() -> String {
    "COP".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_mode_needs_no_keys() {
        let config = PaymentConfig {
            currency: default_currency(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sandbox_mode_requires_keys() {
        let config = PaymentConfig {
            mode: PaymentMode::Sandbox,
            currency: default_currency(),
            sandbox_base_url: "https://sandbox.example.com/v1".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn currency_must_be_three_uppercase_letters() {
        let config = PaymentConfig {
            currency: "cop".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCurrency)
        ));
    }
}
