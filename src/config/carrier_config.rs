use crate::domain::model::ServiceDescriptions;
use crate::utils::error::{Result, ShippingError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierConfig {
    pub api: ApiConfig,
    pub warehouse: WarehouseAddress,
    #[serde(default)]
    pub services: ServiceDescriptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub confirm_url: String,
    pub access_key: String,
    pub user_id: String,
    pub password: String,
    pub account_number: String,
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub payment: PaymentMethod,
    pub credit_card: Option<CreditCardConfig>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// 以帳號付款 (預設)
    #[default]
    Account,
    CreditCard,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditCardConfig {
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub number: Option<String>,
    pub expiration_date: Option<String>,
}

/// 出貨倉庫地址
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseAddress {
    pub address_line1: String,
    pub city: String,
    pub state_province_code: String,
    pub country_code: String,
    pub postal_code: String,
}

impl CarrierConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShippingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShippingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${UPS_PASSWORD})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShippingError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("api.confirm_url", &self.api.confirm_url)?;
        validation::validate_non_empty_string("api.access_key", &self.api.access_key)?;
        validation::validate_non_empty_string("api.user_id", &self.api.user_id)?;
        validation::validate_non_empty_string("api.password", &self.api.password)?;
        validation::validate_non_empty_string("api.account_number", &self.api.account_number)?;

        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_range("api.timeout_seconds", timeout, 1, 300)?;
        }

        if self.api.payment == PaymentMethod::CreditCard {
            let card = validation::validate_required_field("api.credit_card", &self.api.credit_card)?;
            validation::validate_required_field("api.credit_card.type", &card.card_type)?;
            validation::validate_required_field("api.credit_card.number", &card.number)?;
            validation::validate_required_field(
                "api.credit_card.expiration_date",
                &card.expiration_date,
            )?;
        }

        validation::validate_non_empty_string("warehouse.address_line1", &self.warehouse.address_line1)?;
        validation::validate_non_empty_string("warehouse.postal_code", &self.warehouse.postal_code)?;

        Ok(())
    }
}

impl Validate for CarrierConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    pub(crate) const SAMPLE_CONFIG: &str = r#"
[api]
confirm_url = "https://wwwcie.ups.com/ups.app/xml/ShipConfirm"
access_key = "ACCESS-KEY"
user_id = "wcuser"
password = "secret"
account_number = "A1B2C3"

[warehouse]
address_line1 = "10 West 33rd Street"
city = "New York"
state_province_code = "NY"
country_code = "US"
postal_code = "10001"

[services]
"01" = "Next Day Air"
"03" = "Ground"
"#;

    pub(crate) fn sample_config() -> CarrierConfig {
        CarrierConfig::from_toml_str(SAMPLE_CONFIG).unwrap()
    }

    #[test]
    fn test_parse_carrier_config() {
        let config = sample_config();

        assert_eq!(config.api.account_number, "A1B2C3");
        assert_eq!(config.api.payment, PaymentMethod::Account);
        assert!(config.api.credit_card.is_none());
        assert_eq!(config.warehouse.city, "New York");
        assert_eq!(config.services.get("03").map(String::as_str), Some("Ground"));
        assert_eq!(config.services.get("99"), None);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("UPS_SHIPPING_TEST_PASSWORD", "from-env");

        let content = SAMPLE_CONFIG.replace("\"secret\"", "\"${UPS_SHIPPING_TEST_PASSWORD}\"");
        let config = CarrierConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.api.password, "from-env");

        std::env::remove_var("UPS_SHIPPING_TEST_PASSWORD");
    }

    #[test]
    fn test_unknown_env_var_is_left_untouched() {
        let content = SAMPLE_CONFIG.replace("\"secret\"", "\"${UPS_SHIPPING_NOT_SET}\"");
        let config = CarrierConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.api.password, "${UPS_SHIPPING_NOT_SET}");
    }

    #[test]
    fn test_credit_card_payment_requires_card_fields() {
        let content = SAMPLE_CONFIG.replace(
            "account_number = \"A1B2C3\"",
            "account_number = \"A1B2C3\"\npayment = \"credit_card\"",
        );
        let config = CarrierConfig::from_toml_str(&content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ShippingError::MissingConfigError { ref field }) if field == "api.credit_card"
        ));

        let content = SAMPLE_CONFIG.replace(
            "account_number = \"A1B2C3\"",
            "account_number = \"A1B2C3\"\npayment = \"credit_card\"\ncredit_card = { type = \"06\", number = \"4111111111111111\" }",
        );
        let config = CarrierConfig::from_toml_str(&content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ShippingError::MissingConfigError { ref field }) if field == "api.credit_card.expiration_date"
        ));
    }

    #[test]
    fn test_config_validation_rejects_bad_url() {
        let content = SAMPLE_CONFIG.replace(
            "https://wwwcie.ups.com/ups.app/xml/ShipConfirm",
            "not-a-url",
        );
        let config = CarrierConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_example_config_parses() {
        let config =
            CarrierConfig::from_toml_str(include_str!("../../ups-config.example.toml")).unwrap();
        assert_eq!(config.api.payment, PaymentMethod::Account);
        assert_eq!(config.services.get("03").map(String::as_str), Some("Ground"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SAMPLE_CONFIG.as_bytes()).unwrap();

        let config = CarrierConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.user_id, "wcuser");
    }
}
