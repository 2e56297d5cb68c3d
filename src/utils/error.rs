use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShippingError {
    #[error("Invalid weight: {weight} lb (must be zero or positive and the total must fit in a decimal)")]
    InvalidWeight { weight: Decimal },

    #[error("Carrier request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Failed to write request XML: {0}")]
    XmlWriteError(#[from] quick_xml::SeError),

    #[error("Failed to read response XML: {0}")]
    XmlReadError(#[from] quick_xml::Error),

    #[error("Carrier returned an unusable MonetaryValue: {value:?}")]
    InvalidMonetaryValue { value: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Protocol,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ShippingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShippingError::InvalidWeight { .. } | ShippingError::CsvError(_) => {
                ErrorCategory::Input
            }
            ShippingError::TransportError(_) => ErrorCategory::Network,
            ShippingError::XmlWriteError(_)
            | ShippingError::XmlReadError(_)
            | ShippingError::InvalidMonetaryValue { .. } => ErrorCategory::Protocol,
            ShippingError::ConfigError { .. }
            | ShippingError::ConfigValidationError { .. }
            | ShippingError::MissingConfigError { .. }
            | ShippingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ShippingError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Protocol => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 是否屬於傳輸層 (網路 / TLS / 回應格式) 的失敗
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            ShippingError::TransportError(_)
                | ShippingError::XmlReadError(_)
                | ShippingError::InvalidMonetaryValue { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShippingError::InvalidWeight { weight } => {
                format!("A product weight of {} lb cannot be shipped", weight)
            }
            ShippingError::TransportError(_) => "Could not reach the UPS rating service".to_string(),
            ShippingError::XmlReadError(_) | ShippingError::InvalidMonetaryValue { .. } => {
                "UPS returned a response that could not be understood".to_string()
            }
            ShippingError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the product weights in the products file",
            ErrorCategory::Network => "Check network access to the UPS endpoint and try again",
            ErrorCategory::Protocol => "Verify the confirm_url points at the UPS ShipConfirm API",
            ErrorCategory::Configuration => "Review the TOML configuration file",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShippingError>;
