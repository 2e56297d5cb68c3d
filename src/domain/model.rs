use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// UPS 單一包裹的重量上限 (磅)
pub const PACKAGE_WEIGHT_LIMIT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// 服務代碼 -> 服務說明，例如 "03" -> "UPS Ground"
pub type ServiceDescriptions = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub weight_in_pounds: Decimal,
}

impl Product {
    pub fn new(sku: impl Into<String>, weight_in_pounds: Decimal) -> Self {
        Self {
            sku: sku.into(),
            weight_in_pounds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingMethod {
    ups_code: String,
}

impl ShippingMethod {
    pub fn new(ups_code: impl Into<String>) -> Self {
        Self {
            ups_code: ups_code.into(),
        }
    }

    pub fn ups_code(&self) -> &str {
        &self.ups_code
    }
}

/// 估價用的寬鬆地址，只取 city / state / zip_code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateAddress {
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    /// 不會送出，收件國家一律是 US
    pub country: Option<String>,
}

/// 正式報價用的完整收件地址
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteAddress {
    pub company: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub address_2: Option<String>,
    pub city: String,
    pub state_code: String,
    pub postal_code: String,
}

/// 單一包裹重量，介於 0 (不含) 與 30 磅之間
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PackageWeight(Decimal);

impl PackageWeight {
    pub(crate) fn new(weight: Decimal) -> Self {
        debug_assert!(weight > Decimal::ZERO && weight <= PACKAGE_WEIGHT_LIMIT);
        Self(weight)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for PackageWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RateResult {
    /// 已含附加費，四捨五入到小數兩位
    Priced(Decimal),
    /// UPS 有回應但沒有報價
    Unavailable,
    /// 請求本身失敗
    TransportError(String),
}

impl RateResult {
    pub fn price(&self) -> Option<Decimal> {
        match self {
            RateResult::Priced(amount) => Some(*amount),
            _ => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, RateResult::Unavailable)
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, RateResult::TransportError(_))
    }
}

impl fmt::Display for RateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateResult::Priced(amount) => write!(f, "{:.2}", amount),
            RateResult::Unavailable => write!(f, "unavailable"),
            RateResult::TransportError(detail) => write!(f, "transport error: {}", detail),
        }
    }
}
