pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::HttpTransport;
pub use config::CarrierConfig;
pub use crate::core::{
    rate::RateExtractor,
    request::{ShipmentContext, ShipmentRequest, ShipmentRequestBuilder},
    shipping::UpsShipping,
    variant::{Estimate, Quote},
};
pub use domain::model::{EstimateAddress, Product, QuoteAddress, RateResult, ShippingMethod};
pub use domain::ports::{ShipmentVariant, Transport};
pub use utils::error::{Result, ShippingError};
