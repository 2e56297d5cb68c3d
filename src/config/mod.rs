pub mod carrier_config;
#[cfg(feature = "cli")]
pub mod cli;

pub use carrier_config::{ApiConfig, CarrierConfig, CreditCardConfig, PaymentMethod, WarehouseAddress};
