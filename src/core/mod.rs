pub mod partition;
pub mod rate;
pub mod request;
pub mod shipping;
pub mod variant;

pub use crate::domain::model::{Product, RateResult, ShippingMethod};
pub use crate::domain::ports::{ShipmentVariant, Transport};
pub use crate::utils::error::Result;
