use crate::domain::document::{Address, ShipTo, Service};
use crate::domain::model::{ServiceDescriptions, ShippingMethod};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 把請求本文送到 UPS 並取回回應本文。逾時由實作自行決定。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, body: String) -> Result<String>;
}

/// 估價 (Estimate) 與正式報價 (Quote) 的差異點
pub trait ShipmentVariant: Send + Sync {
    fn ship_to(&self) -> ShipTo;
    fn recipient_address(&self) -> Address;
    fn service(&self, shipping_method: &ShippingMethod, descriptions: &ServiceDescriptions) -> Service;
}
