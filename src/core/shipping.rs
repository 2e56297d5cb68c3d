use crate::config::CarrierConfig;
use crate::core::rate::RateExtractor;
use crate::core::request::{ShipmentContext, ShipmentRequest, ShipmentRequestBuilder};
use crate::domain::model::{Product, RateResult, ShippingMethod};
use crate::domain::ports::{ShipmentVariant, Transport};
use crate::utils::error::Result;
use std::sync::Arc;

/// 向 UPS 詢價的入口，每次呼叫都是獨立的一次請求 / 回應
pub struct UpsShipping<T: Transport> {
    config: Arc<CarrierConfig>,
    transport: T,
    extractor: RateExtractor,
}

impl<T: Transport> UpsShipping<T> {
    pub fn new(config: Arc<CarrierConfig>, transport: T) -> Self {
        Self {
            config,
            transport,
            extractor: RateExtractor::new(),
        }
    }

    pub fn build_request(
        &self,
        products: &[Product],
        shipping_method: &ShippingMethod,
        variant: &dyn ShipmentVariant,
    ) -> Result<ShipmentRequest> {
        ShipmentRequestBuilder::new(&self.config).build(&ShipmentContext {
            products,
            shipping_method,
            variant,
        })
    }

    /// 建立請求並送出。
    ///
    /// 重量錯誤或 XML 無法產生時回傳 `Err`；請求送出後的任何失敗只記錄一次，
    /// 並以 `RateResult::TransportError` 回傳，不會重試。
    pub async fn request_shipping_rate(
        &self,
        products: &[Product],
        shipping_method: &ShippingMethod,
        variant: &dyn ShipmentVariant,
    ) -> Result<RateResult> {
        let body = self
            .build_request(products, shipping_method, variant)?
            .to_xml()?;

        tracing::debug!(
            "Requesting UPS rate for {} product(s), service {}",
            products.len(),
            shipping_method.ups_code()
        );

        match self.exchange(body).await {
            Ok(result) => Ok(result),
            Err(e) if e.is_transport_failure() => {
                tracing::warn!("UPS Error => {}", e);
                Ok(RateResult::TransportError(e.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    async fn exchange(&self, body: String) -> Result<RateResult> {
        let response = self.transport.send(body).await?;
        self.extractor.extract(&response)
    }
}
