use crate::config::CarrierConfig;
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// 以 HTTPS POST 將 XML 送到 UPS ShipConfirm 端點
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &CarrierConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::new(config.api.confirm_url.clone(), client))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, body: String) -> Result<String> {
        tracing::debug!("Making UPS request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml")
            .body(body)
            .send()
            .await?;

        // 狀態碼不影響結果，UPS 的錯誤寫在回應本文
        tracing::debug!("UPS response status: {}", response.status());
        Ok(response.text().await?)
    }
}
