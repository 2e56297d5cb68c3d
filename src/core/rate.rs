use crate::domain::model::RateResult;
use crate::utils::error::{Result, ShippingError};
use quick_xml::events::Event;
use quick_xml::Reader;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// 加在 UPS 報價上的固定附加費
pub const SURCHARGE: Decimal = Decimal::from_parts(200, 0, 0, false, 2);

/// 從回應中取出的欄位
#[derive(Debug, Default, PartialEq)]
struct ResponseFields {
    monetary_value: Option<String>,
    error_description: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RateExtractor;

impl RateExtractor {
    pub fn new() -> Self {
        Self
    }

    /// 解析 ShipmentConfirmResponse，回傳含附加費的運費或 Unavailable
    pub fn extract(&self, response: &str) -> Result<RateResult> {
        let fields = scan(response)?;

        let Some(value) = fields.monetary_value else {
            match fields.error_description {
                Some(description) => tracing::warn!("UPS returned no rate: {}", description),
                None => tracing::warn!("UPS response carries no TotalCharges"),
            }
            return Ok(RateResult::Unavailable);
        };

        let charge = Decimal::from_str(&value)
            .map_err(|_| ShippingError::InvalidMonetaryValue { value: value.clone() })?;
        let total = charge
            .checked_add(SURCHARGE)
            .ok_or_else(|| ShippingError::InvalidMonetaryValue { value: value.clone() })?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        tracing::debug!("UPS charge {} + surcharge {} = {}", charge, SURCHARGE, total);
        Ok(RateResult::Priced(total))
    }
}

/// 取第一個 TotalCharges 底下非空白的 MonetaryValue，以及錯誤說明
fn scan(response: &str) -> Result<ResponseFields> {
    let mut reader = Reader::from_str(response);
    reader.config_mut().trim_text(true);

    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut fields = ResponseFields::default();

    loop {
        match reader.read_event()? {
            Event::Start(element) => path.push(element.local_name().as_ref().to_vec()),
            Event::End(_) => {
                path.pop();
            }
            Event::Text(text) => record_text(&path, &text.unescape()?, &mut fields),
            Event::CData(cdata) => record_text(&path, &String::from_utf8_lossy(&cdata), &mut fields),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(fields)
}

fn record_text(path: &[Vec<u8>], text: &str, fields: &mut ResponseFields) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    match path.last().map(Vec::as_slice) {
        Some(b"MonetaryValue")
            if fields.monetary_value.is_none()
                && path.iter().any(|name| name.as_slice() == b"TotalCharges") =>
        {
            fields.monetary_value = Some(text.to_string());
        }
        Some(b"ErrorDescription") if fields.error_description.is_none() => {
            fields.error_description = Some(text.to_string());
        }
        _ => {}
    }
}
