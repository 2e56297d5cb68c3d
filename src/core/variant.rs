use crate::domain::document::{Address, Service, ShipTo};
use crate::domain::model::{EstimateAddress, QuoteAddress, ServiceDescriptions, ShippingMethod};
use crate::domain::ports::ShipmentVariant;

const RECIPIENT_COUNTRY: &str = "US";
const PLACEHOLDER: &str = "Test";
const PLACEHOLDER_PHONE: &str = "1231231234";

fn service_for(shipping_method: &ShippingMethod, descriptions: &ServiceDescriptions) -> Service {
    let code = shipping_method.ups_code();
    let description = descriptions.get(code).cloned();
    if description.is_none() {
        tracing::debug!("No description configured for service code {}", code);
    }
    Service {
        code: code.to_string(),
        description,
    }
}

/// 估價：收件人資訊用佔位值，只帶入城市 / 州 / 郵遞區號
#[derive(Debug, Clone)]
pub struct Estimate {
    address: EstimateAddress,
}

impl Estimate {
    pub fn new(address: EstimateAddress) -> Self {
        Self { address }
    }
}

impl ShipmentVariant for Estimate {
    fn ship_to(&self) -> ShipTo {
        ShipTo {
            company_name: PLACEHOLDER.to_string(),
            attention_name: PLACEHOLDER.to_string(),
            phone_number: PLACEHOLDER_PHONE.to_string(),
            address: self.recipient_address(),
            residential_address: (),
        }
    }

    fn recipient_address(&self) -> Address {
        Address {
            address_line1: Some(PLACEHOLDER.to_string()),
            address_line2: None,
            city: self.address.city.clone(),
            state_province_code: self.address.state.clone(),
            country_code: RECIPIENT_COUNTRY.to_string(),
            postal_code: self.address.zip_code.clone(),
        }
    }

    fn service(&self, shipping_method: &ShippingMethod, descriptions: &ServiceDescriptions) -> Service {
        service_for(shipping_method, descriptions)
    }
}

/// 正式報價：收件人資訊取自完整地址
#[derive(Debug, Clone)]
pub struct Quote {
    address: QuoteAddress,
}

impl Quote {
    pub fn new(address: QuoteAddress) -> Self {
        Self { address }
    }
}

impl ShipmentVariant for Quote {
    fn ship_to(&self) -> ShipTo {
        ShipTo {
            company_name: self.address.company.clone(),
            attention_name: self.address.name.clone(),
            phone_number: self.address.phone.clone(),
            address: self.recipient_address(),
            residential_address: (),
        }
    }

    fn recipient_address(&self) -> Address {
        Address {
            address_line1: Some(self.address.address.clone()),
            address_line2: self.address.address_2.clone(),
            city: Some(self.address.city.clone()),
            state_province_code: Some(self.address.state_code.clone()),
            country_code: RECIPIENT_COUNTRY.to_string(),
            postal_code: Some(self.address.postal_code.clone()),
        }
    }

    fn service(&self, shipping_method: &ShippingMethod, descriptions: &ServiceDescriptions) -> Service {
        service_for(shipping_method, descriptions)
    }
}
