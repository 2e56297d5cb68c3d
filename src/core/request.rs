use crate::config::{CarrierConfig, PaymentMethod};
use crate::core::partition;
use crate::domain::document::{
    AccessRequest, Address, BillShipper, Code, CreditCard, LabelSpecification, Package,
    PackageWeightNode, PaymentInformation, Prepaid, Request, Shipment, ShipmentConfirmRequest,
    Shipper, TransactionReference,
};
use crate::domain::model::{PackageWeight, Product, ShippingMethod};
use crate::domain::ports::ShipmentVariant;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const XPCI_VERSION: &str = "1.0001";
const REQUEST_ACTION: &str = "ShipConfirm";
const REQUEST_OPTION: &str = "nonvalidate";
const PACKAGING_TYPE: &str = "02";
const LABEL_FORMAT: &str = "GIF";
const LABEL_USER_AGENT: &str = "Mozilla/4.5";

const SHIPPER_NAME: &str = "Whitehurst & Clark Inc.";
const SHIPPER_ATTENTION_NAME: &str = "Jason Low";
const SHIPPER_PHONE: &str = "212-779-4400";

/// 組一次請求所需的輸入
#[derive(Clone, Copy)]
pub struct ShipmentContext<'a> {
    pub products: &'a [Product],
    pub shipping_method: &'a ShippingMethod,
    pub variant: &'a dyn ShipmentVariant,
}

/// 完整的 ShipConfirm 請求：AccessRequest 與 ShipmentConfirmRequest 兩段
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentRequest {
    pub access_request: AccessRequest,
    pub shipment_confirm_request: ShipmentConfirmRequest,
}

impl ShipmentRequest {
    pub fn packages(&self) -> &[Package] {
        &self.shipment_confirm_request.shipment.packages
    }

    /// 兩段 XML 直接串接，外層不再包任何元素
    pub fn to_xml(&self) -> Result<String> {
        let mut body = String::new();
        body.push_str(XML_DECLARATION);
        body.push_str(&quick_xml::se::to_string_with_root(
            "AccessRequest",
            &self.access_request,
        )?);
        body.push('\n');
        body.push_str(XML_DECLARATION);
        body.push_str(&quick_xml::se::to_string_with_root(
            "ShipmentConfirmRequest",
            &self.shipment_confirm_request,
        )?);
        body.push('\n');
        Ok(body)
    }
}

pub struct ShipmentRequestBuilder<'a> {
    config: &'a CarrierConfig,
}

impl<'a> ShipmentRequestBuilder<'a> {
    pub fn new(config: &'a CarrierConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, context: &ShipmentContext<'_>) -> Result<ShipmentRequest> {
        Ok(ShipmentRequest {
            access_request: self.access_request(),
            shipment_confirm_request: ShipmentConfirmRequest {
                request: self.request(),
                shipment: self.shipment(context)?,
                label_specification: self.label_specification(),
            },
        })
    }

    fn access_request(&self) -> AccessRequest {
        AccessRequest {
            access_license_number: self.config.api.access_key.clone(),
            user_id: self.config.api.user_id.clone(),
            password: self.config.api.password.clone(),
        }
    }

    fn request(&self) -> Request {
        Request {
            transaction_reference: TransactionReference {
                xpci_version: XPCI_VERSION.to_string(),
            },
            request_action: REQUEST_ACTION.to_string(),
            request_option: REQUEST_OPTION.to_string(),
        }
    }

    fn shipment(&self, context: &ShipmentContext<'_>) -> Result<Shipment> {
        let total = partition::total_weight(context.products)?;
        let packages = partition::partition(total)?
            .into_iter()
            .map(|weight| self.package(weight))
            .collect();

        Ok(Shipment {
            shipper: self.shipper(),
            ship_to: context.variant.ship_to(),
            service: context
                .variant
                .service(context.shipping_method, &self.config.services),
            payment_information: self.payment_information()?,
            packages,
        })
    }

    fn shipper(&self) -> Shipper {
        Shipper {
            name: SHIPPER_NAME.to_string(),
            attention_name: SHIPPER_ATTENTION_NAME.to_string(),
            phone_number: SHIPPER_PHONE.to_string(),
            shipper_number: self.config.api.account_number.clone(),
            address: self.shipper_address(),
        }
    }

    fn shipper_address(&self) -> Address {
        let warehouse = &self.config.warehouse;
        Address {
            address_line1: Some(warehouse.address_line1.clone()),
            address_line2: None,
            city: Some(warehouse.city.clone()),
            state_province_code: Some(warehouse.state_province_code.clone()),
            country_code: warehouse.country_code.clone(),
            postal_code: Some(warehouse.postal_code.clone()),
        }
    }

    pub fn payment_information(&self) -> Result<PaymentInformation> {
        let bill_shipper = match self.config.api.payment {
            PaymentMethod::Account => BillShipper {
                account_number: Some(self.config.api.account_number.clone()),
                credit_card: None,
            },
            PaymentMethod::CreditCard => BillShipper {
                account_number: None,
                credit_card: Some(self.credit_card()?),
            },
        };
        Ok(PaymentInformation {
            prepaid: Prepaid { bill_shipper },
        })
    }

    pub fn credit_card(&self) -> Result<CreditCard> {
        let card = validate_required_field("api.credit_card", &self.config.api.credit_card)?;
        Ok(CreditCard {
            card_type: validate_required_field("api.credit_card.type", &card.card_type)?.clone(),
            number: validate_required_field("api.credit_card.number", &card.number)?.clone(),
            expiration_date: validate_required_field(
                "api.credit_card.expiration_date",
                &card.expiration_date,
            )?
            .clone(),
        })
    }

    fn package(&self, weight: PackageWeight) -> Package {
        Package {
            packaging_type: Code::new(PACKAGING_TYPE),
            package_weight: PackageWeightNode { weight },
        }
    }

    fn label_specification(&self) -> LabelSpecification {
        LabelSpecification {
            label_print_method: Code::new(LABEL_FORMAT),
            http_user_agent: LABEL_USER_AGENT.to_string(),
            label_image_format: Code::new(LABEL_FORMAT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::carrier_config::tests::{sample_config, SAMPLE_CONFIG};
    use crate::config::CreditCardConfig;
    use crate::core::variant::{Estimate, Quote};
    use crate::domain::model::{EstimateAddress, QuoteAddress};
    use crate::utils::error::ShippingError;
    use rust_decimal::Decimal;

    fn products(weights: &[i64]) -> Vec<Product> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| Product::new(format!("sku-{}", i), Decimal::from(*w)))
            .collect()
    }

    fn estimate() -> Estimate {
        Estimate::new(EstimateAddress {
            city: Some("Boston".to_string()),
            state: Some("MA".to_string()),
            zip_code: Some("02110".to_string()),
            country: None,
        })
    }

    fn build(config: &CarrierConfig, weights: &[i64]) -> Result<ShipmentRequest> {
        let products = products(weights);
        let method = ShippingMethod::new("03");
        let variant = estimate();
        ShipmentRequestBuilder::new(config).build(&ShipmentContext {
            products: &products,
            shipping_method: &method,
            variant: &variant,
        })
    }

    #[test]
    fn test_build_fixed_sections() {
        let config = sample_config();
        let request = build(&config, &[10]).unwrap();

        assert_eq!(request.access_request.access_license_number, "ACCESS-KEY");
        assert_eq!(request.access_request.user_id, "wcuser");
        assert_eq!(request.access_request.password, "secret");

        let confirm = &request.shipment_confirm_request;
        assert_eq!(confirm.request.transaction_reference.xpci_version, "1.0001");
        assert_eq!(confirm.request.request_action, "ShipConfirm");
        assert_eq!(confirm.request.request_option, "nonvalidate");
        assert_eq!(confirm.label_specification.label_print_method, Code::new("GIF"));
        assert_eq!(confirm.label_specification.label_image_format, Code::new("GIF"));
        assert_eq!(confirm.label_specification.http_user_agent, "Mozilla/4.5");

        let shipper = &confirm.shipment.shipper;
        assert_eq!(shipper.name, "Whitehurst & Clark Inc.");
        assert_eq!(shipper.shipper_number, "A1B2C3");
        assert_eq!(shipper.address.postal_code.as_deref(), Some("10001"));
    }

    #[test]
    fn test_build_one_package_per_partition_entry() {
        let config = sample_config();
        let request = build(&config, &[10, 25]).unwrap();

        let weights: Vec<Decimal> = request
            .packages()
            .iter()
            .map(|p| p.package_weight.weight.value())
            .collect();
        assert_eq!(weights, vec![Decimal::from(30), Decimal::from(5)]);
        assert!(request
            .packages()
            .iter()
            .all(|p| p.packaging_type == Code::new("02")));
    }

    #[test]
    fn test_build_without_weight_has_no_packages() {
        let config = sample_config();
        let request = build(&config, &[]).unwrap();
        assert!(request.packages().is_empty());
    }

    #[test]
    fn test_build_rejects_negative_weight() {
        let config = sample_config();
        assert!(matches!(
            build(&config, &[5, -2]),
            Err(ShippingError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_build_does_not_touch_inputs() {
        let config = sample_config();
        let products = products(&[40]);
        let before = products.clone();
        let method = ShippingMethod::new("01");
        let variant = Quote::new(QuoteAddress {
            company: "Acme".to_string(),
            name: "Jane Roe".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Main St".to_string(),
            address_2: None,
            city: "Austin".to_string(),
            state_code: "TX".to_string(),
            postal_code: "73301".to_string(),
        });
        let context = ShipmentContext {
            products: &products,
            shipping_method: &method,
            variant: &variant,
        };

        let builder = ShipmentRequestBuilder::new(&config);
        let first = builder.build(&context).unwrap();
        let second = builder.build(&context).unwrap();

        assert_eq!(first, second);
        assert_eq!(products, before);
        assert_eq!(first.shipment_confirm_request.shipment.ship_to.company_name, "Acme");
        assert_eq!(
            first.shipment_confirm_request.shipment.service.description.as_deref(),
            Some("Next Day Air")
        );
    }

    #[test]
    fn test_payment_defaults_to_account() {
        let config = sample_config();
        let payment = ShipmentRequestBuilder::new(&config)
            .payment_information()
            .unwrap();

        assert_eq!(
            payment.prepaid.bill_shipper.account_number.as_deref(),
            Some("A1B2C3")
        );
        assert!(payment.prepaid.bill_shipper.credit_card.is_none());
    }

    #[test]
    fn test_payment_by_credit_card() {
        let mut config = sample_config();
        config.api.payment = PaymentMethod::CreditCard;
        config.api.credit_card = Some(CreditCardConfig {
            card_type: Some("06".to_string()),
            number: Some("4111111111111111".to_string()),
            expiration_date: Some("122027".to_string()),
        });

        let payment = ShipmentRequestBuilder::new(&config)
            .payment_information()
            .unwrap();
        let card = payment.prepaid.bill_shipper.credit_card.unwrap();
        assert_eq!(card.card_type, "06");
        assert_eq!(card.expiration_date, "122027");
        assert!(payment.prepaid.bill_shipper.account_number.is_none());
    }

    #[test]
    fn test_credit_card_without_config_is_an_error() {
        let config = CarrierConfig::from_toml_str(SAMPLE_CONFIG).unwrap();
        assert!(matches!(
            ShipmentRequestBuilder::new(&config).credit_card(),
            Err(ShippingError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_xml_is_two_concatenated_fragments() {
        let config = sample_config();
        let xml = build(&config, &[10, 25]).unwrap().to_xml().unwrap();

        assert_eq!(xml.matches("<?xml version=\"1.0\"").count(), 2);
        assert!(xml.starts_with("<?xml"));
        let access_end = xml.find("</AccessRequest>").unwrap();
        let confirm_start = xml.find("<ShipmentConfirmRequest>").unwrap();
        assert!(access_end < confirm_start);
        assert!(xml.trim_end().ends_with("</ShipmentConfirmRequest>"));

        assert_eq!(xml.matches("<Shipper>").count(), 1);
        assert_eq!(xml.matches("<ShipTo>").count(), 1);
        assert_eq!(xml.matches("<Package>").count(), 2);
        assert!(xml.contains("<Weight>30</Weight>"));
        assert!(xml.contains("<Weight>5</Weight>"));
        assert!(xml.contains("<HTTPUserAgent>Mozilla/4.5</HTTPUserAgent>"));
        assert!(xml.contains("<ResidentialAddress/>"));
        assert!(xml.contains("<AccountNumber>A1B2C3</AccountNumber>"));
    }

    #[test]
    fn test_xml_keeps_shipment_order() {
        let config = sample_config();
        let xml = build(&config, &[12]).unwrap().to_xml().unwrap();

        let positions: Vec<usize> = [
            "<Shipper>",
            "<ShipTo>",
            "<Service>",
            "<PaymentInformation>",
            "<Package>",
            "<LabelSpecification>",
        ]
        .iter()
        .map(|tag| xml.find(tag).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
