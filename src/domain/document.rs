//! ShipConfirm 請求文件的 XML 結構。
//!
//! 欄位順序即為輸出順序，UPS 依序解析，調整前請先確認 API 文件。

use crate::domain::model::PackageWeight;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessRequest {
    pub access_license_number: String,
    pub user_id: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentConfirmRequest {
    pub request: Request,
    pub shipment: Shipment,
    pub label_specification: LabelSpecification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Request {
    pub transaction_reference: TransactionReference,
    pub request_action: String,
    pub request_option: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionReference {
    pub xpci_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shipment {
    pub shipper: Shipper,
    pub ship_to: ShipTo,
    pub service: Service,
    pub payment_information: PaymentInformation,
    #[serde(rename = "Package")]
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shipper {
    pub name: String,
    pub attention_name: String,
    pub phone_number: String,
    pub shipper_number: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipTo {
    pub company_name: String,
    pub attention_name: String,
    pub phone_number: String,
    pub address: Address,
    /// 空元素，出現即代表住宅地址
    pub residential_address: (),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province_code: Option<String>,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentInformation {
    pub prepaid: Prepaid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Prepaid {
    pub bill_shipper: BillShipper,
}

/// UPS 只接受 AccountNumber 或 CreditCard 其中之一
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillShipper {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreditCard {
    #[serde(rename = "Type")]
    pub card_type: String,
    pub number: String,
    pub expiration_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
    pub packaging_type: Code,
    pub package_weight: PackageWeightNode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageWeightNode {
    pub weight: PackageWeight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Code {
    pub code: String,
}

impl Code {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabelSpecification {
    pub label_print_method: Code,
    #[serde(rename = "HTTPUserAgent")]
    pub http_user_agent: String,
    pub label_image_format: Code,
}
