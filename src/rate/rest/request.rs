//! The REST rate quote request.

use serde::{Deserialize, Serialize};

use crate::config::AccountNumber;
use crate::rate::rest::common::Party;
use crate::rate::rest::package::{RequestedPackageLineItem, VariableHandlingChargeDetail};
use crate::rate::rest::special_services::{CustomsClearanceDetail, ShipmentSpecialServices};

/// Body of `POST /rate/v1/rates/quotes`.
///
/// # Example
///
/// ```rust
/// use fedex_api::AccountNumber;
/// use fedex_api::rate::rest::{
///     Address, Party, RateRequest, RequestedPackageLineItem, RequestedShipment, Weight,
/// };
///
/// let address = |postal: &str| Address {
///     postal_code: Some(postal.to_string()),
///     country_code: Some("US".to_string()),
///     ..Default::default()
/// };
///
/// let request = RateRequest::new(
///     AccountNumber::new("740561073").unwrap(),
///     RequestedShipment {
///         shipper: Party::at(address("65247")),
///         recipient: Party::at(address("75063")),
///         pickup_type: Some("DROPOFF_AT_FEDEX_LOCATION".to_string()),
///         rate_request_type: vec!["ACCOUNT".to_string(), "LIST".to_string()],
///         requested_package_line_items: vec![RequestedPackageLineItem {
///             weight: Weight::pounds(10.0),
///             ..Default::default()
///         }],
///         ..Default::default()
///     },
/// );
///
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["accountNumber"]["value"], "740561073");
/// assert_eq!(json["requestedShipment"]["recipient"]["address"]["postalCode"], "75063");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    pub account_number: AccountNumber,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_request_control_parameters: Option<RateRequestControlParameters>,

    #[serde(default)]
    pub requested_shipment: RequestedShipment,

    /// Restricts the quote to these operating companies, e.g. `FDXE`, `FDXG`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub carrier_codes: Vec<String>,
}

impl RateRequest {
    /// Creates a request for `shipment` billed to `account_number`.
    #[must_use]
    pub const fn new(account_number: AccountNumber, shipment: RequestedShipment) -> Self {
        Self {
            account_number,
            rate_request_control_parameters: None,
            requested_shipment: shipment,
            carrier_codes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RateRequestControlParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_transit_times: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_needed_on_rate_failure: Option<bool>,

    /// e.g. `FREIGHT_GUARANTEE`, `SATURDAY_DELIVERY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_options: Option<String>,

    /// `SERVICENAMETRADITIONAL` or `COMMITASCENDING`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_sort_order: Option<String>,
}

/// The shipment to be rated.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestedShipment {
    #[serde(default)]
    pub shipper: Party,

    #[serde(default)]
    pub recipient: Party,

    /// Omit to quote every available service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_notification_detail: Option<EmailNotificationDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_currency: Option<String>,

    /// `ACCOUNT`, `LIST`, `INCENTIVE`, `PREFERRED`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rate_request_type: Vec<String>,

    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_date_stamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_type: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requested_package_line_items: Vec<RequestedPackageLineItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_shipment: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_detail: Option<PickupDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_handling_charge_detail: Option<VariableHandlingChargeDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_package_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_special_services: Option<ShipmentSpecialServices>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customs_clearance_detail: Option<CustomsClearanceDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_shipment: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_detail: Option<ServiceTypeDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_post_info_detail: Option<SmartPostInfoDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub express_freight_detail: Option<ExpressFreightDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_shipment: Option<bool>,
}

/// Email and SMS notifications sent for the shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotificationDetail {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<EmailNotificationRecipient>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printed_reference: Option<PrintedReference>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotificationRecipient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// e.g. `ON_DELIVERY`, `ON_EXCEPTION`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notification_event_type: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_detail: Option<SmsDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_format_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_notification_recipient_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SmsDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number_country_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrintedReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printed_reference_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Pickup arrangement, used when `pickup_type` is `CONTACT_FEDEX_TO_SCHEDULE`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PickupDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_close_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_origin: Option<Party>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geographical_postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_part_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_part: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_pickup_date_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_pickup_date_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_pickup: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTypeDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_category: Option<String>,
}

/// FedEx Ground Economy (SmartPost) details.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SmartPostInfoDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ancillary_endorsement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_services: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpressFreightDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_confirmation_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shippers_load_and_count: Option<u32>,
}
