//! Shipment-level special services and customs clearance.

use serde::{Deserialize, Serialize};

use crate::rate::rest::common::{
    ContactAndAddress, Money, Options, Party, PhoneNumber, Weight,
};

/// Special services requested for the whole shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentSpecialServices {
    /// Service codes, e.g. `HOLD_AT_LOCATION`, `SATURDAY_DELIVERY`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_service_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_shipment_detail: Option<ReturnShipmentDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_on_invoice_acceptance_detail: Option<DeliveryOnInvoiceAcceptanceDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_traffic_in_arms_regulations_detail:
        Option<InternationalTrafficInArmsRegulationsDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_shipment_detail: Option<PendingShipmentDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_at_location_detail: Option<HoldAtLocationDetail>,

    #[serde(
        default,
        rename = "shipmentCODDetail",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipment_cod_detail: Option<ShipmentCodDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_dry_ice_detail: Option<ShipmentDryIceDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_controlled_export_detail: Option<InternationalControlledExportDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_delivery_premium_detail: Option<HomeDeliveryPremiumDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReturnShipmentDetail {
    /// e.g. `PRINT_RETURN_LABEL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeliveryOnInvoiceAcceptanceDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Party>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InternationalTrafficInArmsRegulationsDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_or_exemption_number: Option<String>,
}

/// Details for a shipment created now and completed later.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PendingShipmentDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_shipment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_options: Option<Options>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_document_specification: Option<RecommendedDocumentSpecification>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_label_detail: Option<EmailLabelDetail>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub document_references: Vec<DocumentReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_time_stamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_dry_ice_detail: Option<ShipmentDryIceDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RecommendedDocumentSpecification {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EmailLabelDetail {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<EmailLabelRecipient>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailLabelRecipient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_requested: Option<Options>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<EmailLocale>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EmailLocale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

/// Hold the shipment at a FedEx location for pickup by the recipient.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HoldAtLocationDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_contact_and_address: Option<ContactAndAddress>,

    /// e.g. `FEDEX_OFFICE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
}

/// Collect-on-delivery for the whole shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentCodDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_transportation_charges_detail: Option<AddTransportationChargesDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_recipient: Option<Party>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remit_to_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_collection_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_institution_contact_and_address: Option<ContactAndAddress>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_reference_indicator_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddTransportationChargesDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_level_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_level_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDryIceDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InternationalControlledExportDetail {
    /// e.g. `DEA_036`, `WAREHOUSE_WITHDRAWAL`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub export_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HomeDeliveryPremiumDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_timestamp: Option<String>,

    /// `APPOINTMENT`, `DATE_CERTAIN` or `EVENING`.
    #[serde(
        default,
        rename = "homedeliveryPremiumType",
        skip_serializing_if = "Option::is_none"
    )]
    pub home_delivery_premium_type: Option<String>,
}

/// Customs information for international shipments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomsClearanceDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commercial_invoice: Option<CommercialInvoice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freight_on_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duties_payment: Option<DutiesPayment>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commodities: Vec<Commodity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommercialInvoice {
    /// e.g. `SOLD`, `GIFT`, `SAMPLE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_purpose: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DutiesPayment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payor: Option<Payor>,

    /// `SENDER`, `RECIPIENT` or `THIRD_PARTY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_party: Option<Party>,
}

/// One commodity line of a customs declaration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Commodity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customs_value: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_pieces: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_manufacture: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_units: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harmonized_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
}
