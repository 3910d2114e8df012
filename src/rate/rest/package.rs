//! Package line items and their special services.

use serde::{Deserialize, Serialize};

use crate::rate::rest::common::{Dimensions, Money, PhoneNumber, Weight};

/// One package of a REST rate request.
///
/// # Example
///
/// ```rust
/// use fedex_api::rate::rest::{Dimensions, RequestedPackageLineItem, Weight};
///
/// let package = RequestedPackageLineItem {
///     weight: Weight::pounds(22.0),
///     dimensions: Some(Dimensions {
///         length: Some(10),
///         width: Some(8),
///         height: Some(2),
///         units: Some("IN".to_string()),
///     }),
///     ..Default::default()
/// };
/// assert!(package.package_special_services.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestedPackageLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_packaging_type: Option<String>,

    /// Number of identical packages this line item stands for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_package_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_record: Vec<ContentRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_value: Option<Money>,

    #[serde(default)]
    pub weight: Weight,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_handling_charge_detail: Option<VariableHandlingChargeDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_special_services: Option<PackageSpecialServices>,
}

/// An item packed in a package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentRecord {
    pub item_number: String,
    pub received_quantity: u32,
    pub description: String,
    pub part_number: String,
}

/// A handling charge added on top of the rate.
///
/// Used both per shipment and per package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariableHandlingChargeDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_level_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_value: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_element_basis: Option<String>,
}

/// Special services requested for a single package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageSpecialServices {
    /// Service codes, e.g. `SIGNATURE_OPTION`, `DRY_ICE`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_service_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol_detail: Option<AlcoholDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dangerous_goods_detail: Option<DangerousGoodsDetail>,

    #[serde(
        default,
        rename = "packageCODDetail",
        skip_serializing_if = "Option::is_none"
    )]
    pub package_cod_detail: Option<PackageCodDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece_count_verification_box_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub battery_details: Vec<BatteryDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_ice_weight: Option<Weight>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlcoholDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol_recipient_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper_agreement_type: Option<String>,
}

/// Dangerous goods declaration for a package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DangerousGoodsDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offeror: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact_number: Option<String>,

    /// e.g. `HAZARDOUS_MATERIALS`, `BATTERY`, `LIMITED_QUANTITIES_COMMODITIES`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<DangerousGoodsContainer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<Packaging>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DangerousGoodsContainer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offeror: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hazardous_commodities: Vec<HazardousCommodity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_containers: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact_number: Option<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<Packaging>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radioactive_container_class: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Packaging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HazardousCommodity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<HazardousQuantity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner_receptacles: Vec<InnerReceptacle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<HazardousCommodityOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<HazardousCommodityDescription>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HazardousQuantity {
    /// `GROSS` or `NET`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InnerReceptacle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<HazardousQuantity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HazardousCommodityOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_text_option: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_supplied_label_text: Option<String>,
}

/// Regulatory description of a hazardous commodity.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HazardousCommodityDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub processing_options: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsidiary_classes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing_details: Option<PackingDetails>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reportable_quantity: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,

    /// UN identification number, e.g. `UN1845`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing_group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proper_shipping_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazard_class: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackingDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_aircraft_only: Option<bool>,
}

/// Collect-on-delivery amount for a package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageCodDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_collection_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_collection_type: Option<String>,
}

/// Lithium battery declaration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatteryDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulatory_sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_package_serializes_weight_only() {
        let package = RequestedPackageLineItem {
            weight: Weight::kilograms(3.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&package).unwrap();
        assert_eq!(value, json!({"weight": {"units": "KG", "value": 3.0}}));
    }

    #[test]
    fn test_package_cod_detail_uses_upper_case_key() {
        let services = PackageSpecialServices {
            special_service_types: vec!["COD".to_string()],
            package_cod_detail: Some(PackageCodDetail {
                cod_collection_amount: Some(Money::new(100.0, "USD")),
                cod_collection_type: Some("CASH".to_string()),
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&services).unwrap();
        assert_eq!(value["packageCODDetail"]["codCollectionType"], "CASH");
        assert_eq!(value["packageCODDetail"]["codCollectionAmount"]["amount"], 100.0);
        assert!(value.get("packageCodDetail").is_none());
    }

    #[test]
    fn test_dangerous_goods_nesting() {
        let json = r#"{
            "options": ["HAZARDOUS_MATERIALS"],
            "containers": [{
                "numberOfContainers": 1,
                "hazardousCommodities": [{
                    "quantity": {"quantityType": "NET", "amount": 2.5, "units": "KG"},
                    "description": {"id": "UN1845", "hazardClass": "9", "reportableQuantity": false}
                }]
            }]
        }"#;

        let detail: DangerousGoodsDetail = serde_json::from_str(json).unwrap();
        let commodity = &detail.containers[0].hazardous_commodities[0];
        assert_eq!(commodity.quantity.as_ref().unwrap().amount, Some(2.5));
        assert_eq!(
            commodity.description.as_ref().unwrap().id.as_deref(),
            Some("UN1845")
        );
    }
}
