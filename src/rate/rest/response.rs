//! The REST rate quote response.
//!
//! Every field is optional: FedEx omits most of them depending on the
//! service and the requested rate types, and an error response carries only
//! `transactionId` and `errors`.

use serde::{Deserialize, Serialize};

use crate::error::ApiErrorDetail;
use crate::rate::rest::common::Weight;

/// Body of a `/rate/v1/rates/quotes` response.
///
/// # Example
///
/// ```rust
/// use fedex_api::RateResponse;
///
/// let response: RateResponse = serde_json::from_str(r#"{
///     "transactionId": "624deea6-b709-470c-8c39-4b5511281492",
///     "output": {
///         "rateReplyDetails": [{
///             "serviceType": "FEDEX_GROUND",
///             "ratedShipmentDetails": [{"rateType": "ACCOUNT", "totalNetCharge": 24.81}]
///         }]
///     }
/// }"#).unwrap();
///
/// assert_eq!(response.cheapest_net_charge(), Some(24.81));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_transaction_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<RateOutput>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorDetail>,
}

impl RateResponse {
    /// Returns the quoted services, or an empty slice.
    #[must_use]
    pub fn rate_reply_details(&self) -> &[RateReplyDetail] {
        match &self.output {
            Some(output) => &output.rate_reply_details,
            None => &[],
        }
    }

    /// Returns the lowest `totalNetCharge` across all quoted services.
    #[must_use]
    pub fn cheapest_net_charge(&self) -> Option<f64> {
        self.rate_reply_details()
            .iter()
            .flat_map(|detail| &detail.rated_shipment_details)
            .filter_map(|rated| rated.total_net_charge)
            .min_by(f64::total_cmp)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rate_reply_details: Vec<RateReplyDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<Alert>,
}

/// A non-fatal warning attached to the quote.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// `NOTE` or `WARNING`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
}

/// The quote for one service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateReplyDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_type: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customer_messages: Vec<CustomerMessage>,

    /// One entry per requested rate type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rated_shipment_details: Vec<RatedShipmentDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymously_allowable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operational_detail: Option<OperationalDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_option_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_description: Option<ServiceDescription>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<Commit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Charges for one rate type (`ACCOUNT`, `LIST`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatedShipmentDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated_weight_method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_base_charge: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_net_charge: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_vat_charge: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_net_fed_ex_charge: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duties_and_taxes: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_net_charge_with_duties_and_taxes: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duties_taxes_and_fees: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_ancillary_fees_and_taxes: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_rate_detail: Option<ShipmentRateDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRateDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_zone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim_divisor: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_surcharge_percent: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_surcharges: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_freight_discount: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sur_charges: Vec<Surcharge>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_exchange_rate: Option<CurrencyExchangeRate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_billing_weight: Option<Weight>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Surcharge {
    /// e.g. `FUEL`, `RESIDENTIAL_DELIVERY`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub surcharge_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyExchangeRate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub into_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

/// Routing and transit information for a quoted service.
///
/// Location, service area and code lists arrive as JSON arrays.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OperationalDetail {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub origin_location_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commit_days: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scac: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub origin_service_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_day: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub origin_location_numbers: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub astra_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delivery_eligibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ineligible_for_money_back_guarantee: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_transit_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub astra_planned_service_level: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination_location_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination_location_state_or_province_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination_location_numbers: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_delivery_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub country_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub state_or_province_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ursa_prefix_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ursa_suffix_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination_service_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub origin_postal_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_transit_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<ServiceName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operating_org_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub astra_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ServiceName {
    /// `long`, `medium` or `short`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub name_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_detail: Option<DateDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_cxs_format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "transactionId": "624deea6-b709-470c-8c39-4b5511281492",
        "customerTransactionId": "AnyCo_order123456789",
        "output": {
            "quoteDate": "2024-05-01",
            "encoded": false,
            "alerts": [{"code": "VIRTUAL.RESPONSE", "message": "This is a Virtual Response.", "alertType": "NOTE"}],
            "rateReplyDetails": [
                {
                    "serviceType": "FEDEX_2_DAY",
                    "serviceName": "FedEx 2Day",
                    "packagingType": "YOUR_PACKAGING",
                    "ratedShipmentDetails": [{
                        "rateType": "ACCOUNT",
                        "ratedWeightMethod": "ACTUAL",
                        "totalBaseCharge": 45.12,
                        "totalNetCharge": 51.9,
                        "totalNetFedExCharge": 51.9,
                        "currency": "USD",
                        "shipmentRateDetail": {
                            "rateZone": "US001O",
                            "dimDivisor": 0,
                            "fuelSurchargePercent": 15.0,
                            "totalSurcharges": 6.78,
                            "surCharges": [{"type": "FUEL", "description": "Fuel Surcharge", "amount": 6.78}],
                            "totalBillingWeight": {"units": "LB", "value": 10},
                            "currencyExchangeRate": {"fromCurrency": "USD", "intoCurrency": "USD", "rate": 1.0}
                        }
                    }],
                    "operationalDetail": {
                        "originLocationIds": ["COSA"],
                        "commitDays": [""],
                        "serviceCode": "49",
                        "airportId": "COS",
                        "originServiceAreas": ["A1"],
                        "deliveryDay": "FRI",
                        "originLocationNumbers": [0],
                        "destinationPostalCode": "75063",
                        "deliveryDate": "2024-05-03T20:00:00",
                        "deliveryEligibilities": [""],
                        "ineligibleForMoneyBackGuarantee": false,
                        "destinationLocationIds": ["DDFWA"],
                        "destinationLocationStateOrProvinceCodes": ["TX"],
                        "transitTime": "TWO_DAYS",
                        "destinationLocationNumbers": [0],
                        "countryCodes": ["US"],
                        "stateOrProvinceCodes": ["TX"],
                        "destinationServiceAreas": ["A2"],
                        "originPostalCodes": ["80913"]
                    },
                    "serviceDescription": {
                        "serviceId": "EP1000000003",
                        "code": "03",
                        "names": [{"type": "long", "encoding": "utf-8", "value": "FedEx 2Day"}],
                        "operatingOrgCodes": ["FXE"]
                    },
                    "commit": {"dateDetail": {"dayOfWeek": "FRI", "dayCxsFormat": "Fri"}}
                },
                {
                    "serviceType": "FEDEX_GROUND",
                    "ratedShipmentDetails": [{"rateType": "ACCOUNT", "totalNetCharge": 24.81}]
                }
            ]
        }
    }"#;

    #[test]
    fn test_deserializes_full_response() {
        let response: RateResponse = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(
            response.customer_transaction_id.as_deref(),
            Some("AnyCo_order123456789")
        );
        let output = response.output.as_ref().unwrap();
        assert_eq!(output.alerts[0].alert_type.as_deref(), Some("NOTE"));
        assert_eq!(output.rate_reply_details.len(), 2);

        let two_day = &output.rate_reply_details[0];
        let rated = &two_day.rated_shipment_details[0];
        assert_eq!(rated.total_net_fed_ex_charge, Some(51.9));

        let detail = rated.shipment_rate_detail.as_ref().unwrap();
        assert_eq!(detail.sur_charges[0].surcharge_type.as_deref(), Some("FUEL"));
        assert_eq!(detail.total_billing_weight.as_ref().unwrap().units, "LB");
        assert_eq!(
            two_day.service_description.as_ref().unwrap().names[0].name_type.as_deref(),
            Some("long")
        );
        assert_eq!(
            two_day
                .commit
                .as_ref()
                .and_then(|c| c.date_detail.as_ref())
                .and_then(|d| d.day_of_week.as_deref()),
            Some("FRI")
        );
    }

    #[test]
    fn test_operational_detail_lists_deserialize() {
        let response: RateResponse = serde_json::from_str(SAMPLE).unwrap();
        let operational = response.rate_reply_details()[0]
            .operational_detail
            .as_ref()
            .unwrap();

        assert_eq!(operational.origin_location_ids, vec!["COSA"]);
        assert_eq!(operational.origin_location_numbers, vec![0]);
        assert_eq!(operational.destination_location_numbers, vec![0]);
        assert_eq!(operational.destination_location_state_or_province_codes, vec!["TX"]);
        assert_eq!(operational.origin_postal_codes, vec!["80913"]);
        assert_eq!(operational.transit_time.as_deref(), Some("TWO_DAYS"));
        assert_eq!(operational.ineligible_for_money_back_guarantee, Some(false));
    }

    #[test]
    fn test_operational_detail_minimal_reply() {
        let response: RateResponse = serde_json::from_str(
            r#"{"output":{"rateReplyDetails":[{"operationalDetail":{"originLocationIds":["COSA"],"originLocationNumbers":[0]}}]}}"#,
        )
        .unwrap();

        let operational = response.rate_reply_details()[0]
            .operational_detail
            .as_ref()
            .unwrap();
        assert_eq!(operational.origin_location_ids, vec!["COSA"]);
        assert!(operational.country_codes.is_empty());
    }

    #[test]
    fn test_cheapest_net_charge() {
        let response: RateResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.cheapest_net_charge(), Some(24.81));

        assert_eq!(RateResponse::default().cheapest_net_charge(), None);
        assert!(RateResponse::default().rate_reply_details().is_empty());
    }

    #[test]
    fn test_error_response_deserializes() {
        let response: RateResponse = serde_json::from_str(
            r#"{"transactionId":"x","errors":[{"code":"SERVICE.UNAVAILABLE.ERROR","message":"Service unavailable."}]}"#,
        )
        .unwrap();

        assert!(response.output.is_none());
        assert_eq!(
            response.errors[0].code.as_deref(),
            Some("SERVICE.UNAVAILABLE.ERROR")
        );
    }
}
