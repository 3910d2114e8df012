//! The SOAP rate reply.
//!
//! Element names are matched without their namespace prefix, so replies
//! using `v28:RateReply` or a default namespace decode the same way.

use serde::Deserialize;

use crate::rate::soap::common::{Money, TransactionDetail, Version, Weight};

/// A decoded SOAP response envelope.
///
/// The body holds either a [`Fault`] or a [`RateReply`]; both decode
/// successfully and are exposed through [`fault`](Self::fault) and
/// [`reply`](Self::reply).
///
/// # Example
///
/// ```rust
/// use fedex_api::RateXmlResponse;
///
/// let xml = r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
///   <SOAP-ENV:Body>
///     <RateReply xmlns="http://fedex.com/ws/rate/v28">
///       <HighestSeverity>SUCCESS</HighestSeverity>
///     </RateReply>
///   </SOAP-ENV:Body>
/// </SOAP-ENV:Envelope>"#;
///
/// let response = RateXmlResponse::from_xml(xml).unwrap();
/// assert!(response.fault().is_none());
/// assert_eq!(response.reply().unwrap().highest_severity.as_deref(), Some("SUCCESS"));
/// ```
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct RateXmlResponse {
    #[serde(rename = "Body", default)]
    pub body: ResponseBody,
}

impl RateXmlResponse {
    /// Decodes a response envelope.
    ///
    /// # Errors
    ///
    /// Returns the `quick-xml` error if `xml` is not a SOAP envelope.
    pub fn from_xml(xml: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str(xml)
    }

    /// Returns the SOAP fault, if the call failed at the SOAP layer.
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        self.body.fault.as_ref()
    }

    /// Returns the rate reply, if present.
    #[must_use]
    pub const fn reply(&self) -> Option<&RateReply> {
        self.body.rate_reply.as_ref()
    }
}

/// Contents of `SOAP-ENV:Body`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ResponseBody {
    #[serde(rename = "Fault", default)]
    pub fault: Option<Fault>,

    #[serde(rename = "RateReply", default)]
    pub rate_reply: Option<RateReply>,
}

/// A SOAP 1.1 fault.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Fault {
    pub faultcode: Option<String>,
    pub faultstring: Option<FaultString>,
    pub detail: Option<FaultDetail>,
}

impl Fault {
    /// Returns the fault message text.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.faultstring.as_ref().map(|s| s.text.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct FaultString {
    #[serde(rename = "$text", default)]
    pub text: String,

    /// Value of `xml:lang`.
    #[serde(rename = "@lang", default)]
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FaultDetail {
    pub cause: Option<String>,
    pub code: Option<String>,
    pub desc: Option<String>,
}

/// The `RateReply` element.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct RateReply {
    #[serde(rename = "@xmlns")]
    pub xmlns: Option<String>,

    /// `SUCCESS`, `NOTE`, `WARNING`, `ERROR` or `FAILURE`.
    pub highest_severity: Option<String>,

    pub notifications: Vec<Notification>,

    pub transaction_detail: Option<TransactionDetail>,

    pub version: Option<Version>,

    pub rate_reply_details: Vec<RateReplyDetail>,
}

impl RateReply {
    /// Returns `true` if `HighestSeverity` is `ERROR` or `FAILURE`.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.highest_severity.as_deref(), Some("ERROR" | "FAILURE"))
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Notification {
    pub severity: Option<String>,
    pub source: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
    pub localized_message: Option<String>,
}

/// The quote for one service.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct RateReplyDetail {
    pub service_type: Option<String>,
    pub service_description: Option<ServiceDescription>,
    pub packaging_type: Option<String>,
    pub destination_airport_id: Option<String>,
    pub ineligible_for_money_back_guarantee: Option<String>,
    pub signature_option: Option<String>,
    pub actual_rate_type: Option<String>,
    pub rated_shipment_details: Vec<RatedShipmentDetail>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceDescription {
    pub service_type: Option<String>,
    pub code: Option<String>,
    pub names: Vec<ServiceName>,
    pub description: Option<String>,
    pub astra_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceName {
    #[serde(rename = "Type")]
    pub name_type: Option<String>,
    pub encoding: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct RatedShipmentDetail {
    pub effective_net_discount: Option<Money>,
    pub shipment_rate_detail: Option<ShipmentRateDetail>,
    pub rated_packages: Vec<RatedPackage>,
}

/// Shipment totals for one rate type.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShipmentRateDetail {
    pub rate_type: Option<String>,
    pub rate_zone: Option<String>,
    pub rated_weight_method: Option<String>,
    pub dim_divisor: Option<String>,
    pub fuel_surcharge_percent: Option<String>,
    pub total_billing_weight: Option<Weight>,
    pub total_base_charge: Option<Money>,
    pub total_freight_discounts: Option<Money>,
    pub total_net_freight: Option<Money>,
    pub total_surcharges: Option<Money>,
    pub total_net_fed_ex_charge: Option<Money>,
    pub total_taxes: Option<Money>,
    pub total_net_charge: Option<Money>,
    pub total_rebates: Option<Money>,
    pub total_duties_and_taxes: Option<Money>,
    pub total_ancillary_fees_and_taxes: Option<Money>,
    pub total_duties_taxes_and_fees: Option<Money>,
    pub total_net_charge_with_duties_and_taxes: Option<Money>,
    pub surcharges: Vec<Surcharge>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct RatedPackage {
    pub group_number: Option<String>,
    pub effective_net_discount: Option<Money>,
    pub package_rate_detail: Option<PackageRateDetail>,
}

/// Per-package charges for one rate type.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct PackageRateDetail {
    pub rate_type: Option<String>,
    pub rated_weight_method: Option<String>,
    pub billing_weight: Option<Weight>,
    pub base_charge: Option<Money>,
    pub total_freight_discounts: Option<Money>,
    pub net_freight: Option<Money>,
    pub total_surcharges: Option<Money>,
    pub net_fed_ex_charge: Option<Money>,
    pub total_taxes: Option<Money>,
    pub net_charge: Option<Money>,
    pub total_rebates: Option<Money>,
    pub surcharges: Vec<Surcharge>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Surcharge {
    pub surcharge_type: Option<String>,
    pub level: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Money>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Header/>
  <SOAP-ENV:Body>
    <RateReply xmlns="http://fedex.com/ws/rate/v28">
      <HighestSeverity>WARNING</HighestSeverity>
      <Notifications>
        <Severity>WARNING</Severity>
        <Source>crs</Source>
        <Code>556</Code>
        <Message>There are no valid services available.</Message>
        <LocalizedMessage>There are no valid services available.</LocalizedMessage>
      </Notifications>
      <Notifications>
        <Severity>NOTE</Severity>
        <Source>crs</Source>
        <Code>819</Code>
        <Message>The origin state/province code has been changed.</Message>
      </Notifications>
      <TransactionDetail>
        <CustomerTransactionId>order-42</CustomerTransactionId>
      </TransactionDetail>
      <Version>
        <ServiceId>crs</ServiceId>
        <Major>28</Major>
        <Intermediate>0</Intermediate>
        <Minor>0</Minor>
      </Version>
      <RateReplyDetails>
        <ServiceType>FEDEX_GROUND</ServiceType>
        <ServiceDescription>
          <ServiceType>FEDEX_GROUND</ServiceType>
          <Code>92</Code>
          <Names>
            <Type>long</Type>
            <Encoding>utf-8</Encoding>
            <Value>FedEx Ground</Value>
          </Names>
          <Names>
            <Type>short</Type>
            <Encoding>utf-8</Encoding>
            <Value>FG</Value>
          </Names>
          <Description>Ground</Description>
        </ServiceDescription>
        <PackagingType>YOUR_PACKAGING</PackagingType>
        <SignatureOption>SERVICE_DEFAULT</SignatureOption>
        <ActualRateType>PAYOR_ACCOUNT_PACKAGE</ActualRateType>
        <RatedShipmentDetails>
          <EffectiveNetDiscount>
            <Currency>USD</Currency>
            <Amount>0.0</Amount>
          </EffectiveNetDiscount>
          <ShipmentRateDetail>
            <RateType>PAYOR_ACCOUNT_PACKAGE</RateType>
            <RateZone>2</RateZone>
            <TotalBillingWeight>
              <Units>LB</Units>
              <Value>10.0</Value>
            </TotalBillingWeight>
            <TotalNetCharge>
              <Currency>USD</Currency>
              <Amount>12.47</Amount>
            </TotalNetCharge>
            <Surcharges>
              <SurchargeType>FUEL</SurchargeType>
              <Level>PACKAGE</Level>
              <Description>Fuel</Description>
              <Amount>
                <Currency>USD</Currency>
                <Amount>1.22</Amount>
              </Amount>
            </Surcharges>
          </ShipmentRateDetail>
          <RatedPackages>
            <GroupNumber>0</GroupNumber>
            <PackageRateDetail>
              <RateType>PAYOR_ACCOUNT_PACKAGE</RateType>
              <NetCharge>
                <Currency>USD</Currency>
                <Amount>12.47</Amount>
              </NetCharge>
            </PackageRateDetail>
          </RatedPackages>
        </RatedShipmentDetails>
      </RateReplyDetails>
    </RateReply>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;

    const FAULT: &str = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <soapenv:Fault>
      <faultcode>soapenv:Server</faultcode>
      <faultstring xml:lang="en">Fault</faultstring>
      <detail>
        <cause>UnrecoverableClientError</cause>
        <code>SchemaError</code>
        <desc>validation failure for RateRequest Error:cvc-complex-type.2.4.a</desc>
      </detail>
    </soapenv:Fault>
  </soapenv:Body>
</soapenv:Envelope>"#;

    #[test]
    fn test_decodes_rate_reply() {
        let response = RateXmlResponse::from_xml(REPLY).unwrap();
        assert!(response.fault().is_none());

        let reply = response.reply().unwrap();
        assert_eq!(reply.xmlns.as_deref(), Some("http://fedex.com/ws/rate/v28"));
        assert_eq!(reply.highest_severity.as_deref(), Some("WARNING"));
        assert!(!reply.is_error());
        assert_eq!(reply.notifications.len(), 2);
        assert_eq!(reply.notifications[1].code.as_deref(), Some("819"));
        assert_eq!(
            reply
                .transaction_detail
                .as_ref()
                .and_then(|t| t.customer_transaction_id.as_deref()),
            Some("order-42")
        );
        assert_eq!(reply.version, Some(Version::rate_v28()));

        let detail = &reply.rate_reply_details[0];
        assert_eq!(detail.service_type.as_deref(), Some("FEDEX_GROUND"));
        assert_eq!(detail.service_description.as_ref().unwrap().names.len(), 2);

        let rated = &detail.rated_shipment_details[0];
        let shipment = rated.shipment_rate_detail.as_ref().unwrap();
        assert_eq!(
            shipment.total_net_charge.as_ref().unwrap().amount.as_deref(),
            Some("12.47")
        );
        assert_eq!(
            shipment.surcharges[0].amount.as_ref().unwrap().amount.as_deref(),
            Some("1.22")
        );
        assert_eq!(
            rated.rated_packages[0]
                .package_rate_detail
                .as_ref()
                .unwrap()
                .net_charge
                .as_ref()
                .unwrap()
                .amount
                .as_deref(),
            Some("12.47")
        );
    }

    #[test]
    fn test_decodes_fault() {
        let response = RateXmlResponse::from_xml(FAULT).unwrap();
        assert!(response.reply().is_none());

        let fault = response.fault().unwrap();
        assert_eq!(fault.faultcode.as_deref(), Some("soapenv:Server"));
        assert_eq!(fault.message(), Some("Fault"));
        assert_eq!(fault.faultstring.as_ref().unwrap().lang.as_deref(), Some("en"));
        assert_eq!(
            fault.detail.as_ref().and_then(|d| d.code.as_deref()),
            Some("SchemaError")
        );
    }

    #[test]
    fn test_error_severity() {
        let reply = RateReply {
            highest_severity: Some("FAILURE".to_string()),
            ..Default::default()
        };
        assert!(reply.is_error());
    }

    #[test]
    fn test_rejects_non_xml() {
        assert!(RateXmlResponse::from_xml("Service Unavailable").is_err());
    }
}
