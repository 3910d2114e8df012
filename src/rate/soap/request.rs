//! The SOAP `RateRequest` element.
//!
//! Field order matters: the web service validates element sequence against
//! its WSDL, and the serializer writes fields in declaration order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::auth::{WebCredential, WebServiceCredentials};
use crate::rate::soap::common::{TransactionDetail, Version, Weight};

/// Body of a SOAP rate call, the `RateRequest` element.
///
/// # Example
///
/// ```rust
/// use fedex_api::{AccountNumber, RateXmlRequest, WebCredential, WebServiceCredentials};
/// use fedex_api::rate::soap::{RequestedShipment, Weight};
///
/// let credentials = WebServiceCredentials::new(
///     WebCredential::new("dev-key", "dev-password"),
///     AccountNumber::new("510087020").unwrap(),
///     "119238439",
/// );
/// let request = RateXmlRequest::new(
///     &credentials,
///     RequestedShipment {
///         dropoff_type: Some("REGULAR_PICKUP".to_string()),
///         total_weight: Some(Weight::new("LB", "10.0")),
///         ..Default::default()
///     },
/// );
///
/// assert_eq!(request.version.major.as_deref(), Some("28"));
/// assert_eq!(request.client_detail.meter_number, "119238439");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RateXmlRequest {
    pub web_authentication_detail: WebAuthenticationDetail,

    pub client_detail: ClientDetail,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_detail: Option<TransactionDetail>,

    #[serde(default)]
    pub version: Version,

    #[serde(default)]
    pub requested_shipment: RequestedShipment,
}

impl RateXmlRequest {
    /// Creates a request for `shipment`, authenticated with `credentials` and
    /// targeting rate service version 28.0.0.
    #[must_use]
    pub fn new(credentials: &WebServiceCredentials, shipment: RequestedShipment) -> Self {
        Self {
            web_authentication_detail: WebAuthenticationDetail {
                parent_credential: credentials.parent.as_ref().map(Credential::from),
                user_credential: Credential::from(&credentials.user),
            },
            client_detail: ClientDetail {
                account_number: credentials.account_number.to_string(),
                meter_number: credentials.meter_number.clone(),
                software_id: None,
            },
            transaction_detail: None,
            version: Version::rate_v28(),
            requested_shipment: shipment,
        }
    }

    /// Sets the customer transaction ID echoed back in the reply.
    #[must_use]
    pub fn with_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_detail = Some(TransactionDetail::new(id));
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WebAuthenticationDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_credential: Option<Credential>,
    #[serde(default)]
    pub user_credential: Credential,
}

/// A key/password pair as written into the envelope.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Credential {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub password: String,
}

impl From<&WebCredential> for Credential {
    fn from(credential: &WebCredential) -> Self {
        Self {
            key: credential.key.clone(),
            password: credential.password.clone(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &self.key)
            .field("password", &"*****")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ClientDetail {
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub meter_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_id: Option<String>,
}

/// The shipment to be rated.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RequestedShipment {
    /// `xs:dateTime`, e.g. `2024-05-01T10:00:00-05:00`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<Weight>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper: Option<Party>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Party>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_charges_payment: Option<ShippingChargesPayment>,

    /// `LIST`, `PREFERRED`, `NONE`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rate_request_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_count: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requested_package_line_items: Vec<PackageLineItem>,
}

/// Shipper or recipient.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Party {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    /// Written as one `StreetLines` element per line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub street_lines: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_or_province_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,

    /// `true` or `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ShippingChargesPayment {
    /// `SENDER`, `RECIPIENT` or `THIRD_PARTY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payor: Option<Payor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Payor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_party: Option<ResponsibleParty>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ResponsibleParty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tins: Option<Tins>,
}

/// Taxpayer identification.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Tins {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tin_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// One package of a SOAP rate request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PackageLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_package_count: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_records: Vec<ContentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ContentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
