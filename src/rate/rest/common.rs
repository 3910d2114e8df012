//! Value types shared by the REST rate request and response.

use serde::{Deserialize, Serialize};

use crate::config::AccountNumber;

/// A postal address.
///
/// # Example
///
/// ```rust
/// use fedex_api::rate::rest::Address;
///
/// let address = Address {
///     street_lines: vec!["10 FedEx Parkway".to_string()],
///     city: Some("Collierville".to_string()),
///     state_or_province_code: Some("TN".to_string()),
///     postal_code: Some("38017".to_string()),
///     country_code: Some("US".to_string()),
///     ..Default::default()
/// };
/// assert!(address.residential.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street lines, at most three.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub street_lines: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Two-letter state or province code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_or_province_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Two-letter ISO country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Whether the address is residential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential: Option<bool>,

    /// Identifier from a previous address validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_verification_id: Option<String>,
}

/// A person's name split into parts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPersonName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// Contact details for a party.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_person_name: Option<ParsedPersonName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_extension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax_number: Option<String>,
}

/// A structured phone number.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_identification_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_number: Option<String>,
}

/// A party to the shipment: shipper, recipient, payor, pickup origin.
///
/// FedEx uses the same account/address/contact triple for all of them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<AccountNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

impl Party {
    /// Creates a party identified only by its address.
    #[must_use]
    pub fn at(address: Address) -> Self {
        Self {
            address: Some(address),
            ..Default::default()
        }
    }
}

/// An address with its contact, used for locations and institutions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactAndAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

/// A money amount.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Three-letter currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Money {
    /// Creates an amount in `currency`.
    #[must_use]
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency.into()),
        }
    }
}

/// A weight, `LB` or `KG`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Weight {
    pub units: String,
    pub value: f64,
}

impl Weight {
    /// Creates a weight in pounds.
    #[must_use]
    pub fn pounds(value: f64) -> Self {
        Self {
            units: "LB".to_string(),
            value,
        }
    }

    /// Creates a weight in kilograms.
    #[must_use]
    pub fn kilograms(value: f64) -> Self {
        Self {
            units: "KG".to_string(),
            value,
        }
    }
}

/// Package dimensions, `IN` or `CM`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// A list of option codes, wrapped the way FedEx nests them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Options {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}
