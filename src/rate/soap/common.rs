//! Value types shared by the SOAP rate request and reply.
//!
//! The SOAP schema carries every scalar as element text, so amounts and
//! counts stay `String`s exactly as FedEx writes them.

use serde::{Deserialize, Serialize};

/// A money amount.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Money {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// A weight, `LB` or `KG`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Weight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Weight {
    /// Creates a weight with the given units.
    #[must_use]
    pub fn new(units: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            units: Some(units.into()),
            value: Some(value.into()),
        }
    }
}

/// The WSDL version a request targets, echoed back in the reply.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Version {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
}

impl Version {
    /// Rate service `crs` version 28.0.0.
    #[must_use]
    pub fn rate_v28() -> Self {
        Self {
            service_id: Some("crs".to_string()),
            major: Some("28".to_string()),
            intermediate: Some("0".to_string()),
            minor: Some("0".to_string()),
        }
    }
}

/// Caller-supplied identifier echoed back in the reply.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_transaction_id: Option<String>,
}

impl TransactionDetail {
    #[must_use]
    pub fn new(customer_transaction_id: impl Into<String>) -> Self {
        Self {
            customer_transaction_id: Some(customer_transaction_id.into()),
        }
    }
}
