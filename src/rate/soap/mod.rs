//! Rate quotes over the legacy FedEx SOAP web service (rate v28).
//!
//! [`RateXmlRequest`] is the `RateRequest` element; [`RateXmlRequest::rate`]
//! wraps it in a SOAP 1.1 envelope, posts it and decodes the reply into a
//! [`RateXmlResponse`]. Authentication travels inside the envelope, built
//! from [`WebServiceCredentials`](crate::WebServiceCredentials).

mod common;
mod envelope;
mod quote;
mod request;
mod response;

pub use common::{Money, TransactionDetail, Version, Weight};
pub use envelope::{to_envelope, RATE_V28_NS, SOAP_ENC_NS, SOAP_ENV_NS, XSD_NS, XSI_NS};
pub use quote::RATE_PATH;
pub use request::{
    Address, ClientDetail, Contact, ContentRecord, Credential, Dimensions, PackageLineItem, Party,
    Payor, RateXmlRequest, RequestedShipment, ResponsibleParty, ShippingChargesPayment, Tins,
    WebAuthenticationDetail,
};
pub use response::{
    Fault, FaultDetail, FaultString, Notification, PackageRateDetail, RateReply,
    RateReplyDetail, RateXmlResponse, RatedPackage, RatedShipmentDetail, ResponseBody,
    ServiceDescription, ServiceName, ShipmentRateDetail, Surcharge,
};
