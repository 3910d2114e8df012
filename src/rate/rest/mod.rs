//! Rate quotes over the FedEx REST API.
//!
//! [`RateRequest`] mirrors the JSON body of `POST /rate/v1/rates/quotes`
//! and [`RateResponse`] the reply. [`RateRequest::rate`] performs the call
//! with a bearer token from [`authorize`](crate::auth::authorize).
//!
//! Field names follow the FedEx JSON schema in `snake_case`; optional
//! fields are skipped when unset so the body only contains what the caller
//! filled in.

mod common;
mod package;
mod quote;
mod request;
mod response;
mod special_services;

pub use common::{
    Address, Contact, ContactAndAddress, Dimensions, Money, Options, ParsedPersonName, Party,
    PhoneNumber, Weight,
};
pub use package::{
    AlcoholDetail, BatteryDetail, ContentRecord, DangerousGoodsContainer, DangerousGoodsDetail,
    HazardousCommodity, HazardousCommodityDescription, HazardousCommodityOptions,
    HazardousQuantity, InnerReceptacle, PackageCodDetail, PackageSpecialServices, Packaging,
    PackingDetails, RequestedPackageLineItem, VariableHandlingChargeDetail,
};
pub use quote::RATE_QUOTES_PATH;
pub use request::{
    EmailNotificationDetail, EmailNotificationRecipient, ExpressFreightDetail, PickupDetail,
    PrintedReference, RateRequest, RateRequestControlParameters, RequestedShipment,
    ServiceTypeDetail, SmartPostInfoDetail, SmsDetail,
};
pub use response::{
    Alert, Commit, CurrencyExchangeRate, CustomerMessage, DateDetail, OperationalDetail,
    RateOutput, RateReplyDetail, RateResponse, RatedShipmentDetail, ServiceDescription,
    ServiceName, ShipmentRateDetail, Surcharge,
};
pub use special_services::{
    AddTransportationChargesDetail, CommercialInvoice, Commodity, CustomsClearanceDetail,
    DeliveryOnInvoiceAcceptanceDetail, DocumentReference, DutiesPayment, EmailLabelDetail,
    EmailLabelRecipient, EmailLocale, HoldAtLocationDetail, HomeDeliveryPremiumDetail,
    InternationalControlledExportDetail, InternationalTrafficInArmsRegulationsDetail,
    PendingShipmentDetail, Payor, RecommendedDocumentSpecification, ReturnShipmentDetail,
    ShipmentCodDetail, ShipmentDryIceDetail, ShipmentSpecialServices,
};
