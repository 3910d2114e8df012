//! SOAP 1.1 envelope serialization for the rate web service.

use serde::Serialize;

use crate::rate::soap::request::RateXmlRequest;

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
/// SOAP 1.1 encoding namespace.
pub const SOAP_ENC_NS: &str = "http://schemas.xmlsoap.org/soap/encoding/";
/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// XML Schema namespace.
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";
/// Rate service v28 namespace, the envelope's default namespace.
pub const RATE_V28_NS: &str = "http://fedex.com/ws/rate/v28";

const ENVELOPE_TAG: &str = "SOAP-ENV:Envelope";

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "@xmlns:SOAP-ENV")]
    soap_env: &'static str,
    #[serde(rename = "@xmlns:SOAP-ENC")]
    soap_enc: &'static str,
    #[serde(rename = "@xmlns:xsi")]
    xsi: &'static str,
    #[serde(rename = "@xmlns:xsd")]
    xsd: &'static str,
    #[serde(rename = "@xmlns")]
    default_ns: &'static str,
    #[serde(rename = "SOAP-ENV:Body")]
    body: Body<'a>,
}

#[derive(Serialize)]
struct Body<'a> {
    #[serde(rename = "RateRequest")]
    rate_request: &'a RateXmlRequest,
}

/// Serializes `request` into a complete `SOAP-ENV:Envelope`.
///
/// The XML declaration is not included; the transport prepends it.
///
/// # Errors
///
/// Returns the `quick-xml` error if serialization fails.
pub fn to_envelope(request: &RateXmlRequest) -> Result<String, quick_xml::DeError> {
    let envelope = Envelope {
        soap_env: SOAP_ENV_NS,
        soap_enc: SOAP_ENC_NS,
        xsi: XSI_NS,
        xsd: XSD_NS,
        default_ns: RATE_V28_NS,
        body: Body {
            rate_request: request,
        },
    };
    quick_xml::se::to_string_with_root(ENVELOPE_TAG, &envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{WebCredential, WebServiceCredentials};
    use crate::config::AccountNumber;
    use crate::rate::soap::common::Weight;
    use crate::rate::soap::request::{Address, Party, RequestedShipment};

    fn request() -> RateXmlRequest {
        let credentials = WebServiceCredentials::new(
            WebCredential::new("user-key", "user-password"),
            AccountNumber::new("510087020").unwrap(),
            "119238439",
        );
        RateXmlRequest::new(
            &credentials,
            RequestedShipment {
                dropoff_type: Some("REGULAR_PICKUP".to_string()),
                total_weight: Some(Weight::new("LB", "10.0")),
                shipper: Some(Party {
                    address: Some(Address {
                        street_lines: vec!["10 Fed Ex Pkwy".to_string(), "Suite 2".to_string()],
                        postal_code: Some("38017".to_string()),
                        country_code: Some("US".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_envelope_declares_namespaces() {
        let xml = to_envelope(&request()).unwrap();

        assert!(xml.starts_with("<SOAP-ENV:Envelope "));
        assert!(xml.ends_with("</SOAP-ENV:Envelope>"));
        assert!(xml.contains(r#"xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/""#));
        assert!(xml.contains(r#"xmlns:SOAP-ENC="http://schemas.xmlsoap.org/soap/encoding/""#));
        assert!(xml.contains(r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#));
        assert!(xml.contains(r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema""#));
        assert!(xml.contains(r#"xmlns="http://fedex.com/ws/rate/v28""#));
        assert!(!xml.starts_with("<?xml"));
    }

    #[test]
    fn test_envelope_wraps_rate_request_in_body() {
        let xml = to_envelope(&request()).unwrap();

        assert!(xml.contains("<SOAP-ENV:Body><RateRequest><WebAuthenticationDetail>"));
        assert!(xml.contains(
            "<UserCredential><Key>user-key</Key><Password>user-password</Password></UserCredential>"
        ));
        assert!(xml.contains(
            "<ClientDetail><AccountNumber>510087020</AccountNumber><MeterNumber>119238439</MeterNumber></ClientDetail>"
        ));
        assert!(xml.contains(
            "<Version><ServiceId>crs</ServiceId><Major>28</Major><Intermediate>0</Intermediate><Minor>0</Minor></Version>"
        ));
        assert!(xml.contains("</RateRequest></SOAP-ENV:Body>"));
    }

    #[test]
    fn test_envelope_omits_unset_fields_and_repeats_lists() {
        let xml = to_envelope(&request()).unwrap();

        assert!(!xml.contains("ParentCredential"));
        assert!(!xml.contains("TransactionDetail"));
        assert!(!xml.contains("Recipient"));
        assert!(xml.contains("<StreetLines>10 Fed Ex Pkwy</StreetLines><StreetLines>Suite 2</StreetLines>"));
        assert!(xml.contains("<TotalWeight><Units>LB</Units><Value>10.0</Value></TotalWeight>"));
    }

    #[test]
    fn test_envelope_escapes_text() {
        let mut request = request();
        request.web_authentication_detail.user_credential.password = "a<b&c".to_string();

        let xml = to_envelope(&request).unwrap();
        assert!(xml.contains("<Password>a&lt;b&amp;c</Password>"));
    }
}
