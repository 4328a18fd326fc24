//! PayZen platform localisation.

use bon::Builder;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::request_id::REQUEST_ID_NAMESPACE;

/// URL of the PayZen SOAP v5 WSDL.
pub const PAYZEN_WSDL: &str = "https://secure.payzen.eu/vads-ws/v5?wsdl";

/// XML namespace of the PayZen SOAP headers.
pub const PAYZEN_HEADER_NAMESPACE: &str = "http://v5.ws.vads.lyra.com/Header";

/// Where and how requests are sent.
///
/// ```
/// use payzen_kit::config::{PAYZEN_HEADER_NAMESPACE, Platform};
///
/// let platform = Platform::builder()
///     .wsdl("https://sandbox.example.com/vads-ws/v5?wsdl".parse().unwrap())
///     .build();
///
/// assert_eq!(platform.header_namespace, PAYZEN_HEADER_NAMESPACE);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    /// WSDL of the SOAP service.
    pub wsdl: Url,
    /// Namespace of the `shopId`, `requestId`, ... headers.
    #[builder(into, default = PAYZEN_HEADER_NAMESPACE.to_string())]
    #[serde(default = "default_header_namespace")]
    pub header_namespace: String,
    /// UUID namespace of the request identifiers.
    #[builder(into, default = REQUEST_ID_NAMESPACE.to_string())]
    #[serde(default = "default_request_id_namespace")]
    pub request_id_namespace: String,
}

fn default_header_namespace() -> String {
    PAYZEN_HEADER_NAMESPACE.to_string()
}

fn default_request_id_namespace() -> String {
    REQUEST_ID_NAMESPACE.to_string()
}

impl Default for Platform {
    fn default() -> Self {
        Platform::builder()
            .wsdl(Url::parse(PAYZEN_WSDL).expect("PAYZEN_WSDL is a valid URL"))
            .build()
    }
}
