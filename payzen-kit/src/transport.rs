//! The seam between the toolbox and a SOAP client.
//!
//! A [`Transport`] performs one remote `createPayment` call: it attaches the namespaced headers,
//! sends the body to the WSDL endpoint and returns the response headers with the decoded result.
//! Envelope encoding, XML parsing, timeouts and cancellation are all the transport's business.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::{CreatePayment, CreatePaymentResult, Record, SoapHeader};

/// An outgoing `createPayment` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoapCall {
    /// WSDL of the service to call.
    pub wsdl: Url,
    /// Headers to attach, in wire order.
    pub headers: Vec<SoapHeader>,
    /// The `createPayment` body.
    pub body: CreatePayment,
}

/// The reply to a `createPayment` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoapResponse {
    /// Response header values, by local name.
    pub headers: Record<String>,
    /// The `createPaymentResult`.
    pub result: CreatePaymentResult,
}

/// A SOAP client able to send `createPayment`.
pub trait Transport {
    type Error: std::error::Error;

    fn create_payment(
        &self,
        call: SoapCall,
    ) -> impl Future<Output = Result<SoapResponse, Self::Error>>;
}

impl<T: Transport> Transport for &T {
    type Error = T::Error;

    fn create_payment(
        &self,
        call: SoapCall,
    ) -> impl Future<Output = Result<SoapResponse, Self::Error>> {
        (**self).create_payment(call)
    }
}
