//! The `createPayment` flow.
//!
//! For details, see the [`Toolbox`] struct documentation.

use bon::Builder;
use serde_json::json;

use crate::{
    account::Account,
    config::Platform,
    errors::{Error, PaymentError},
    logging::Logger,
    transport::{SoapCall, Transport},
    types::{
        CreatePayment, CreatePaymentParams, CreatePaymentResult, HeaderField, Record,
        RequestHeader, RequestId, Timestamp,
    },
    verification,
};

/// A `createPayment` result whose response headers passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedPayment {
    /// Request id echoed by the platform.
    pub request_id: RequestId,
    /// Timestamp of the response.
    pub timestamp: Timestamp,
    pub result: CreatePaymentResult,
}

/// Sends authenticated `createPayment` requests for one account.
///
/// [`create_payment`](Toolbox::create_payment) runs the whole exchange:
///
/// 1. Assemble the request field groups.
/// 2. Derive the `requestId` from the current timestamp and sign it ([`sign_request`](Toolbox::sign_request)).
/// 3. Send the call through the [`Transport`], exactly once.
/// 4. Validate the response headers ([`check_response_headers`](Toolbox::check_response_headers)).
///
/// A non-zero response code is not an error: the verified result is returned and the caller
/// decides. Missing headers, bad tokens and transport failures are returned as errors.
#[derive(Builder, Debug, Clone)]
pub struct Toolbox<T: Transport> {
    pub account: Account,
    pub transport: T,
    #[builder(default)]
    pub platform: Platform,
    #[builder(default)]
    pub logger: Logger,
}

impl<T: Transport> Toolbox<T> {
    /// Build the request headers for `timestamp`.
    pub fn sign_request(&self, timestamp: Timestamp) -> Result<RequestHeader, Error> {
        let header = RequestHeader::sign(
            self.account.shop_id(),
            self.account.mode(),
            &self.platform.request_id_namespace,
            timestamp,
            self.account.secret(),
        )?;

        self.logger.notice(
            "PayZen SOAP headers built",
            serde_json::to_value(&header).ok(),
        );

        Ok(header)
    }

    /// Validate the headers of a response against the active mode's secret.
    pub fn check_response_headers(
        &self,
        headers: &Record<String>,
    ) -> Result<(RequestId, Timestamp), Error> {
        let verified = verification::validate_response_headers(headers, self.account.secret())
            .inspect_err(|err| {
                if matches!(err, Error::AuthenticationError { .. }) {
                    self.logger.error(&err.to_string(), None);
                }
            })?;

        self.logger.notice(
            &format!(
                "Response authToken is correct (`{}`)",
                headers
                    .get(HeaderField::AuthToken.as_str())
                    .map(String::as_str)
                    .unwrap_or_default()
            ),
            None,
        );

        Ok(verified)
    }

    /// Create a payment, timestamped now.
    pub async fn create_payment(
        &self,
        params: &CreatePaymentParams,
    ) -> Result<VerifiedPayment, PaymentError<T::Error>> {
        self.create_payment_at(params, Timestamp::now()).await
    }

    /// Create a payment with an explicit timestamp, used both as `submissionDate` and to derive
    /// the `requestId`.
    pub async fn create_payment_at(
        &self,
        params: &CreatePaymentParams,
        timestamp: Timestamp,
    ) -> Result<VerifiedPayment, PaymentError<T::Error>> {
        self.logger.notice("createPayment requested", None);

        let body = CreatePayment::assemble(params, timestamp.clone());
        let header = self.sign_request(timestamp)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Sending createPayment: request_id='{}', mode='{}', wsdl='{}'",
            header.request_id,
            header.mode,
            self.platform.wsdl
        );

        self.logger.notice(
            "SOAP request is ready, sending it",
            Some(json!({ "wsdl": self.platform.wsdl.as_str() })),
        );

        let response = self
            .transport
            .create_payment(SoapCall {
                wsdl: self.platform.wsdl.clone(),
                headers: header.soap_headers(&self.platform.header_namespace),
                body,
            })
            .await
            .map_err(PaymentError::Transport)?;

        self.logger.notice(
            "Response headers received",
            serde_json::to_value(&response.headers).ok(),
        );

        let (request_id, timestamp) = self.check_response_headers(&response.headers)?;

        let common = &response.result.common_response;
        if common.is_success() {
            self.logger
                .notice("Response received, request was successful: code is 0", None);
        } else {
            self.logger.warning(
                &format!(
                    "Response received, request wasn't successful: code is {}, message is {}",
                    common.response_code,
                    common.response_code_detail.as_deref().unwrap_or("[NONE]")
                ),
                None,
            );
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "createPayment verified: request_id='{}', response_code={}",
            request_id,
            common.response_code
        );

        Ok(VerifiedPayment {
            request_id,
            timestamp,
            result: response.result,
        })
    }
}
