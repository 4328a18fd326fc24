//! SOAP header types of a PayZen exchange.
//!
//! Both the request and the response carry the same five headers. The request side is built with
//! [`RequestHeader::sign`]; the response side is parsed with [`ResponseHeader::from_headers`] and
//! checked by [`crate::verification::validate_response_headers`].

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    auth::{self, Direction},
    errors::{Error, Result},
    request_id,
    types::{AuthToken, Mode, Record, RequestId, Timestamp},
};

/// Names of the PayZen SOAP headers. Case-sensitive on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderField {
    ShopId,
    RequestId,
    Timestamp,
    Mode,
    AuthToken,
}

impl HeaderField {
    /// Headers a response must carry, in the order they are checked.
    pub const REQUIRED: [HeaderField; 5] = [
        HeaderField::ShopId,
        HeaderField::Timestamp,
        HeaderField::RequestId,
        HeaderField::Mode,
        HeaderField::AuthToken,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderField::ShopId => "shopId",
            HeaderField::RequestId => "requestId",
            HeaderField::Timestamp => "timestamp",
            HeaderField::Mode => "mode",
            HeaderField::AuthToken => "authToken",
        }
    }
}

impl Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One namespaced SOAP header entry, ready to be attached by a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapHeader {
    pub namespace: String,
    pub name: HeaderField,
    pub value: String,
}

/// The headers of an outgoing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    pub shop_id: String,
    pub request_id: RequestId,
    pub timestamp: Timestamp,
    pub mode: Mode,
    pub auth_token: AuthToken,
}

impl RequestHeader {
    /// Derive the request id from `timestamp` and sign the pair with `secret`.
    ///
    /// `secret` must be the one of `mode`; the token is not tied to the mode otherwise.
    pub fn sign(
        shop_id: impl Into<String>,
        mode: Mode,
        namespace: &str,
        timestamp: Timestamp,
        secret: &[u8],
    ) -> Result<Self> {
        let request_id = RequestId::from(request_id::generate_request_id(
            namespace,
            timestamp.as_str(),
        )?);
        let auth_token = auth::build_token(
            request_id.as_str(),
            timestamp.as_str(),
            secret,
            Direction::Outgoing,
        )?;

        Ok(RequestHeader {
            shop_id: shop_id.into(),
            request_id,
            timestamp,
            mode,
            auth_token,
        })
    }

    /// Header name/value pairs, in wire order.
    pub fn entries(&self) -> [(HeaderField, &str); 5] {
        [
            (HeaderField::ShopId, self.shop_id.as_str()),
            (HeaderField::RequestId, self.request_id.as_str()),
            (HeaderField::Timestamp, self.timestamp.as_str()),
            (HeaderField::Mode, self.mode.as_str()),
            (HeaderField::AuthToken, self.auth_token.as_str()),
        ]
    }

    /// Render the headers as SOAP header entries under `namespace`.
    pub fn soap_headers(&self, namespace: &str) -> Vec<SoapHeader> {
        self.entries()
            .into_iter()
            .map(|(name, value)| SoapHeader {
                namespace: namespace.to_string(),
                name,
                value: value.to_string(),
            })
            .collect()
    }
}

/// The headers of a response, as read from the wire.
///
/// `mode` stays a raw string: a mode mismatch surfaces as an authentication failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    pub shop_id: String,
    pub request_id: RequestId,
    pub timestamp: Timestamp,
    pub mode: String,
    pub auth_token: AuthToken,
}

impl ResponseHeader {
    /// Parse a header set, failing on the first missing name in [`HeaderField::REQUIRED`] order.
    pub fn from_headers(headers: &Record<String>) -> Result<Self> {
        let get = |name: HeaderField| {
            headers
                .get(name.as_str())
                .cloned()
                .ok_or(Error::MissingHeaderError(name))
        };

        // Fields are read in `REQUIRED` order.
        Ok(ResponseHeader {
            shop_id: get(HeaderField::ShopId)?,
            timestamp: Timestamp(get(HeaderField::Timestamp)?),
            request_id: RequestId(get(HeaderField::RequestId)?),
            mode: get(HeaderField::Mode)?,
            auth_token: AuthToken(get(HeaderField::AuthToken)?),
        })
    }
}
