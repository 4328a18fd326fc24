//! Miscellaneous common types used throughout the PayZen codebase.

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a key-value map, e.g. the header set of a SOAP response. The key is a `String`.
pub type Record<V> = std::collections::HashMap<String, V>;

/// Represents any JSON value. Used for structured log data.
pub type AnyJson = serde_json::Value;

/// Format of every PayZen timestamp: UTC, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The PayZen platform mode.
///
/// Selects which account secret signs the requests.
///
/// ```
/// use payzen_core::types::Mode;
///
/// assert_eq!("TEST".parse::<Mode>().unwrap(), Mode::Test);
/// assert_eq!(Mode::Production.to_string(), "PRODUCTION");
/// assert_eq!(serde_json::to_value(Mode::Test).unwrap(), serde_json::json!("TEST"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    #[default]
    Test,
    Production,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Test => "TEST",
            Mode::Production => "PRODUCTION",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is neither `TEST` nor `PRODUCTION`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported PayZen mode `{0}`; expected TEST or PRODUCTION")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TEST" => Ok(Mode::Test),
            "PRODUCTION" => Ok(Mode::Production),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// A PayZen timestamp, `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Values read from a response are kept verbatim, since the auth token is computed over the exact string.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use payzen_core::types::Timestamp;
///
/// let ts = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
/// assert_eq!(ts.as_str(), "2024-01-01T00:00:00Z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub String);

impl Timestamp {
    /// Formats a UTC date-time, dropping any sub-second component.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Timestamp(datetime.format(TIMESTAMP_FORMAT).to_string())
    }

    /// The current UTC time.
    pub fn now() -> Self {
        Timestamp::from_datetime(Utc::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp(value.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Timestamp(value)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `requestId` of a PayZen exchange.
///
/// Outgoing identifiers are v5 UUIDs, see [`crate::request_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for RequestId {
    fn from(value: Uuid) -> Self {
        RequestId(value.hyphenated().to_string())
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        RequestId(value.to_string())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A base64-encoded HMAC-SHA256 tag, as carried by the `authToken` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(pub String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
