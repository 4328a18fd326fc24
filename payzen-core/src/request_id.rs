//! Request identifiers.
//!
//! A PayZen `requestId` is a name-based (version 5) UUID: SHA-1 over the namespace bytes followed
//! by the timestamp string. The same timestamp always yields the same identifier, so two requests
//! sent within the same second share one.

use uuid::Uuid;

use crate::{
    errors::Result,
    types::{RequestId, Timestamp},
};

/// Namespace of every PayZen request identifier.
pub const REQUEST_ID_NAMESPACE: &str = "1546058f-5a25-4334-85ae-e68f2a44bbaf";

/// Generate the v5 UUID of `timestamp` under `namespace`.
///
/// Fails with [`Error::GenerationError`](crate::errors::Error::GenerationError) if `namespace` is
/// not a valid UUID.
///
/// ```
/// use payzen_core::request_id::{REQUEST_ID_NAMESPACE, generate_request_id};
///
/// let id = generate_request_id(REQUEST_ID_NAMESPACE, "2024-01-01T00:00:00Z").unwrap();
/// assert_eq!(id.to_string(), "641ea567-f87e-596f-b044-7fb351c6bf84");
/// ```
pub fn generate_request_id(namespace: &str, timestamp: &str) -> Result<Uuid> {
    let namespace = Uuid::parse_str(namespace)?;
    Ok(Uuid::new_v5(&namespace, timestamp.as_bytes()))
}

impl RequestId {
    pub fn generate(namespace: &str, timestamp: &Timestamp) -> Result<Self> {
        generate_request_id(namespace, timestamp.as_str()).map(RequestId::from)
    }
}
