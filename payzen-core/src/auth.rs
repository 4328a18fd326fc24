//! PayZen auth tokens.
//!
//! A token is the standard base64 encoding of HMAC-SHA256 over the request id and the timestamp,
//! keyed by the account secret of the active mode. Requests sign `requestId || timestamp`;
//! responses sign `timestamp || requestId`.

use base64::{Engine, prelude::BASE64_STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::{
    errors::{Error, Result},
    types::AuthToken,
};

type HmacSha256 = Hmac<Sha256>;

/// Which side of the exchange a token authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// A request sent to PayZen: `requestId || timestamp`.
    Outgoing,
    /// A response from PayZen: `timestamp || requestId`.
    Incoming,
}

impl Direction {
    /// The message bytes signed for this direction.
    pub fn message(&self, request_id: &str, timestamp: &str) -> Vec<u8> {
        let (first, second) = match self {
            Direction::Outgoing => (request_id, timestamp),
            Direction::Incoming => (timestamp, request_id),
        };
        [first.as_bytes(), second.as_bytes()].concat()
    }
}

/// Compute the auth token of a request or a response.
///
/// ```
/// use payzen_core::auth::{Direction, build_token};
///
/// let token = build_token("abc-123", "2024-01-01T00:00:00Z", b"topsecret", Direction::Outgoing).unwrap();
/// assert_eq!(token.as_str(), "GgmB8pmAr5HRZdoEH4xMNzCR7EffHpbA8FfSSuf44ok=");
/// ```
pub fn build_token(
    request_id: &str,
    timestamp: &str,
    secret: &[u8],
    direction: Direction,
) -> Result<AuthToken> {
    let mut mac = HmacSha256::new_from_slice(secret)?;
    mac.update(&direction.message(request_id, timestamp));
    Ok(AuthToken(BASE64_STANDARD.encode(mac.finalize().into_bytes())))
}

/// Recompute the token and compare it with `found`.
///
/// Fails with [`Error::AuthenticationError`] carrying both tokens on mismatch.
pub fn verify_token(
    found: &str,
    request_id: &str,
    timestamp: &str,
    secret: &[u8],
    direction: Direction,
) -> Result<()> {
    let expected = build_token(request_id, timestamp, secret, direction)?;

    if bool::from(expected.as_str().as_bytes().ct_eq(found.as_bytes())) {
        Ok(())
    } else {
        Err(Error::AuthenticationError {
            expected: expected.0,
            found: found.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const REQUEST_ID: &str = "abc-123";
    const TIMESTAMP: &str = "2024-01-01T00:00:00Z";
    const SECRET: &[u8] = b"topsecret";

    #[test]
    fn known_tokens() {
        let outgoing = build_token(REQUEST_ID, TIMESTAMP, SECRET, Direction::Outgoing).unwrap();
        let incoming = build_token(REQUEST_ID, TIMESTAMP, SECRET, Direction::Incoming).unwrap();

        assert_eq!(
            outgoing.as_str(),
            "GgmB8pmAr5HRZdoEH4xMNzCR7EffHpbA8FfSSuf44ok="
        );
        assert_eq!(
            incoming.as_str(),
            "0BkO7Dxc5OM043EPnwze7b3Ha28dV+NLUDAEG/xD42A="
        );
        assert_ne!(outgoing, incoming);
    }

    #[test]
    fn message_order() {
        assert_eq!(
            Direction::Outgoing.message("id", "ts"),
            b"idts".to_vec()
        );
        assert_eq!(
            Direction::Incoming.message("id", "ts"),
            b"tsid".to_vec()
        );
    }

    #[test]
    fn commuting_operands_share_a_token() {
        // "1" || "11" == "11" || "1": both directions sign the same bytes.
        let outgoing = build_token("1", "11", SECRET, Direction::Outgoing).unwrap();
        let incoming = build_token("1", "11", SECRET, Direction::Incoming).unwrap();
        assert_eq!(outgoing, incoming);

        let outgoing = build_token("1", "12", SECRET, Direction::Outgoing).unwrap();
        let incoming = build_token("1", "12", SECRET, Direction::Incoming).unwrap();
        assert_ne!(outgoing, incoming);
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let token = build_token(REQUEST_ID, TIMESTAMP, b"test-secret", Direction::Incoming).unwrap();
        let err = verify_token(
            token.as_str(),
            REQUEST_ID,
            TIMESTAMP,
            b"production-secret",
            Direction::Incoming,
        )
        .unwrap_err();

        match err {
            Error::AuthenticationError { expected, found } => {
                assert_eq!(found, token.0);
                assert_ne!(expected, found);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_message_never_contains_secret() {
        let err = verify_token("bogus", REQUEST_ID, TIMESTAMP, SECRET, Direction::Incoming)
            .unwrap_err();
        let message = err.to_string();

        assert!(message.contains("bogus"));
        assert!(!message.contains("topsecret"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn directions_differ(
            request_id in "[a-f0-9-]{1,36}",
            timestamp in "[0-9T:Z-]{1,20}",
            secret in any::<Vec<u8>>(),
        ) {
            // Operands that commute concatenate to the same message in both orders.
            prop_assume!(format!("{request_id}{timestamp}") != format!("{timestamp}{request_id}"));

            let outgoing = build_token(&request_id, &timestamp, &secret, Direction::Outgoing).unwrap();
            let incoming = build_token(&request_id, &timestamp, &secret, Direction::Incoming).unwrap();

            prop_assert_ne!(outgoing, incoming);
        }

        #[test]
        fn incoming_round_trip(
            request_id in "[a-f0-9-]{1,36}",
            timestamp in "[0-9T:Z-]{1,20}",
            secret in any::<Vec<u8>>(),
        ) {
            let outgoing = build_token(&request_id, &timestamp, &secret, Direction::Outgoing).unwrap();
            prop_assert!(verify_token(outgoing.as_str(), &request_id, &timestamp, &secret, Direction::Outgoing).is_ok());

            // The platform answers with the operands swapped.
            let mut mac = HmacSha256::new_from_slice(&secret).unwrap();
            mac.update(timestamp.as_bytes());
            mac.update(request_id.as_bytes());
            let answer = BASE64_STANDARD.encode(mac.finalize().into_bytes());

            prop_assert!(verify_token(&answer, &request_id, &timestamp, &secret, Direction::Incoming).is_ok());
        }

        #[test]
        fn tampered_token_is_rejected(
            request_id in "[a-f0-9-]{1,36}",
            timestamp in "[0-9T:Z-]{1,20}",
            secret in any::<Vec<u8>>(),
            index in 0usize..44,
            replacement in prop::char::range('!', '~'),
        ) {
            let token = build_token(&request_id, &timestamp, &secret, Direction::Incoming).unwrap();
            let mut chars: Vec<char> = token.as_str().chars().collect();
            prop_assume!(chars[index] != replacement);
            chars[index] = replacement;
            let tampered: String = chars.into_iter().collect();

            let result = verify_token(&tampered, &request_id, &timestamp, &secret, Direction::Incoming);
            let is_auth_error = matches!(result, Err(Error::AuthenticationError { .. }));
            prop_assert!(is_auth_error);
        }
    }
}
