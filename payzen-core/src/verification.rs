//! Response header validation.
//!
//! A PayZen response must not be trusted before its headers pass [`validate_response_headers`].

use crate::{
    auth::{self, Direction},
    errors::Result,
    types::{Record, RequestId, ResponseHeader, Timestamp},
};

/// Check that all five headers are present and that `authToken` matches the INCOMING token
/// recomputed with `secret`.
///
/// Returns the request id and the timestamp the platform answered with.
pub fn validate_response_headers(
    headers: &Record<String>,
    secret: &[u8],
) -> Result<(RequestId, Timestamp)> {
    let header = ResponseHeader::from_headers(headers)?;
    verify_response_header(&header, secret)?;
    Ok((header.request_id, header.timestamp))
}

/// Check the auth token of an already parsed response header.
pub fn verify_response_header(header: &ResponseHeader, secret: &[u8]) -> Result<()> {
    auth::verify_token(
        header.auth_token.as_str(),
        header.request_id.as_str(),
        header.timestamp.as_str(),
        secret,
        Direction::Incoming,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Error, types::HeaderField};

    const SECRET: &[u8] = b"topsecret";

    fn signed_headers() -> Record<String> {
        [
            ("shopId", "12345678"),
            ("requestId", "abc-123"),
            ("timestamp", "2024-01-01T00:00:00Z"),
            ("mode", "TEST"),
            ("authToken", "0BkO7Dxc5OM043EPnwze7b3Ha28dV+NLUDAEG/xD42A="),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn accepts_signed_response() {
        let (request_id, timestamp) = validate_response_headers(&signed_headers(), SECRET).unwrap();

        assert_eq!(request_id, RequestId::from("abc-123"));
        assert_eq!(timestamp, Timestamp::from("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn rejects_each_missing_header() {
        for field in HeaderField::REQUIRED {
            let mut headers = signed_headers();
            headers.remove(field.as_str());

            match validate_response_headers(&headers, SECRET) {
                Err(Error::MissingHeaderError(missing)) => assert_eq!(missing, field),
                other => panic!("expected missing `{field}`, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_missing_mode_with_valid_token() {
        let mut headers = signed_headers();
        headers.remove("mode");

        let result = validate_response_headers(&headers, SECRET);
        assert!(matches!(
            result,
            Err(Error::MissingHeaderError(HeaderField::Mode))
        ));
    }

    #[test]
    fn rejects_outgoing_token_in_response() {
        let mut headers = signed_headers();
        headers.insert(
            "authToken".to_string(),
            "GgmB8pmAr5HRZdoEH4xMNzCR7EffHpbA8FfSSuf44ok=".to_string(),
        );

        match validate_response_headers(&headers, SECRET) {
            Err(Error::AuthenticationError { expected, found }) => {
                assert_eq!(expected, "0BkO7Dxc5OM043EPnwze7b3Ha28dV+NLUDAEG/xD42A=");
                assert_eq!(found, "GgmB8pmAr5HRZdoEH4xMNzCR7EffHpbA8FfSSuf44ok=");
            }
            other => panic!("expected an authentication error, got {other:?}"),
        }
    }

    #[test]
    fn header_names_are_case_sensitive() {
        let mut headers = signed_headers();
        let token = headers.remove("authToken").unwrap();
        headers.insert("authtoken".to_string(), token);

        assert!(matches!(
            validate_response_headers(&headers, SECRET),
            Err(Error::MissingHeaderError(HeaderField::AuthToken))
        ));
    }
}
