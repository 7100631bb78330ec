//! Turning a completed HTTP response into a decoded value or an error.
//!
//! Protocol-level failure always wins: for any status of 400 or above the
//! body is read as an error payload and surfaced, no matter what else it
//! contains. This module never retries and never logs.

use reqwest::StatusCode;

use crate::decode::DecoderRegistry;
use crate::error::{Error, Result, body_prefix};
use crate::page::List;
use crate::types::{ErrorObject, Listable, WireObject};

/// On an error status, decode the structured error body or fall back to the
/// unparsed form with a truncated body prefix.
fn fail_for_status(registry: &DecoderRegistry, status: StatusCode, body: &[u8]) -> Result<()> {
    if !(status.is_client_error() || status.is_server_error()) {
        return Ok(());
    }
    match registry.decode_as::<ErrorObject>(body) {
        Ok(error) => Err(Error::Api {
            status: status.as_u16(),
            error,
        }),
        Err(_) => Err(Error::UnparsedApi {
            status: status.as_u16(),
            body: body_prefix(body),
        }),
    }
}

/// Interpret a response expected to carry a single object of kind `T`.
pub(crate) fn interpret<T: Listable>(
    registry: &DecoderRegistry,
    status: StatusCode,
    body: &[u8],
) -> Result<T> {
    fail_for_status(registry, status, body)?;
    registry.decode_as(body)
}

/// Interpret a response expected to carry a list envelope of `T`.
pub(crate) fn interpret_list<T: Listable>(
    registry: &DecoderRegistry,
    status: StatusCode,
    body: &[u8],
) -> Result<List<T>> {
    fail_for_status(registry, status, body)?;
    registry.decode_list(body)
}

/// Interpret a bulk dump response: a bare JSON array of `T`.
pub(crate) fn interpret_array<T: Listable>(
    registry: &DecoderRegistry,
    status: StatusCode,
    body: &[u8],
) -> Result<Vec<T>> {
    fail_for_status(registry, status, body)?;
    registry.decode_array(body)
}

/// Interpret a bulk dump response without fixing the element kind.
pub(crate) fn interpret_array_untyped(
    registry: &DecoderRegistry,
    status: StatusCode,
    body: &[u8],
) -> Result<Vec<WireObject>> {
    fail_for_status(registry, status, body)?;
    registry.decode_array_untyped(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Catalog;

    const CATALOG: &[u8] =
        br#"{"object":"catalog","total_values":2,"data":["Plains","Island"]}"#;

    #[test]
    fn success_status_decodes_the_body() {
        let registry = DecoderRegistry::new();
        let catalog: Catalog = interpret(&registry, StatusCode::OK, CATALOG).unwrap();
        assert_eq!(catalog.data, vec!["Plains", "Island"]);
    }

    #[test]
    fn error_status_never_yields_a_value() {
        let registry = DecoderRegistry::new();
        // The body is a perfectly valid catalog; the status still wins.
        let err = interpret::<Catalog>(&registry, StatusCode::BAD_REQUEST, CATALOG).unwrap_err();
        assert!(matches!(err, Error::UnparsedApi { status: 400, .. }));
    }

    #[test]
    fn structured_error_bodies_become_api_errors() {
        let registry = DecoderRegistry::new();
        let body = br#"{"object":"error","status":404,"code":"not_found","details":"no match"}"#;
        let err = interpret::<Catalog>(&registry, StatusCode::NOT_FOUND, body).unwrap_err();
        match err {
            Error::Api { status, error } => {
                assert_eq!(status, 404);
                assert_eq!(error.code, "not_found");
                assert_eq!(error.details, "no match");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_error_bodies_keep_a_100_byte_prefix() {
        let registry = DecoderRegistry::new();
        let body: Vec<u8> = b"<html>Service Unavailable</html>"
            .iter()
            .copied()
            .chain(std::iter::repeat_n(b'.', 200))
            .collect();
        let err =
            interpret::<Catalog>(&registry, StatusCode::INTERNAL_SERVER_ERROR, &body).unwrap_err();
        match err {
            Error::UnparsedApi { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body.len(), 100);
                assert!(body.starts_with("<html>"));
            }
            other => panic!("expected UnparsedApi, got {other:?}"),
        }
    }

    #[test]
    fn decode_failure_on_success_status_is_distinct() {
        let registry = DecoderRegistry::new();
        let err = interpret::<Catalog>(&registry, StatusCode::OK, b"[1,2,3]").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
