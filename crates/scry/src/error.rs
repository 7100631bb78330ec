//! Error types for the scry crate.
//!
//! Every failure is surfaced to the immediate caller as a variant callers
//! can branch on; nothing is retried, swallowed, or turned into an empty
//! result inside the crate.
//!
//! # Example
//!
//! ```no_run
//! use scry::{CardName, Error, ScryfallClient};
//!
//! # async fn example() {
//! let client = ScryfallClient::new();
//!
//! match client.cards().named(CardName::exact("Black Lotus"), None).await {
//!     Ok(card) => println!("{}", card.name),
//!     Err(Error::Api { status: 404, error }) => {
//!         eprintln!("not found: {}", error.details);
//!     }
//!     Err(e) => eprintln!("error: {e}"),
//! }
//! # }
//! ```

use thiserror::Error;

use crate::types::{ErrorObject, ObjectKind};

/// How many bytes of an offending payload are kept in error values.
///
/// Truncation is intentional; bulk bodies can be hundreds of megabytes.
pub(crate) const BODY_PREFIX_LEN: usize = 100;

/// The error type for Scryfall API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP call itself failed: DNS, connection, TLS, timeout.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API reported a failure and its body decoded as a structured
    /// error object.
    #[error("Scryfall API returned error ({status}): {}", error.details)]
    Api {
        /// HTTP status of the response.
        status: u16,
        /// The decoded error body.
        error: ErrorObject,
    },

    /// The API reported a failure but its body was not a well-formed error
    /// object. Carries at most the first 100 bytes of the body.
    #[error("Scryfall API returned unparsable error ({status}): {body:?}")]
    UnparsedApi {
        /// HTTP status of the response.
        status: u16,
        /// Truncated, lossily-decoded body prefix.
        body: String,
    },

    /// A success response did not match the expected shape. Carries at most
    /// the first 100 bytes of the body.
    #[error("failed to decode response: {source} (body: {body:?})")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Truncated, lossily-decoded body prefix.
        body: String,
    },

    /// A payload carried a well-formed but wrong discriminator for the
    /// requested shape.
    #[error("expected a {expected} object, got {found}")]
    UnexpectedObject {
        expected: ObjectKind,
        found: ObjectKind,
    },

    /// A payload carried a discriminator outside the closed set of kinds.
    #[error("unknown object discriminator {0:?}")]
    UnknownObject(String),

    /// The caller supplied arguments that can never form a valid request.
    /// Raised before any network call.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

/// A specialized Result type for Scryfall API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Lossily decode the leading bytes of a payload for inclusion in errors.
pub(crate) fn body_prefix(body: &[u8]) -> String {
    let end = body.len().min(BODY_PREFIX_LEN);
    String::from_utf8_lossy(&body[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_truncates_to_100_bytes() {
        let long = vec![b'x'; 5000];
        assert_eq!(body_prefix(&long).len(), 100);
        assert_eq!(body_prefix(b"short"), "short");
    }
}
