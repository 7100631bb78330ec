//! The API's structured error object.

use serde::{Deserialize, Serialize};

/// The error body the API returns alongside a 4xx/5xx status.
///
/// Never handed to callers directly; it arrives wrapped in
/// [`Error::Api`](crate::Error::Api).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// HTTP status the server says it returned.
    pub status: u16,
    /// Machine-readable error code, e.g. `not_found`.
    pub code: String,
    /// Human-readable explanation.
    pub details: String,
    /// Additional machine-readable discriminant for some errors,
    /// e.g. `ambiguous` on fuzzy name lookups.
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    /// Non-fatal issues with the request.
    pub warnings: Option<Vec<String>>,
}
