//! Catalog objects.

use serde::{Deserialize, Serialize};

/// An array of Magic datapoints, such as all creature types or all card
/// names. See <https://scryfall.com/docs/api/catalogs>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// API URI for this catalog, when the server provides one.
    pub uri: Option<String>,
    /// Number of entries in `data`.
    pub total_values: u64,
    /// The datapoints themselves.
    pub data: Vec<String>,
}
