//! Bulk data descriptors.
//!
//! See <https://scryfall.com/docs/api/bulk-data>. The descriptor points at a
//! pre-generated dump file; fetch it with
//! [`BulkDataActions::download`](crate::actions::BulkDataActions::download).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A daily export of card data in a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkData {
    pub id: Uuid,
    /// API URI for this descriptor.
    pub uri: String,
    /// Kind of dump, e.g. `oracle_cards`, `default_cards`, `rulings`.
    #[serde(rename = "type")]
    pub data_type: String,
    pub name: String,
    pub description: String,
    /// Where the dump file itself lives.
    pub download_uri: String,
    /// When the dump was last regenerated.
    pub updated_at: DateTime<Utc>,
    pub compressed_size: Option<u64>,
    pub content_type: String,
    pub content_encoding: String,
}
