//! Card migration objects.
//!
//! See <https://scryfall.com/docs/api/migrations>.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a migrated card was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationStrategy {
    /// The old ID now redirects to `new_scryfall_id`.
    Merge,
    /// The old card was removed entirely.
    Delete,
}

/// A record of a card object that was merged into another or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Migration {
    pub id: Uuid,
    pub uri: String,
    pub performed_at: NaiveDate,
    pub migration_strategy: MigrationStrategy,
    pub old_scryfall_id: Uuid,
    pub new_scryfall_id: Option<Uuid>,
    /// Explanatory note from Scryfall staff, when present.
    pub note: Option<String>,
}
