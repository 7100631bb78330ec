//! Ruling objects.
//!
//! See <https://scryfall.com/docs/api/rulings>.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An Oracle ruling, set release note, or Scryfall note for a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruling {
    /// Oracle identity of the card the ruling applies to.
    pub oracle_id: Uuid,
    /// `wotc` or `scryfall`.
    pub source: String,
    /// Date the ruling was published.
    pub published_at: NaiveDate,
    /// The ruling text.
    pub comment: String,
}
