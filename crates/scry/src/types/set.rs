//! Set objects.
//!
//! See <https://scryfall.com/docs/api/sets>.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The category a set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    Core,
    Expansion,
    Masters,
    Masterpiece,
    FromTheVault,
    Spellbook,
    PremiumDeck,
    DuelDeck,
    DraftInnovation,
    TreasureChest,
    Commander,
    Planechase,
    Archenemy,
    Vanguard,
    Funny,
    Starter,
    Box,
    Promo,
    Token,
    Memorabilia,
    Alchemy,
    Arsenal,
    Minigame,
}

/// A group of related printings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Set {
    pub id: Uuid,
    /// The unique three-to-six-letter set code.
    pub code: String,
    pub mtgo_code: Option<String>,
    pub arena_code: Option<String>,
    pub tcgplayer_id: Option<i64>,
    pub name: String,
    pub set_type: SetType,
    pub released_at: Option<NaiveDate>,
    pub block_code: Option<String>,
    pub block: Option<String>,
    /// Code of the parent set, for promo/token sets.
    pub parent_set_code: Option<String>,
    pub card_count: u64,
    /// Denominator for the set's printed collector numbers.
    pub printed_size: Option<u64>,
    pub digital: bool,
    pub foil_only: bool,
    pub nonfoil_only: Option<bool>,
    pub icon_svg_uri: String,
    /// Search URI returning this set's cards, paginated.
    pub search_uri: String,
    pub scryfall_uri: String,
    pub uri: String,
}
