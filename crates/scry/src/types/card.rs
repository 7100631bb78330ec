//! Card objects and their nested pieces.
//!
//! See <https://scryfall.com/docs/api/cards>. A card carries three groups of
//! fields: core identifiers, gameplay properties shared by all printings of
//! the card, and print-specific properties. Multi-face cards additionally
//! embed [`CardFace`] objects, and cards that reference other pieces (melds,
//! tokens, combo partners) embed [`RelatedCard`] summaries.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{Color, Game};

/// Print layout of a card.
///
/// See <https://scryfall.com/docs/api/layouts#layout>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Normal,
    Split,
    Flip,
    Transform,
    ModalDfc,
    Meld,
    Leveler,
    Class,
    Saga,
    Adventure,
    Planar,
    Scheme,
    Vanguard,
    Token,
    DoubleFacedToken,
    Emblem,
    Augment,
    Host,
    ArtSeries,
    DoubleSided,
    ReversibleCard,
}

/// The frame artwork generation a printing uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    #[serde(rename = "1993")]
    Y1993,
    #[serde(rename = "1997")]
    Y1997,
    #[serde(rename = "2003")]
    Y2003,
    #[serde(rename = "2015")]
    Y2015,
    #[serde(rename = "future")]
    Future,
}

/// A frame effect applied on top of the base [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameEffect {
    #[serde(rename = "")]
    None,
    Legendary,
    Miracle,
    Nyxborn,
    Nyxtouched,
    Draft,
    Devoid,
    Tombstone,
    Colorshifted,
    Inverted,
    Sunmoondfc,
    Compasslanddfc,
    Originpwdfc,
    Mooneldrazidfc,
    Moonreversemoondfc,
    Waxingandwaningmoondfc,
    Showcase,
    Extendedart,
    Companion,
    Fullart,
    Etched,
    Snow,
    Lesson,
    Textless,
    Shatteredglass,
    Convertdfc,
    Fandfc,
    Upsidedowndfc,
    Gilded,
}

/// Border color of a printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderColor {
    Black,
    Borderless,
    Gold,
    Silver,
    White,
}

/// A finish a printing is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    Foil,
    Nonfoil,
    Etched,
    Glossy,
}

/// State of a printing's image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStatus {
    Missing,
    Placeholder,
    Lowres,
    HighresScan,
}

/// Rarity of a printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
    Special,
    Bonus,
}

/// The holographic security stamp on a printing, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityStamp {
    Oval,
    Triangle,
    Acorn,
    Arena,
    Circle,
    Heart,
}

/// Legality of a card in one play format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Legality {
    Legal,
    NotLegal,
    Restricted,
    Banned,
}

/// A summary of a card closely related to another card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedCard {
    pub id: Uuid,
    /// How the parts relate: `token`, `meld_part`, `meld_result`, or
    /// `combo_piece`.
    pub component: String,
    pub name: String,
    pub type_line: String,
    pub uri: String,
}

/// One face of a split, flip, transform, modal, or meld card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    pub artist: Option<String>,
    pub artist_id: Option<Uuid>,
    pub cmc: Option<f64>,
    pub color_indicator: Option<Vec<Color>>,
    pub colors: Option<Vec<Color>>,
    pub flavor_name: Option<String>,
    pub flavor_text: Option<String>,
    pub illustration_id: Option<Uuid>,
    pub image_uris: Option<HashMap<String, String>>,
    pub layout: Option<Layout>,
    pub loyalty: Option<String>,
    pub mana_cost: String,
    pub name: String,
    pub oracle_id: Option<Uuid>,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub printed_name: Option<String>,
    pub printed_text: Option<String>,
    pub printed_type_line: Option<String>,
    pub toughness: Option<String>,
    pub type_line: Option<String>,
    pub watermark: Option<String>,
}

/// Preview information for a spoiled printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub source: String,
    pub source_uri: String,
    pub previewed_at: NaiveDate,
}

/// An individual Magic card printing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    // Core identifiers
    pub arena_id: Option<i64>,
    pub id: Uuid,
    /// Language code of this printing, e.g. `en`.
    pub lang: String,
    pub mtgo_id: Option<i64>,
    pub mtgo_foil_id: Option<i64>,
    pub multiverse_ids: Option<Vec<i64>>,
    pub tcgplayer_id: Option<i64>,
    pub tcgplayer_etched_id: Option<i64>,
    pub cardmarket_id: Option<i64>,
    /// Identity shared by every printing of the same card.
    pub oracle_id: Option<Uuid>,
    pub prints_search_uri: String,
    pub rulings_uri: String,
    pub scryfall_uri: String,
    pub uri: String,
    // Gameplay fields
    pub all_parts: Option<Vec<RelatedCard>>,
    pub card_faces: Option<Vec<CardFace>>,
    pub cmc: Option<f64>,
    pub colors: Option<Vec<Color>>,
    pub color_identity: Vec<Color>,
    pub color_indicator: Option<Vec<Color>>,
    pub edhrec_rank: Option<i64>,
    pub foil: bool,
    pub hand_modifier: Option<String>,
    pub keywords: Vec<String>,
    pub layout: Layout,
    /// Legality per format name (`standard`, `modern`, ...).
    pub legalities: HashMap<String, Legality>,
    pub life_modifier: Option<String>,
    pub loyalty: Option<String>,
    pub mana_cost: Option<String>,
    pub name: String,
    pub nonfoil: bool,
    pub oracle_text: Option<String>,
    pub oversized: bool,
    pub penny_rank: Option<i64>,
    pub power: Option<String>,
    pub produced_mana: Option<Vec<String>>,
    pub reserved: bool,
    pub toughness: Option<String>,
    pub type_line: Option<String>,
    // Print fields
    pub artist: Option<String>,
    pub artist_ids: Option<Vec<Uuid>>,
    pub booster: bool,
    pub border_color: BorderColor,
    pub card_back_id: Option<Uuid>,
    pub collector_number: String,
    /// True for cards on the content-warning list; such cards omit imagery.
    pub content_warning: Option<bool>,
    pub digital: bool,
    pub finishes: Vec<Finish>,
    pub flavor_name: Option<String>,
    pub flavor_text: Option<String>,
    pub frame_effect: Option<FrameEffect>,
    pub frame_effects: Option<Vec<FrameEffect>>,
    pub frame: Frame,
    pub full_art: bool,
    pub games: Vec<Game>,
    pub highres_image: bool,
    pub illustration_id: Option<Uuid>,
    pub image_status: ImageStatus,
    pub image_uris: Option<HashMap<String, String>>,
    /// Daily price guide keyed by currency/finish, e.g. `usd`, `usd_foil`.
    pub prices: Option<HashMap<String, Option<Decimal>>>,
    pub printed_name: Option<String>,
    pub printed_text: Option<String>,
    pub printed_type_line: Option<String>,
    pub promo: bool,
    pub promo_types: Option<Vec<String>>,
    pub purchase_uris: Option<HashMap<String, String>>,
    pub rarity: Rarity,
    pub related_uris: Option<HashMap<String, String>>,
    pub released_at: NaiveDate,
    pub reprint: bool,
    pub scryfall_set_uri: String,
    pub set_name: String,
    pub set_search_uri: String,
    /// Category of the printing's set. Left as a string: card payloads can
    /// carry set categories ahead of the [`SetType`](crate::types::SetType)
    /// taxonomy, and a new one must not break card decodes.
    pub set_type: String,
    pub set_uri: String,
    /// The printing's set code.
    pub set: String,
    pub set_id: Uuid,
    pub story_spotlight: bool,
    pub textless: bool,
    pub variation: bool,
    pub variation_of: Option<Uuid>,
    pub security_stamp: Option<SecurityStamp>,
    pub watermark: Option<String>,
    pub preview: Option<Preview>,
}
