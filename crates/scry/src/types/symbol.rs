//! Card symbol and mana cost objects.
//!
//! See <https://scryfall.com/docs/api/card-symbols>.

use serde::{Deserialize, Serialize};

use crate::types::Color;

/// An illustrated symbol that may appear in mana costs or Oracle text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSymbol {
    /// The plaintext symbol, e.g. `{G}`.
    pub symbol: String,
    /// An alternate form without curly braces, if one exists.
    pub loose_variant: Option<String>,
    /// English description of the symbol.
    pub english: String,
    /// Whether the symbol may be written backwards in costs.
    pub transposable: bool,
    /// Whether this symbol represents mana.
    pub represents_mana: bool,
    /// Mana value contributed, for mana symbols.
    pub mana_value: Option<f64>,
    /// Whether this symbol appears on the left side of mana costs.
    pub appears_in_mana_costs: bool,
    /// Whether the symbol only appears on funny cards.
    pub funny: bool,
    /// Colors this symbol contributes.
    pub colors: Vec<Color>,
    /// Gatherer's alternate spellings of the symbol.
    pub gatherer_alternates: Option<Vec<String>>,
    /// SVG rendering of the symbol.
    pub svg_uri: Option<String>,
}

/// A mana cost canonicalized by the `/symbology/parse-mana` route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManaCost {
    /// Normalized cost string.
    pub cost: String,
    /// Mana value of the cost.
    pub cmc: f64,
    /// Colors of the cost.
    pub colors: Vec<Color>,
    pub colorless: bool,
    pub monocolored: bool,
    pub multicolored: bool,
}
