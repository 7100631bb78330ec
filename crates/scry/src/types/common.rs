//! Enums shared across several object kinds.

use serde::{Deserialize, Serialize};

/// A color in a color array or color identity.
///
/// See <https://scryfall.com/docs/api/colors>. `T` appears in a handful of
/// funny cards and in symbology data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "C")]
    Colorless,
    #[serde(rename = "T")]
    Tap,
}

/// A game a printing is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Game {
    Paper,
    Arena,
    Mtgo,
    Sega,
    Astral,
}
