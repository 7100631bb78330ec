//! The wire model: typed representations of every object kind the API
//! returns.
//!
//! Every JSON payload carries an `object` field naming its kind.
//! [`ObjectKind`] enumerates the closed set of kinds, [`WireObject`] is the
//! matching sum type, and [`Listable`] marks the kinds that may appear at the
//! top level of a response or as elements of a list envelope.

mod bulk;
mod card;
mod catalog;
mod common;
mod error;
mod migration;
mod ruling;
mod set;
mod symbol;

pub use bulk::BulkData;
pub use card::{
    BorderColor, Card, CardFace, Finish, Frame, FrameEffect, ImageStatus, Layout, Legality,
    Preview, Rarity, RelatedCard, SecurityStamp,
};
pub use catalog::Catalog;
pub use common::{Color, Game};
pub use error::ErrorObject;
pub use migration::{Migration, MigrationStrategy};
pub use ruling::Ruling;
pub use set::{Set, SetType};
pub use symbol::{CardSymbol, ManaCost};

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The value of the `object` discriminator field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    BulkData,
    Card,
    CardFace,
    CardSymbol,
    Catalog,
    Error,
    List,
    ManaCost,
    Migration,
    RelatedCard,
    Ruling,
    Set,
}

impl ObjectKind {
    /// The discriminator string as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::BulkData => "bulk_data",
            ObjectKind::Card => "card",
            ObjectKind::CardFace => "card_face",
            ObjectKind::CardSymbol => "card_symbol",
            ObjectKind::Catalog => "catalog",
            ObjectKind::Error => "error",
            ObjectKind::List => "list",
            ObjectKind::ManaCost => "mana_cost",
            ObjectKind::Migration => "migration",
            ObjectKind::RelatedCard => "related_card",
            ObjectKind::Ruling => "ruling",
            ObjectKind::Set => "set",
        }
    }

    /// Parse a discriminator string, returning `None` for kinds outside the
    /// closed set.
    pub(crate) fn from_discriminator(s: &str) -> Option<Self> {
        Some(match s {
            "bulk_data" => ObjectKind::BulkData,
            "card" => ObjectKind::Card,
            "card_face" => ObjectKind::CardFace,
            "card_symbol" => ObjectKind::CardSymbol,
            "catalog" => ObjectKind::Catalog,
            "error" => ObjectKind::Error,
            "list" => ObjectKind::List,
            "mana_cost" => ObjectKind::ManaCost,
            "migration" => ObjectKind::Migration,
            "related_card" => ObjectKind::RelatedCard,
            "ruling" => ObjectKind::Ruling,
            "set" => ObjectKind::Set,
            _ => return None,
        })
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any single object the API can return, tagged by its discriminator.
///
/// Serialization writes the `object` tag back out. Deserialization goes
/// through [`DecoderRegistry`](crate::decode::DecoderRegistry), which
/// dispatches on the discriminator explicitly and rejects unknown kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum WireObject {
    BulkData(BulkData),
    Card(Card),
    CardFace(CardFace),
    CardSymbol(CardSymbol),
    Catalog(Catalog),
    Error(ErrorObject),
    ManaCost(ManaCost),
    Migration(Migration),
    RelatedCard(RelatedCard),
    Ruling(Ruling),
    Set(Set),
}

impl WireObject {
    /// The discriminator this object was decoded under.
    pub fn kind(&self) -> ObjectKind {
        match self {
            WireObject::BulkData(_) => ObjectKind::BulkData,
            WireObject::Card(_) => ObjectKind::Card,
            WireObject::CardFace(_) => ObjectKind::CardFace,
            WireObject::CardSymbol(_) => ObjectKind::CardSymbol,
            WireObject::Catalog(_) => ObjectKind::Catalog,
            WireObject::Error(_) => ObjectKind::Error,
            WireObject::ManaCost(_) => ObjectKind::ManaCost,
            WireObject::Migration(_) => ObjectKind::Migration,
            WireObject::RelatedCard(_) => ObjectKind::RelatedCard,
            WireObject::Ruling(_) => ObjectKind::Ruling,
            WireObject::Set(_) => ObjectKind::Set,
        }
    }
}

/// Object kinds that may be decoded at the top level of a response or as
/// elements of a list envelope.
pub trait Listable: DeserializeOwned + Send + Sized + 'static {
    /// The discriminator value this type decodes under.
    const KIND: ObjectKind;

    /// Checked downcast from the untyped union.
    fn from_wire(obj: WireObject) -> Option<Self>;
}

macro_rules! listable {
    ($ty:ty, $kind:ident) => {
        impl Listable for $ty {
            const KIND: ObjectKind = ObjectKind::$kind;

            fn from_wire(obj: WireObject) -> Option<Self> {
                match obj {
                    WireObject::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

listable!(BulkData, BulkData);
listable!(Card, Card);
listable!(CardFace, CardFace);
listable!(CardSymbol, CardSymbol);
listable!(Catalog, Catalog);
listable!(ErrorObject, Error);
listable!(ManaCost, ManaCost);
listable!(Migration, Migration);
listable!(RelatedCard, RelatedCard);
listable!(Ruling, Ruling);
listable!(Set, Set);
