//! Card routes.
//!
//! See <https://scryfall.com/docs/api/cards>.
//!
//! # Example
//!
//! ```no_run
//! use scry::ScryfallClient;
//!
//! # async fn example() -> scry::Result<()> {
//! let client = ScryfallClient::new();
//!
//! let mut cards = client.cards().search("o:storm t:instant", &Default::default()).await?;
//! while let Some(card) = cards.next().await {
//!     println!("{}", card?.name);
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use uuid::Uuid;

use crate::client::ScryfallClient;
use crate::error::{Error, Result};
use crate::page::ListIter;
use crate::types::Card;

/// The API accepts at most this many identifiers per collection request.
const MAX_COLLECTION_IDENTIFIERS: usize = 75;

/// Provides access to card routes.
///
/// Obtained via [`ScryfallClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a ScryfallClient,
}

/// Rollup mode for prints in search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueMode {
    /// One result per distinct card (the default).
    Cards,
    /// One result per distinct illustration.
    Art,
    /// Every printing.
    Prints,
}

impl UniqueMode {
    fn as_str(self) -> &'static str {
        match self {
            UniqueMode::Cards => "cards",
            UniqueMode::Art => "art",
            UniqueMode::Prints => "prints",
        }
    }
}

/// Sort key for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Name,
    Set,
    Released,
    Rarity,
    Color,
    Usd,
    Tix,
    Eur,
    Cmc,
    Power,
    Toughness,
    Edhrec,
    Penny,
    Artist,
    Review,
}

impl SortOrder {
    fn as_str(self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::Set => "set",
            SortOrder::Released => "released",
            SortOrder::Rarity => "rarity",
            SortOrder::Color => "color",
            SortOrder::Usd => "usd",
            SortOrder::Tix => "tix",
            SortOrder::Eur => "eur",
            SortOrder::Cmc => "cmc",
            SortOrder::Power => "power",
            SortOrder::Toughness => "toughness",
            SortOrder::Edhrec => "edhrec",
            SortOrder::Penny => "penny",
            SortOrder::Artist => "artist",
            SortOrder::Review => "review",
        }
    }
}

/// Sort direction for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Let the server pick the natural direction for the sort key.
    Auto,
    Asc,
    Desc,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            SortDirection::Auto => "auto",
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Optional knobs for [`CardActions::search`]. `Default` leaves every knob
/// to the server's defaults.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub unique: Option<UniqueMode>,
    pub order: Option<SortOrder>,
    pub direction: Option<SortDirection>,
    pub include_extras: Option<bool>,
    pub include_multilingual: Option<bool>,
    pub include_variations: Option<bool>,
}

/// A card name lookup: exactly one of exact or fuzzy, by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardName {
    /// Match the full name, case-insensitively.
    Exact(String),
    /// Tolerate misspellings and partial names; ambiguous matches fail with
    /// an API error of type `ambiguous`.
    Fuzzy(String),
}

impl CardName {
    /// An exact name lookup.
    pub fn exact(name: impl Into<String>) -> Self {
        CardName::Exact(name.into())
    }

    /// A fuzzy name lookup.
    pub fn fuzzy(name: impl Into<String>) -> Self {
        CardName::Fuzzy(name.into())
    }
}

/// A single-card lookup key, one of the closed set of identifier kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardRef {
    /// Scryfall's own card ID.
    Scryfall(Uuid),
    Multiverse(i64),
    Mtgo(i64),
    Arena(i64),
    Tcgplayer(i64),
    Cardmarket(i64),
    /// Set code plus collector number, with an optional printed language.
    SetNumber {
        set_code: String,
        collector_number: String,
        lang: Option<String>,
    },
}

/// One entry in a collection (batched) lookup.
///
/// Serializes to exactly the identifier shapes the `/cards/collection`
/// route documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CardIdentifier {
    Id { id: Uuid },
    MtgoId { mtgo_id: i64 },
    MultiverseId { multiverse_id: i64 },
    OracleId { oracle_id: Uuid },
    IllustrationId { illustration_id: Uuid },
    Name { name: String },
    NameSet { name: String, set: String },
    CollectorNumberSet { collector_number: String, set: String },
}

impl CardIdentifier {
    pub fn id(id: Uuid) -> Self {
        CardIdentifier::Id { id }
    }

    pub fn name(name: impl Into<String>) -> Self {
        CardIdentifier::Name { name: name.into() }
    }

    pub fn name_in_set(name: impl Into<String>, set: impl Into<String>) -> Self {
        CardIdentifier::NameSet {
            name: name.into(),
            set: set.into(),
        }
    }

    pub fn collector_number(number: impl Into<String>, set: impl Into<String>) -> Self {
        CardIdentifier::CollectorNumberSet {
            collector_number: number.into(),
            set: set.into(),
        }
    }
}

#[derive(Serialize)]
struct CollectionBody<'a> {
    identifiers: &'a [CardIdentifier],
}

impl<'a> CardActions<'a> {
    /// Search for cards with the full-text search syntax.
    ///
    /// Returns a paginated iterator over every match; continuation pages are
    /// fetched lazily, one ahead of consumption.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use scry::{ScryfallClient, SearchOptions, SortOrder};
    /// # async fn example() -> scry::Result<()> {
    /// let client = ScryfallClient::new();
    /// let options = SearchOptions {
    ///     order: Some(SortOrder::Released),
    ///     ..Default::default()
    /// };
    /// let cards = client.cards().search("t:dragon cmc<4", &options).await?;
    /// println!("{:?} total matches", cards.total_cards());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<ListIter<Card>> {
        let mut params: Vec<(&str, String)> = vec![("q", query.to_owned())];
        if let Some(unique) = options.unique {
            params.push(("unique", unique.as_str().to_owned()));
        }
        if let Some(order) = options.order {
            params.push(("order", order.as_str().to_owned()));
        }
        if let Some(direction) = options.direction {
            params.push(("dir", direction.as_str().to_owned()));
        }
        if let Some(extras) = options.include_extras {
            params.push(("include_extras", extras.to_string()));
        }
        if let Some(multilingual) = options.include_multilingual {
            params.push(("include_multilingual", multilingual.to_string()));
        }
        if let Some(variations) = options.include_variations {
            params.push(("include_variations", variations.to_string()));
        }
        self.client.get_list("/cards/search", &params).await
    }

    /// Look a card up by name, optionally limited to one set.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use scry::{CardName, ScryfallClient};
    /// # async fn example() -> scry::Result<()> {
    /// let client = ScryfallClient::new();
    /// let card = client.cards().named(CardName::fuzzy("aust comm"), None).await?;
    /// assert_eq!(card.name, "Austere Command");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn named(&self, name: CardName, set_code: Option<&str>) -> Result<Card> {
        let mut params: Vec<(&str, String)> = match name {
            CardName::Exact(name) => vec![("exact", name)],
            CardName::Fuzzy(name) => vec![("fuzzy", name)],
        };
        if let Some(set_code) = set_code {
            params.push(("set", set_code.to_owned()));
        }
        self.client.get_object("/cards/named", &params).await
    }

    /// Autocomplete a card name; returns up to 20 full names.
    pub async fn autocomplete(
        &self,
        query: &str,
        include_extras: Option<bool>,
    ) -> Result<Vec<String>> {
        let mut params: Vec<(&str, String)> = vec![("q", query.to_owned())];
        if let Some(extras) = include_extras {
            params.push(("include_extras", extras.to_string()));
        }
        let catalog: crate::types::Catalog =
            self.client.get_object("/cards/autocomplete", &params).await?;
        Ok(catalog.data)
    }

    /// Fetch a random card, optionally filtered by a search query.
    pub async fn random(&self, query: Option<&str>) -> Result<Card> {
        let params: Vec<(&str, String)> = match query {
            Some(q) => vec![("q", q.to_owned())],
            None => Vec::new(),
        };
        self.client.get_object("/cards/random", &params).await
    }

    /// Fetch a batch of up to 75 cards by mixed identifiers in one request.
    ///
    /// The identifier list is validated before any network call: it must be
    /// non-empty and hold at most 75 entries. Returned cards preserve the
    /// order of the identifiers that matched; identifiers the server could
    /// not find are skipped, not errors.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use scry::{CardIdentifier, ScryfallClient};
    /// # async fn example() -> scry::Result<()> {
    /// let client = ScryfallClient::new();
    /// let cards = client
    ///     .cards()
    ///     .collection(&[
    ///         CardIdentifier::name("Lightning Bolt"),
    ///         CardIdentifier::collector_number("150", "mh2"),
    ///     ])
    ///     .await?
    ///     .try_collect()
    ///     .await?;
    /// assert_eq!(cards.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn collection(&self, identifiers: &[CardIdentifier]) -> Result<ListIter<Card>> {
        if identifiers.is_empty() {
            return Err(Error::InvalidArguments(
                "collection requires at least one identifier".into(),
            ));
        }
        if identifiers.len() > MAX_COLLECTION_IDENTIFIERS {
            return Err(Error::InvalidArguments(format!(
                "collection accepts at most {MAX_COLLECTION_IDENTIFIERS} identifiers, got {}",
                identifiers.len()
            )));
        }
        self.client
            .post_list("/cards/collection", &CollectionBody { identifiers })
            .await
    }

    /// Fetch a single card by any one of its identifiers.
    pub async fn get(&self, card: CardRef) -> Result<Card> {
        let path = match card {
            CardRef::Scryfall(id) => format!("/cards/{id}"),
            CardRef::Multiverse(id) => format!("/cards/multiverse/{id}"),
            CardRef::Mtgo(id) => format!("/cards/mtgo/{id}"),
            CardRef::Arena(id) => format!("/cards/arena/{id}"),
            CardRef::Tcgplayer(id) => format!("/cards/tcgplayer/{id}"),
            CardRef::Cardmarket(id) => format!("/cards/cardmarket/{id}"),
            CardRef::SetNumber {
                set_code,
                collector_number,
                lang,
            } => match lang {
                Some(lang) => format!("/cards/{set_code}/{collector_number}/{lang}"),
                None => format!("/cards/{set_code}/{collector_number}"),
            },
        };
        self.client.get_object(&path, &[]).await
    }
}
