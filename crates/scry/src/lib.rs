//! An async-first, fully typed Rust client for the Scryfall API.
//!
//! This crate decodes every documented object kind into a strongly typed
//! wire model, follows cursor pagination transparently with a one-page-ahead
//! prefetch, throttles all outbound calls through a shared rate gate, and
//! surfaces API failures as structured errors.
//!
//! # Quick Start
//!
//! ```no_run
//! use scry::{CardName, ScryfallClient};
//!
//! # async fn example() -> scry::Result<()> {
//! let client = ScryfallClient::new();
//!
//! let card = client.cards().named(CardName::exact("Lightning Bolt"), None).await?;
//! println!("{}: {}", card.name, card.oracle_text.as_deref().unwrap_or(""));
//! # Ok(())
//! # }
//! ```
//!
//! # Pagination
//!
//! "Get many" operations return a [`ListIter`], a lazy single-pass iterator
//! over every element of every page. While you drain one page, the next is
//! already being fetched — never more than one ahead, and each fetch takes
//! its own slot from the rate gate:
//!
//! ```no_run
//! # use scry::ScryfallClient;
//! # async fn example() -> scry::Result<()> {
//! let client = ScryfallClient::new();
//! let mut sets = client.sets().all().await?;
//! while let Some(set) = sets.next().await {
//!     println!("{}", set?.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use scry::ScryfallClient;
//!
//! let client = ScryfallClient::builder()
//!     .user_agent("my-deck-tool/1.0")
//!     .timeout(Duration::from_secs(60))
//!     .requests_per_second(5)
//!     .build();
//! ```
//!
//! # Operation Groups
//!
//! Operations are organized into groups accessible from the client:
//!
//! - [`ScryfallClient::cards()`] - Search, name and identifier lookups, batched collection
//! - [`ScryfallClient::sets()`] - All sets and single-set lookups
//! - [`ScryfallClient::rulings()`] - Rulings for a card
//! - [`ScryfallClient::catalogs()`] - Catalogs of datapoints (creature types, card names, ...)
//! - [`ScryfallClient::symbols()`] - Card symbols and mana cost parsing
//! - [`ScryfallClient::migrations()`] - Card migration records
//! - [`ScryfallClient::bulk_data()`] - Dump descriptors and one-pass dump downloads
//!
//! Callers without an async runtime can use the [`blocking`] facade.

pub mod actions;
pub mod blocking;
pub mod client;
mod decode;
pub mod error;
mod limit;
pub mod page;
mod response;
pub mod types;

pub use actions::{
    CardIdentifier, CardName, CardRef, CatalogKind, SearchOptions, SetRef, SortDirection,
    SortOrder, UniqueMode,
};
pub use client::{ClientBuilder, ScryfallClient};
pub use error::{Error, Result};
pub use page::{List, ListIter};
pub use types::{
    BulkData, Card, CardSymbol, Catalog, ErrorObject, Listable, ManaCost, Migration, ObjectKind,
    Ruling, Set, WireObject,
};
