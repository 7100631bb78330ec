//! Set routes.
//!
//! See <https://scryfall.com/docs/api/sets>.

use uuid::Uuid;

use crate::client::ScryfallClient;
use crate::error::Result;
use crate::page::ListIter;
use crate::types::Set;

/// Provides access to set routes.
///
/// Obtained via [`ScryfallClient::sets()`].
#[derive(Debug)]
pub struct SetActions<'a> {
    pub(crate) client: &'a ScryfallClient,
}

/// A single-set lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetRef {
    /// The set code, e.g. `mh2`.
    Code(String),
    /// Scryfall's own set ID.
    Scryfall(Uuid),
    Tcgplayer(i64),
}

impl<'a> SetActions<'a> {
    /// Fetch every set, newest first.
    pub async fn all(&self) -> Result<ListIter<Set>> {
        self.client.get_list("/sets", &[]).await
    }

    /// Fetch a single set by code, Scryfall ID, or TCGplayer group ID.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use scry::{ScryfallClient, SetRef};
    /// # async fn example() -> scry::Result<()> {
    /// let client = ScryfallClient::new();
    /// let set = client.sets().get(SetRef::Code("neo".into())).await?;
    /// println!("{} has {} cards", set.name, set.card_count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, set: SetRef) -> Result<Set> {
        let path = match set {
            SetRef::Code(code) => format!("/sets/{code}"),
            SetRef::Scryfall(id) => format!("/sets/{id}"),
            SetRef::Tcgplayer(id) => format!("/sets/tcgplayer/{id}"),
        };
        self.client.get_object(&path, &[]).await
    }
}
