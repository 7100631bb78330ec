//! Ruling routes.
//!
//! See <https://scryfall.com/docs/api/rulings>.

use crate::actions::CardRef;
use crate::client::ScryfallClient;
use crate::error::{Error, Result};
use crate::page::ListIter;
use crate::types::Ruling;

/// Provides access to ruling routes.
///
/// Obtained via [`ScryfallClient::rulings()`].
#[derive(Debug)]
pub struct RulingActions<'a> {
    pub(crate) client: &'a ScryfallClient,
}

impl<'a> RulingActions<'a> {
    /// Fetch the rulings for a card.
    ///
    /// The rulings routes serve Scryfall, Multiverse, MTGO, and Arena IDs,
    /// plus set code and collector number. TCGplayer and Cardmarket IDs and
    /// a printed language have no rulings route; supplying one fails with
    /// [`Error::InvalidArguments`] before any network call.
    pub async fn for_card(&self, card: CardRef) -> Result<ListIter<Ruling>> {
        let path = match card {
            CardRef::Scryfall(id) => format!("/cards/{id}/rulings"),
            CardRef::Multiverse(id) => format!("/cards/multiverse/{id}/rulings"),
            CardRef::Mtgo(id) => format!("/cards/mtgo/{id}/rulings"),
            CardRef::Arena(id) => format!("/cards/arena/{id}/rulings"),
            CardRef::Tcgplayer(_) | CardRef::Cardmarket(_) => {
                return Err(Error::InvalidArguments(
                    "rulings lookups do not support TCGplayer or Cardmarket IDs".into(),
                ));
            }
            CardRef::SetNumber {
                lang: Some(_), ..
            } => {
                return Err(Error::InvalidArguments(
                    "rulings lookups do not take a language".into(),
                ));
            }
            CardRef::SetNumber {
                set_code,
                collector_number,
                lang: None,
            } => format!("/cards/{set_code}/{collector_number}/rulings"),
        };
        self.client.get_list(&path, &[]).await
    }
}
