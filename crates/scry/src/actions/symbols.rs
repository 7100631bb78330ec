//! Card symbol and mana cost routes.
//!
//! See <https://scryfall.com/docs/api/card-symbols>.

use crate::client::ScryfallClient;
use crate::error::Result;
use crate::page::ListIter;
use crate::types::{CardSymbol, ManaCost};

/// Provides access to symbology routes.
///
/// Obtained via [`ScryfallClient::symbols()`].
#[derive(Debug)]
pub struct SymbolActions<'a> {
    pub(crate) client: &'a ScryfallClient,
}

impl<'a> SymbolActions<'a> {
    /// Fetch every card symbol.
    pub async fn all(&self) -> Result<ListIter<CardSymbol>> {
        self.client.get_list("/symbology", &[]).await
    }

    /// Parse and canonicalize a mana cost string, e.g. `"RUx"` to `{X}{U}{R}`.
    pub async fn parse_mana(&self, cost: &str) -> Result<ManaCost> {
        self.client
            .get_object("/symbology/parse-mana", &[("cost", cost.to_owned())])
            .await
    }
}
