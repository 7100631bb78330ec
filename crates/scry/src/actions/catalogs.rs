//! Catalog routes.
//!
//! See <https://scryfall.com/docs/api/catalogs>.

use crate::client::ScryfallClient;
use crate::error::Result;
use crate::types::Catalog;

/// Provides access to catalog routes.
///
/// Obtained via [`ScryfallClient::catalogs()`].
#[derive(Debug)]
pub struct CatalogActions<'a> {
    pub(crate) client: &'a ScryfallClient,
}

/// The documented catalog routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    CardNames,
    ArtistNames,
    WordBank,
    CreatureTypes,
    PlaneswalkerTypes,
    LandTypes,
    ArtifactTypes,
    EnchantmentTypes,
    SpellTypes,
    Powers,
    Toughnesses,
    Loyalties,
    Watermarks,
    KeywordAbilities,
    KeywordActions,
    AbilityWords,
}

impl CatalogKind {
    fn path_segment(self) -> &'static str {
        match self {
            CatalogKind::CardNames => "card-names",
            CatalogKind::ArtistNames => "artist-names",
            CatalogKind::WordBank => "word-bank",
            CatalogKind::CreatureTypes => "creature-types",
            CatalogKind::PlaneswalkerTypes => "planeswalker-types",
            CatalogKind::LandTypes => "land-types",
            CatalogKind::ArtifactTypes => "artifact-types",
            CatalogKind::EnchantmentTypes => "enchantment-types",
            CatalogKind::SpellTypes => "spell-types",
            CatalogKind::Powers => "powers",
            CatalogKind::Toughnesses => "toughnesses",
            CatalogKind::Loyalties => "loyalties",
            CatalogKind::Watermarks => "watermarks",
            CatalogKind::KeywordAbilities => "keyword-abilities",
            CatalogKind::KeywordActions => "keyword-actions",
            CatalogKind::AbilityWords => "ability-words",
        }
    }
}

impl<'a> CatalogActions<'a> {
    /// Fetch one of the documented catalogs.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use scry::{CatalogKind, ScryfallClient};
    /// # async fn example() -> scry::Result<()> {
    /// let client = ScryfallClient::new();
    /// let types = client.catalogs().get(CatalogKind::CreatureTypes).await?;
    /// println!("{} creature types", types.total_values);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, kind: CatalogKind) -> Result<Catalog> {
        let path = format!("/catalog/{}", kind.path_segment());
        self.client.get_object(&path, &[]).await
    }
}
