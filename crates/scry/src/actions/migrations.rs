//! Card migration routes.
//!
//! See <https://scryfall.com/docs/api/migrations>.

use uuid::Uuid;

use crate::client::ScryfallClient;
use crate::error::Result;
use crate::page::ListIter;
use crate::types::Migration;

/// Provides access to migration routes.
///
/// Obtained via [`ScryfallClient::migrations()`].
#[derive(Debug)]
pub struct MigrationActions<'a> {
    pub(crate) client: &'a ScryfallClient,
}

impl<'a> MigrationActions<'a> {
    /// Fetch every card migration, oldest first.
    pub async fn all(&self) -> Result<ListIter<Migration>> {
        self.client.get_list("/migrations", &[]).await
    }

    /// Fetch a single migration by its ID.
    pub async fn get(&self, id: Uuid) -> Result<Migration> {
        self.client.get_object(&format!("/migrations/{id}"), &[]).await
    }
}
