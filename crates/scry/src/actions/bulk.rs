//! Bulk data routes and dump downloads.
//!
//! See <https://scryfall.com/docs/api/bulk-data>. Descriptors are fetched
//! from the API; the dump files they point at are large JSON arrays decoded
//! in one pass, with no pagination involved.

use uuid::Uuid;

use crate::client::ScryfallClient;
use crate::error::Result;
use crate::page::ListIter;
use crate::types::{BulkData, Listable, WireObject};

/// Provides access to bulk data routes.
///
/// Obtained via [`ScryfallClient::bulk_data()`].
#[derive(Debug)]
pub struct BulkDataActions<'a> {
    pub(crate) client: &'a ScryfallClient,
}

impl<'a> BulkDataActions<'a> {
    /// Fetch every bulk data descriptor.
    pub async fn all(&self) -> Result<ListIter<BulkData>> {
        self.client.get_list("/bulk-data", &[]).await
    }

    /// Fetch a descriptor by its ID.
    pub async fn get(&self, id: Uuid) -> Result<BulkData> {
        self.client.get_object(&format!("/bulk-data/{id}"), &[]).await
    }

    /// Fetch a descriptor by its type, e.g. `oracle_cards`.
    pub async fn get_by_type(&self, data_type: &str) -> Result<BulkData> {
        self.client
            .get_object(&format!("/bulk-data/{data_type}"), &[])
            .await
    }

    /// Download a dump and decode it as a typed array.
    ///
    /// The element kind must match the dump: card dumps decode as
    /// [`Card`](crate::types::Card), the rulings dump as
    /// [`Ruling`](crate::types::Ruling). A mismatched element is a decode
    /// failure, not a silent skip.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use scry::{ScryfallClient, types::Card};
    /// # async fn example() -> scry::Result<()> {
    /// let client = ScryfallClient::new();
    /// let descriptor = client.bulk_data().get_by_type("oracle_cards").await?;
    /// let cards: Vec<Card> = client.bulk_data().download_as(&descriptor).await?;
    /// println!("{} cards", cards.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn download_as<T: Listable>(&self, descriptor: &BulkData) -> Result<Vec<T>> {
        self.client.fetch_array(&descriptor.download_uri).await
    }

    /// Download a dump without fixing the element kind.
    pub async fn download(&self, descriptor: &BulkData) -> Result<Vec<WireObject>> {
        self.client
            .fetch_array_untyped(&descriptor.download_uri)
            .await
    }
}
