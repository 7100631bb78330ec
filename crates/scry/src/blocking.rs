//! A blocking facade over the async client.
//!
//! Each [`Client`] owns a private current-thread tokio runtime and runs
//! every call to completion on it, for callers without an async runtime of
//! their own. Create one client per calling thread; do not share a client
//! across threads, and never construct one inside an existing runtime.
//! Dropping the client tears the runtime down along with any outstanding
//! page-prefetch tasks.
//!
//! The facade covers the operations that make sense synchronously: bulk
//! data (descriptors and dump downloads) and symbology. Paginated results
//! are collected eagerly.
//!
//! # Example
//!
//! ```no_run
//! let client = scry::blocking::Client::new();
//! let symbols = client.symbols().all()?;
//! println!("{} symbols", symbols.len());
//! # Ok::<(), scry::Error>(())
//! ```

use tokio::runtime::{Builder, Runtime};
use uuid::Uuid;

use crate::client::ScryfallClient;
use crate::error::Result;
use crate::types::{BulkData, CardSymbol, Listable, ManaCost, WireObject};

/// A blocking client for the Scryfall API.
#[derive(Debug)]
pub struct Client {
    runtime: Runtime,
    inner: ScryfallClient,
}

impl Client {
    /// Create a blocking client with default settings.
    pub fn new() -> Self {
        Self::from_async(ScryfallClient::new())
    }

    /// Wrap an already-configured async client.
    pub fn from_async(inner: ScryfallClient) -> Self {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build blocking runtime");
        Self { runtime, inner }
    }

    /// Access bulk data operations.
    pub fn bulk_data(&self) -> BulkDataOps<'_> {
        BulkDataOps { client: self }
    }

    /// Access symbology operations.
    pub fn symbols(&self) -> SymbolOps<'_> {
        SymbolOps { client: self }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Blocking bulk data operations.
#[derive(Debug)]
pub struct BulkDataOps<'a> {
    client: &'a Client,
}

impl<'a> BulkDataOps<'a> {
    /// Fetch every bulk data descriptor.
    pub fn all(&self) -> Result<Vec<BulkData>> {
        let inner = &self.client.inner;
        self.client
            .runtime
            .block_on(async { inner.bulk_data().all().await?.try_collect().await })
    }

    /// Fetch a descriptor by its ID.
    pub fn get(&self, id: Uuid) -> Result<BulkData> {
        let inner = &self.client.inner;
        self.client.runtime.block_on(inner.bulk_data().get(id))
    }

    /// Fetch a descriptor by its type, e.g. `oracle_cards`.
    pub fn get_by_type(&self, data_type: &str) -> Result<BulkData> {
        let inner = &self.client.inner;
        self.client
            .runtime
            .block_on(inner.bulk_data().get_by_type(data_type))
    }

    /// Download a dump and decode it as a typed array.
    pub fn download_as<T: Listable>(&self, descriptor: &BulkData) -> Result<Vec<T>> {
        let inner = &self.client.inner;
        self.client
            .runtime
            .block_on(inner.bulk_data().download_as(descriptor))
    }

    /// Download a dump without fixing the element kind.
    pub fn download(&self, descriptor: &BulkData) -> Result<Vec<WireObject>> {
        let inner = &self.client.inner;
        self.client
            .runtime
            .block_on(inner.bulk_data().download(descriptor))
    }
}

/// Blocking symbology operations.
#[derive(Debug)]
pub struct SymbolOps<'a> {
    client: &'a Client,
}

impl<'a> SymbolOps<'a> {
    /// Fetch every card symbol.
    pub fn all(&self) -> Result<Vec<CardSymbol>> {
        let inner = &self.client.inner;
        self.client
            .runtime
            .block_on(async { inner.symbols().all().await?.try_collect().await })
    }

    /// Parse and canonicalize a mana cost string.
    pub fn parse_mana(&self, cost: &str) -> Result<ManaCost> {
        let inner = &self.client.inner;
        self.client.runtime.block_on(inner.symbols().parse_mana(cost))
    }
}
