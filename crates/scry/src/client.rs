//! The Scryfall client and builder.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::debug;

use crate::actions::{
    BulkDataActions, CardActions, CatalogActions, MigrationActions, RulingActions, SetActions,
    SymbolActions,
};
use crate::decode::DecoderRegistry;
use crate::error::Result;
use crate::limit::{DEFAULT_REQUESTS_PER_SECOND, RateGate};
use crate::page::ListIter;
use crate::response;
use crate::types::{Listable, WireObject};

/// Default base URL for the API.
const DEFAULT_URL: &str = "https://api.scryfall.com";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent; the API rejects requests without one.
const DEFAULT_USER_AGENT: &str = concat!("scry/", env!("CARGO_PKG_VERSION"));

/// Everything an in-flight operation needs independently of the client that
/// started it: the transport, the rate gate, and the decoder registry.
/// Pager prefetch tasks clone this.
#[derive(Debug, Clone)]
pub(crate) struct Shared {
    pub(crate) http: reqwest::Client,
    pub(crate) gate: Arc<RateGate>,
    pub(crate) registry: Arc<DecoderRegistry>,
}

/// The main client for the Scryfall API.
///
/// All outbound calls — including the page fetches paginated results perform
/// on their own — share one rate gate, capped at 10 requests per second by
/// default.
///
/// # Example
///
/// ```no_run
/// use scry::ScryfallClient;
///
/// # async fn example() -> scry::Result<()> {
/// let client = ScryfallClient::new();
///
/// let mut cards = client.cards().search("c:r t:goblin", &Default::default()).await?;
/// while let Some(card) = cards.next().await {
///     println!("{}", card?.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    shared: Shared,
    base_url: String,
}

impl ScryfallClient {
    /// Create a client with default settings: `https://api.scryfall.com`,
    /// a 30 second timeout, and a 10 requests/second budget.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access card operations.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// Access set operations.
    pub fn sets(&self) -> SetActions<'_> {
        SetActions { client: self }
    }

    /// Access ruling operations.
    pub fn rulings(&self) -> RulingActions<'_> {
        RulingActions { client: self }
    }

    /// Access catalog operations.
    pub fn catalogs(&self) -> CatalogActions<'_> {
        CatalogActions { client: self }
    }

    /// Access card symbol and mana cost operations.
    pub fn symbols(&self) -> SymbolActions<'_> {
        SymbolActions { client: self }
    }

    /// Access card migration operations.
    pub fn migrations(&self) -> MigrationActions<'_> {
        MigrationActions { client: self }
    }

    /// Access bulk data operations.
    pub fn bulk_data(&self) -> BulkDataActions<'_> {
        BulkDataActions { client: self }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Acquire a rate-gate slot, issue the request, and read the full body.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<(StatusCode, Vec<u8>)> {
        self.shared.gate.acquire().await;
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");
        Ok((status, body.to_vec()))
    }

    /// GET a route expected to return a single object of kind `T`.
    pub(crate) async fn get_object<T: Listable>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        let mut request = self.shared.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let (status, body) = self.execute(request).await?;
        response::interpret(&self.shared.registry, status, &body)
    }

    /// GET a paginated route; wraps the first page in a [`ListIter`].
    pub(crate) async fn get_list<T: Listable>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ListIter<T>> {
        let url = self.endpoint(path);
        debug!(%url, "GET (paginated)");
        let mut request = self.shared.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let (status, body) = self.execute(request).await?;
        let first = response::interpret_list(&self.shared.registry, status, &body)?;
        Ok(ListIter::new(self.shared.clone(), first))
    }

    /// POST a JSON body to a route returning a list envelope of `T`.
    pub(crate) async fn post_list<T: Listable, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ListIter<T>> {
        let url = self.endpoint(path);
        debug!(%url, "POST");
        let request = self.shared.http.post(&url).json(body);
        let (status, body) = self.execute(request).await?;
        let first = response::interpret_list(&self.shared.registry, status, &body)?;
        Ok(ListIter::new(self.shared.clone(), first))
    }

    /// GET an absolute URL expected to return a bare JSON array of `T`
    /// (the bulk dump shape).
    pub(crate) async fn fetch_array<T: Listable>(&self, url: &str) -> Result<Vec<T>> {
        debug!(%url, "GET (bulk)");
        let (status, body) = self.execute(self.shared.http.get(url)).await?;
        response::interpret_array(&self.shared.registry, status, &body)
    }

    /// GET an absolute URL expected to return a bare JSON array of mixed
    /// object kinds.
    pub(crate) async fn fetch_array_untyped(&self, url: &str) -> Result<Vec<WireObject>> {
        debug!(%url, "GET (bulk)");
        let (status, body) = self.execute(self.shared.http.get(url)).await?;
        response::interpret_array_untyped(&self.shared.registry, status, &body)
    }
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a customized [`ScryfallClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use scry::ScryfallClient;
///
/// let client = ScryfallClient::builder()
///     .base_url("https://api.scryfall.com")
///     .user_agent("my-deck-tool/1.0")
///     .timeout(Duration::from_secs(60))
///     .requests_per_second(5)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
    requests_per_second: u32,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
        }
    }

    /// Set the API base URL. Defaults to `https://api.scryfall.com`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the User-Agent header. The API requires an identifying one.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the request timeout. Defaults to 30 seconds. Timeouts surface as
    /// [`Error::Http`](crate::Error::Http).
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Set the outbound rate budget. Defaults to 10; values above 10 exceed
    /// the API's documented guidance.
    pub fn requests_per_second(mut self, permits: u32) -> Self {
        self.requests_per_second = permits;
        self
    }

    /// Build the client.
    pub fn build(self) -> ScryfallClient {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        ScryfallClient {
            shared: Shared {
                http,
                gate: Arc::new(RateGate::new(self.requests_per_second)),
                registry: Arc::new(DecoderRegistry::new()),
            },
            base_url: self.base_url,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
