//! List envelopes and the cursor-following pager.
//!
//! A paginated route returns a [`List`] holding one page plus, when more
//! pages exist, a fully-qualified `next_page` URL. [`ListIter`] stitches the
//! chain into one forward-only sequence: while the caller drains the current
//! page, the fetch for the next page is already in flight, rate-gated and
//! strictly one page ahead. Absence of `next_page` is the sole termination
//! signal; `has_more` is informational only.

use std::vec;

use futures::Stream;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::Shared;
use crate::error::Result;
use crate::response;
use crate::types::Listable;

/// One page of a paginated collection.
#[derive(Debug, Clone, PartialEq)]
pub struct List<T> {
    /// The elements of this page, in array order.
    pub data: Vec<T>,
    /// Whether the server believes more pages exist. Informational; the
    /// pager keys off `next_page` alone.
    pub has_more: Option<bool>,
    /// URL of the next page, fetched with a plain GET. Present if and only
    /// if more pages exist.
    pub next_page: Option<String>,
    /// Total number of matches across all pages, for card searches.
    pub total_cards: Option<u64>,
    /// Non-fatal notes about the request.
    pub warnings: Option<Vec<String>>,
}

/// A lazy, single-pass iterator over every element of a paginated
/// collection.
///
/// Obtained from the paginated handler methods, e.g.
/// [`CardActions::search`](crate::actions::CardActions::search). Elements
/// arrive in page order and, within a page, in array order. A failed page
/// fetch is yielded as an `Err` at the point the next element was requested
/// and ends the sequence. Dropping the iterator mid-way aborts any in-flight
/// prefetch.
#[derive(Debug)]
pub struct ListIter<T: Listable> {
    shared: Shared,
    items: vec::IntoIter<T>,
    total_cards: Option<u64>,
    prefetch: Option<JoinHandle<Result<List<T>>>>,
}

impl<T: Listable> ListIter<T> {
    /// Wrap an already-fetched first page. Must be called within a tokio
    /// runtime: the prefetch of the following page starts immediately.
    pub(crate) fn new(shared: Shared, first: List<T>) -> Self {
        let prefetch = first
            .next_page
            .as_deref()
            .map(|url| spawn_fetch(&shared, url.to_owned()));
        Self {
            shared,
            total_cards: first.total_cards,
            items: first.data.into_iter(),
            prefetch,
        }
    }

    /// Total number of matches the server reported, when it reports one.
    pub fn total_cards(&self) -> Option<u64> {
        self.total_cards
    }

    /// The next element, or `None` once the final page is drained.
    ///
    /// Yields `Err` exactly once if a page fetch fails, after which the
    /// iterator is exhausted.
    pub async fn next(&mut self) -> Option<Result<T>> {
        loop {
            if let Some(item) = self.items.next() {
                return Some(Ok(item));
            }
            let page = match self.prefetch.take()?.await {
                Ok(Ok(page)) => page,
                Ok(Err(e)) => return Some(Err(e)),
                Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
                // Aborted tasks are only awaited during teardown.
                Err(_) => return None,
            };
            if let Some(url) = page.next_page.as_deref() {
                self.prefetch = Some(spawn_fetch(&self.shared, url.to_owned()));
            }
            self.items = page.data.into_iter();
        }
    }

    /// Drain the remaining elements into a `Vec`, failing on the first
    /// page-fetch or decode error.
    pub async fn try_collect(mut self) -> Result<Vec<T>> {
        let mut out = Vec::new();
        while let Some(item) = self.next().await {
            out.push(item?);
        }
        Ok(out)
    }

    /// Adapt into a [`futures::Stream`] of results.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        futures::stream::unfold(self, |mut iter| async move {
            iter.next().await.map(|item| (item, iter))
        })
    }
}

impl<T: Listable> Drop for ListIter<T> {
    fn drop(&mut self) {
        if let Some(handle) = &self.prefetch {
            handle.abort();
        }
    }
}

/// Start fetching a continuation page. Acquires its own rate-gate slot; the
/// URL is used as-is per the pagination contract.
fn spawn_fetch<T: Listable>(shared: &Shared, url: String) -> JoinHandle<Result<List<T>>> {
    let shared = shared.clone();
    tokio::spawn(async move {
        shared.gate.acquire().await;
        debug!(url = %url, "fetching continuation page");
        let resp = shared.http.get(&url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        response::interpret_list(&shared.registry, status, &body)
    })
}
