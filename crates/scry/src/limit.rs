//! The outbound rate gate.
//!
//! Scryfall asks clients to stay at or under 10 requests per second
//! (<https://scryfall.com/docs/api#rate-limits-and-good-citizenship>). Every
//! outbound call in this crate, including each page fetch the pager performs
//! on its own, acquires exactly one slot from the gate before touching the
//! network.

use std::fmt;
use std::num::NonZeroU32;

use governor::clock::DefaultClock;
use governor::state::InMemoryState;
use governor::state::direct::NotKeyed;
use governor::{Quota, RateLimiter};

/// Default outbound budget, per the API's documented guidance.
pub(crate) const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Admits callers at a fixed requests-per-second budget, FIFO under
/// contention. Shared across all concurrent operations of one client.
pub(crate) struct RateGate {
    per_second: u32,
    limiter: DirectRateLimiter,
}

impl RateGate {
    pub(crate) fn new(requests_per_second: u32) -> Self {
        let limit = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
        Self {
            per_second: limit.get(),
            limiter: RateLimiter::direct(Quota::per_second(limit)),
        }
    }

    /// Wait until one outbound call is permitted. The caller must issue
    /// exactly one request per acquired slot.
    pub(crate) async fn acquire(&self) {
        self.limiter.until_ready().await;
    }
}

impl fmt::Debug for RateGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateGate")
            .field("per_second", &self.per_second)
            .finish_non_exhaustive()
    }
}
