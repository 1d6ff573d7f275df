//! Rate client and the state it owns.
//!
//! - `rate_client` - The `RateClient` façade (latest + historical flows)
//! - `cache` - TTL cache of snapshots keyed by `(base, sorted symbols)`
//! - `throttle` - Minimum spacing between outbound live requests
//! - `cancel` - Supersession of in-flight live requests
//! - `fallback` - Synthetic history for pairs without provider coverage

mod cache;
mod cancel;
mod fallback;
mod rate_client;
mod throttle;

pub use cache::{CacheEntry, CacheKey, RateCache};
pub use cancel::{CancellationToken, RequestGate};
pub use fallback::synthesize_history;
pub use rate_client::{RateClient, DEFAULT_HISTORY_DAYS, MAX_HISTORY_DAYS};
pub use throttle::RequestThrottle;
