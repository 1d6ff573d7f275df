//! Minimum-interval throttle for outbound live-rate requests.
//!
//! Not a token bucket: there is no burst allowance. Each caller computes the
//! remaining cooldown since the last stamped request at the moment it calls
//! [`RequestThrottle::wait`], sleeps it out, then stamps the current time.
//! Concurrent callers may race on the stamp; the rate cache makes the
//! duplicated work harmless.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, warn};
use tokio::time::Instant;

pub struct RequestThrottle {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RequestThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Lock the stamp, recovering from poison if necessary.
    fn lock_last(&self) -> MutexGuard<'_, Option<Instant>> {
        self.last_request.lock().unwrap_or_else(|poisoned| {
            warn!("Request throttle mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Time left before another request may go out.
    pub fn remaining(&self) -> Duration {
        match *self.lock_last() {
            Some(last) => self.min_interval.saturating_sub(last.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Wait out any remaining cooldown, then stamp the request time.
    ///
    /// Returns how long the caller was suspended.
    pub async fn wait(&self) -> Duration {
        let wait_time = self.remaining();

        if wait_time > Duration::ZERO {
            debug!("Request throttle: waiting {:?}", wait_time);
            tokio::time::sleep(wait_time).await;
        }

        *self.lock_last() = Some(Instant::now());
        wait_time
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_request_is_immediate() {
        let throttle = RequestThrottle::new(Duration::from_secs(1));
        assert_eq!(throttle.remaining(), Duration::ZERO);
        assert_eq!(throttle.wait().await, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_request_waits_out_cooldown() {
        let throttle = RequestThrottle::new(Duration::from_secs(1));
        throttle.wait().await;

        tokio::time::advance(Duration::from_millis(400)).await;
        let start = Instant::now();
        let waited = throttle.wait().await;

        assert_eq!(waited, Duration::from_millis(600));
        assert!(start.elapsed() >= Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_wait_after_interval_elapsed() {
        let throttle = RequestThrottle::new(Duration::from_secs(1));
        throttle.wait().await;

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(throttle.wait().await, Duration::ZERO);
    }
}
