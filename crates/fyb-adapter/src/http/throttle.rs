/*
[INPUT]:  Fixed permit interval
[OUTPUT]: Periodic permits gating every request dispatch
[POS]:    HTTP layer - request throttling shared by client handles
[UPDATE]: When the exchange changes its published request cap
*/

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{self, Instant};

/// Technically 6 req/s are allowed; one permit per 200ms keeps a margin.
pub const REQUEST_INTERVAL: Duration = Duration::from_millis(200);

/// Periodic permit gate.
///
/// Clones share the last grant, so every client built with a clone of one
/// limiter is throttled together. Waiters are served in arrival order.
/// No timer outlives an `acquire` call, so a limiter may be used from
/// several runtimes in turn.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    interval: Duration,
    last_grant: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a limiter issuing one permit per `interval`.
    ///
    /// A zero interval is raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            last_grant: Arc::new(Mutex::new(None)),
        }
    }

    /// Interval between two permits
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next permit is issued.
    pub async fn acquire(&self) {
        let mut last_grant = self.last_grant.lock().await;
        if let Some(last) = *last_grant {
            let next = last + self.interval;
            if next > Instant::now() {
                time::sleep_until(next).await;
            }
        }
        *last_grant = Some(Instant::now());
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(REQUEST_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::runtime::Builder;

    #[tokio::test(start_paused = true)]
    async fn test_consecutive_acquires_are_spaced() {
        let limiter = RateLimiter::default();
        let start = Instant::now();
        let mut granted = Vec::new();

        for _ in 0..5 {
            limiter.acquire().await;
            granted.push(Instant::now());
        }

        assert!(start.elapsed() >= REQUEST_INTERVAL * 4);
        for pair in granted.windows(2) {
            assert!(pair[1] - pair[0] >= REQUEST_INTERVAL);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_permit_is_immediate() {
        let limiter = RateLimiter::default();
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < REQUEST_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_period_does_not_allow_burst() {
        let limiter = RateLimiter::default();
        limiter.acquire().await;

        time::sleep(Duration::from_secs(2)).await;

        let start = Instant::now();
        limiter.acquire().await;
        let first = Instant::now();
        limiter.acquire().await;
        let second = Instant::now();

        assert!(first - start < REQUEST_INTERVAL);
        assert!(second - first >= REQUEST_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_permits() {
        let limiter = RateLimiter::default();
        let other = limiter.clone();
        let start = Instant::now();

        let a = tokio::spawn({
            let limiter = limiter.clone();
            async move {
                for _ in 0..3 {
                    limiter.acquire().await;
                }
            }
        });
        let b = tokio::spawn(async move {
            for _ in 0..3 {
                other.acquire().await;
            }
        });
        a.await.unwrap();
        b.await.unwrap();

        assert!(start.elapsed() >= REQUEST_INTERVAL * 5);
    }

    #[test]
    fn test_limiter_survives_runtime_shutdown() {
        let limiter = RateLimiter::new(Duration::from_millis(20));

        let first = Builder::new_current_thread().enable_time().build().unwrap();
        first.block_on(limiter.acquire());
        drop(first);

        let second = Builder::new_current_thread().enable_time().build().unwrap();
        let spacing = second.block_on(async {
            limiter.acquire().await;
            let granted = Instant::now();
            limiter.acquire().await;
            granted.elapsed()
        });

        assert!(spacing >= Duration::from_millis(20));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let limiter = RateLimiter::new(Duration::ZERO);
        assert_eq!(limiter.interval(), Duration::from_millis(1));
    }
}
