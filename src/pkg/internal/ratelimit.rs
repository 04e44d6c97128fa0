use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct Window {
    count: u32,
    started: Instant,
}

/// Fixed-window limiter keyed by caller.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        RateLimiter {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Counts one request for `key`. Returns the seconds until the window
    /// resets when the caller is over the limit.
    pub async fn check(&self, key: &str) -> Result<(), u64> {
        self.check_at(key, Instant::now()).await
    }

    async fn check_at(&self, key: &str, now: Instant) -> Result<(), u64> {
        let mut lock = self.windows.lock().await;
        lock.retain(|_, w| now.duration_since(w.started) < self.window);
        let entry = lock.entry(key.to_string()).or_insert_with(|| Window {
            count: 0,
            started: now,
        });
        if entry.count >= self.max_requests {
            let remaining = self.window.saturating_sub(now.duration_since(entry.started));
            return Err(remaining.as_secs().max(1));
        }
        entry.count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blocks_after_max_requests_in_window() {
        let limiter = RateLimiter::new(5, Duration::from_secs(900));
        let now = Instant::now();
        for _ in 0..5 {
            assert!(limiter.check_at("10.0.0.1", now).await.is_ok());
        }
        let retry = limiter.check_at("10.0.0.1", now).await.unwrap_err();
        assert_eq!(retry, 900);
        assert!(limiter.check_at("10.0.0.2", now).await.is_ok());
    }

    #[tokio::test]
    async fn window_resets_after_expiry() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let start = Instant::now();
        assert!(limiter.check_at("a", start).await.is_ok());
        assert!(limiter.check_at("a", start + Duration::from_secs(30)).await.is_err());
        assert!(limiter.check_at("a", start + Duration::from_secs(61)).await.is_ok());
    }
}
