//! Time source used by the request client and the history paginator.
//!
//! - `SystemClock`: delegates to `tokio::time` and the system wall clock
//! - `MockClock`: fixed wall clock, `sleep()` records the duration and returns

use async_trait::async_trait;
use std::time::Duration;
use time::OffsetDateTime;

#[async_trait]
pub trait Clock: Send + Sync + 'static {
    fn now_utc(&self) -> OffsetDateTime;

    async fn sleep(&self, duration: Duration);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
pub use mock::MockClock;

#[cfg(test)]
mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    pub struct MockClock {
        now: OffsetDateTime,
        sleeps: Arc<Mutex<Vec<Duration>>>,
    }

    impl MockClock {
        pub fn at(now: OffsetDateTime) -> Self {
            MockClock {
                now,
                sleeps: Arc::new(Mutex::new(vec![])),
            }
        }

        pub fn sleeps(&self) -> Vec<Duration> {
            self.sleeps.lock().unwrap().clone()
        }
    }

    impl Default for MockClock {
        fn default() -> Self {
            MockClock::at(time::macros::datetime!(2024-03-09 14:05:07 UTC))
        }
    }

    #[async_trait]
    impl Clock for MockClock {
        fn now_utc(&self) -> OffsetDateTime {
            self.now
        }

        async fn sleep(&self, duration: Duration) {
            self.sleeps.lock().unwrap().push(duration);
        }
    }
}
