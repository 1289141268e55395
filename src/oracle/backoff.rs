//! Injectable sleep abstraction for retry backoff.
//!
//! The invoker never calls `tokio::time::sleep` directly; it goes through
//! [`Sleeper`] so tests can observe the requested delays without waiting
//! them out.

use std::time::Duration;

/// Suspends the current task for a backoff delay.
pub trait Sleeper: Send + Sync {
    /// Waits for `delay` before the next retry attempt.
    fn sleep(&self, delay: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Real clock: delegates to `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Records requested delays and returns immediately.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    delays: std::sync::Arc<parking_lot::Mutex<Vec<Duration>>>,
}

#[cfg(any(test, feature = "mock"))]
impl RecordingSleeper {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in order.
    pub fn recorded(&self) -> Vec<Duration> {
        self.delays.lock().clone()
    }
}

#[cfg(any(test, feature = "mock"))]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, delay: Duration) {
        self.delays.lock().push(delay);
    }
}
