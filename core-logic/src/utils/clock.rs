use async_trait::async_trait;
use std::time::Duration;

/// Time source for every intentional delay in the system (task wait,
/// inter-account courtesy delay, inter-cycle sleep).
///
/// Swappable in tests so a 24-hour cycle does not actually sleep.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production clock backed by the tokio timer.
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
