use std::time::Duration;

use async_trait::async_trait;

/// Paces progressive reveal of list items while a page streams out.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Waits a fixed delay between items.
pub struct SleepPacer(pub Duration);

#[async_trait]
impl Pacer for SleepPacer {
    async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// Sends everything at once.
pub struct NoPacing;

#[async_trait]
impl Pacer for NoPacing {
    async fn pause(&self) {}
}
