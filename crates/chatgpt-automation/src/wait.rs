//! Strategies for waiting on the app to finish rendering a reply.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Waits for the app to produce its reply after a prompt was submitted.
///
/// The app exposes no completion signal, so implementations decide when the
/// response is considered ready. `budget` is the caller's wait, already
/// clamped to the configured maximum.
#[async_trait]
pub trait ResponseWait: Send + Sync {
    async fn wait_for_response(&self, budget: Duration);
}

/// Sleeps for the whole budget. No polling, no early exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDelay;

#[async_trait]
impl ResponseWait for FixedDelay {
    async fn wait_for_response(&self, budget: Duration) {
        debug!("Waiting {:?} for the response to render", budget);
        tokio::time::sleep(budget).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_waits_full_budget() {
        let start = tokio::time::Instant::now();
        FixedDelay.wait_for_response(Duration::from_secs(90)).await;
        assert!(start.elapsed() >= Duration::from_secs(90));
    }
}
