//! The clock used for backoff delays and attempt deadlines.

use std::time::Duration;

/// Something that can wait. Injected into the client so tests don't have to.
#[async_trait]
pub trait Clock: Send + Sync + 'static {
    async fn sleep(&self, duration: Duration);
}

/// The default clock, backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn sleeps_for_the_duration() {
        let start = tokio::time::Instant::now();
        TokioClock.sleep(Duration::from_millis(250)).await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
