//! Receipt-poll timer.

use std::time::Duration;

use async_trait::async_trait;
use chain::poll::Sleeper;

/// Sleeps on the browser event loop; returns immediately during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(feature = "hydrate"))]
        let _ = duration;
    }
}
