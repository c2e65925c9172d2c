//! Fixed-period tick source.
//!
//! Started when a game begins, stopped once when it ends. While stopped,
//! [`TickScheduler::tick`] never resolves, so it can sit in a `select!`
//! without special casing.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

pub struct TickScheduler {
    period: Duration,
    interval: Option<Interval>,
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    /// Start a fresh timer; the first tick fires one period from now
    pub fn start(&mut self) {
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
        debug!(period_ms = self.period.as_millis() as u64, "tick scheduler started");
    }

    pub fn stop(&mut self) {
        if self.interval.take().is_some() {
            debug!("tick scheduler stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
