// ABOUTME: Scoped repeating timer driving carousel autoplay
// ABOUTME: Ticks arrive on a channel; dropping the guard cancels the timer task

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

/// Default autoplay period
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_secs(6);

/// One firing of an [`AutoplayTimer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTick {
    /// Identifies the timer that produced the tick
    pub generation: u64,
}

/// Repeating timer held as a resource.
///
/// The first tick fires one full period after [`AutoplayTimer::spawn`]. The
/// task stops when the guard is dropped or the receiving side goes away.
pub struct AutoplayTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

impl AutoplayTimer {
    /// Start ticking on the current tokio runtime
    pub fn spawn(period: Duration, generation: u64, ticks: UnboundedSender<AutoplayTick>) -> Self {
        let first = Instant::now() + period;
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if ticks.send(AutoplayTick { generation }).is_err() {
                    debug!(generation, "Autoplay receiver closed");
                    break;
                }
            }
        });
        debug!(generation, period_ms = %period.as_millis(), "Autoplay timer started");
        Self {
            generation,
            handle,
        }
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(generation = self.generation, "Autoplay timer released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_on_fixed_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = Instant::now();
        let _timer = AutoplayTimer::spawn(Duration::from_secs(6), 7, tx);

        for n in 1..=3u32 {
            let tick = rx.recv().await.unwrap();
            assert_eq!(tick.generation, 7);
            let elapsed = start.elapsed();
            assert!(elapsed >= Duration::from_secs(6) * n, "tick {n} early: {elapsed:?}");
            assert!(elapsed < Duration::from_secs(6) * n + Duration::from_secs(1));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_closes_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = AutoplayTimer::spawn(Duration::from_secs(6), 0, tx);
        drop(timer);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let timer = AutoplayTimer::spawn(Duration::from_millis(10), 0, tx);
        drop(rx);
        tokio::time::sleep(Duration::from_millis(50)).await;
        for _ in 0..10 {
            if timer.handle.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(timer.handle.is_finished());
    }
}
