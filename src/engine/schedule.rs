//! Cancellable periodic tick source.

use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};

/// A scheduled recurring tick.
///
/// Holding a `TickSchedule` means a tick is scheduled; dropping it cancels
/// the schedule. The underlying interval is created on first await, so a
/// schedule can be built outside a runtime. The first tick fires one period
/// after that.
#[derive(Debug)]
pub struct TickSchedule {
    period: Duration,
    ticker: Option<Interval>,
}

impl TickSchedule {
    /// Creates a schedule with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            ticker: None,
        }
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Waits for the next tick.
    ///
    /// Cancel safe: dropping the future does not lose the schedule's phase.
    pub async fn wait(&mut self) {
        let period = self.period;
        let ticker = self.ticker.get_or_insert_with(|| {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker
        });
        ticker.tick().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    fn assert_elapsed(start: Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(5),
            "expected ~{:?}, got {:?}",
            expected,
            elapsed
        );
    }

    #[test]
    fn test_new_outside_runtime() {
        let schedule = TickSchedule::new(Duration::from_secs(1));
        assert_eq!(schedule.period(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let mut schedule = TickSchedule::new(Duration::from_secs(1));
        let start = Instant::now();

        schedule.wait().await;

        assert_elapsed(start, Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_are_periodic() {
        let mut schedule = TickSchedule::new(Duration::from_secs(1));
        let start = Instant::now();

        for _ in 0..3 {
            schedule.wait().await;
        }

        assert_elapsed(start, Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_wait_keeps_phase() {
        let mut schedule = TickSchedule::new(Duration::from_secs(1));
        let start = Instant::now();

        let result = timeout(Duration::from_millis(400), schedule.wait()).await;
        assert!(result.is_err());

        schedule.wait().await;
        assert_elapsed(start, Duration::from_secs(1));
    }
}
