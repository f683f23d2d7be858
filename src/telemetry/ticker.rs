use std::time::Duration;

/// Recurring task clock driven by the frame time (seconds since app start).
///
/// Fires at most once per [`Ticker::poll`]. Periods missed while the UI was
/// idle collapse into a single firing, the next one is due one full interval
/// after the poll that fired.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: f64,
    last_fired: Option<f64>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f64().max(0.001),
            last_fired: None,
        }
    }

    /// Reschedules the pending firing to one new interval after the last one.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.as_secs_f64().max(0.001);
    }

    fn next_due(&self) -> Option<f64> {
        self.last_fired.map(|at| at + self.interval)
    }

    /// Returns `true` when the task is due at `now`. The first poll only arms the ticker.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.next_due() {
            Some(due) if now < due => false,
            armed => {
                self.last_fired = Some(now);
                armed.is_some()
            }
        }
    }

    pub fn time_until_due(&self, now: f64) -> Duration {
        let remaining = self.next_due().map_or(self.interval, |due| due - now);
        Duration::from_secs_f64(remaining.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut ticker = Ticker::new(Duration::from_millis(300));
        assert!(!ticker.poll(0.0));
        assert!(!ticker.poll(0.2));
        assert!(ticker.poll(0.3));
        assert!(!ticker.poll(0.4));
        assert!(ticker.poll(0.65));
    }

    #[test]
    fn missed_periods_collapse_into_one() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.poll(0.0);
        assert!(ticker.poll(10.0));
        assert!(!ticker.poll(10.5));
        assert!(ticker.poll(11.0));
    }

    #[test]
    fn reports_remaining_time() {
        let mut ticker = Ticker::new(Duration::from_millis(1200));
        assert_eq!(ticker.time_until_due(0.0), Duration::from_millis(1200));
        ticker.poll(1.0);
        let remaining = ticker.time_until_due(1.7).as_secs_f64();
        assert!((remaining - 0.5).abs() < 1e-9);
        assert_eq!(ticker.time_until_due(5.0), Duration::ZERO);
    }

    #[test]
    fn shorter_interval_applies_to_the_pending_firing() {
        let mut ticker = Ticker::new(Duration::from_secs(10));
        ticker.poll(0.0);
        assert!(!ticker.poll(1.0));
        ticker.set_interval(Duration::from_millis(100));
        assert!(ticker.poll(1.05));
        assert!(!ticker.poll(1.1));
        assert!(ticker.poll(1.2));
    }

    #[test]
    fn longer_interval_pushes_the_pending_firing_back() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.poll(0.0);
        ticker.set_interval(Duration::from_secs(3));
        assert!(!ticker.poll(1.5));
        assert!(ticker.poll(3.0));
    }
}
