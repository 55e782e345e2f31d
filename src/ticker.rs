use std::time::{Duration, Instant};

use crate::error::GameError;

/// Fixed-period tick source for driving `Game::advance`.
///
/// Fires at most once per `due` call, so ticks never overlap, and stays
/// silent after `stop` until a new session builds a new ticker.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    last_tick: Instant,
    stopped: bool,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    /// Period of `1 / speed` seconds.
    pub fn from_speed(speed: f64) -> Result<Self, GameError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(GameError::InvalidSpeed(speed));
        }
        Ok(Self::new(Duration::from_secs_f64(1.0 / speed)))
    }

    fn starting_at(period: Duration, now: Instant) -> Self {
        Ticker {
            period,
            last_tick: now,
            stopped: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// True when a tick should run now; restarts the period if so.
    pub fn due(&mut self) -> bool {
        self.due_at(Instant::now())
    }

    fn due_at(&mut self, now: Instant) -> bool {
        if self.stopped || now.duration_since(self.last_tick) < self.period {
            return false;
        }
        self.last_tick = now;
        true
    }

    /// How long the host can wait for input before the next tick is due.
    pub fn time_until_next(&self) -> Duration {
        self.period.saturating_sub(self.last_tick.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_speed() {
        assert_eq!(Ticker::from_speed(2.0).unwrap().period(), Duration::from_millis(500));
        assert_eq!(Ticker::from_speed(4.0).unwrap().period(), Duration::from_millis(250));
        assert!(Ticker::from_speed(0.0).is_err());
        assert!(Ticker::from_speed(-3.0).is_err());
    }

    #[test]
    fn test_fires_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::starting_at(Duration::from_millis(100), start);

        assert!(!ticker.due_at(start + Duration::from_millis(50)));
        assert!(ticker.due_at(start + Duration::from_millis(100)));
        // Same instant again: the period restarted, nothing due.
        assert!(!ticker.due_at(start + Duration::from_millis(100)));
        assert!(!ticker.due_at(start + Duration::from_millis(150)));
        assert!(ticker.due_at(start + Duration::from_millis(210)));
    }

    #[test]
    fn test_stopped_ticker_never_fires() {
        let start = Instant::now();
        let mut ticker = Ticker::starting_at(Duration::from_millis(10), start);

        ticker.stop();
        assert!(ticker.is_stopped());
        assert!(!ticker.due_at(start + Duration::from_secs(5)));
    }
}
