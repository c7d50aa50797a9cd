use std::time::Duration;

use quanta::Instant;

/// Two monotonic clock readings bracketing one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    start: Instant,
    end: Instant,
}

impl TimingSample {
    /// The time between both readings. Never negative.
    pub fn elapsed(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }

    /// Elapsed time in (fractional) seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

/// Runs `fun` once and records the clock before and after.
#[inline]
pub fn timed<R, F: FnOnce() -> R>(fun: F) -> (R, TimingSample) {
    let start = Instant::now();
    let result = fun();
    let end = Instant::now();
    (result, TimingSample { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_covers_the_work() {
        let (value, sample) = timed(|| {
            let start = Instant::now();
            // Busy loop instead of sleep, quanta may use the TSC
            while start.elapsed() < Duration::from_millis(2) {}
            7
        });
        assert_eq!(value, 7);
        assert!(sample.elapsed() >= Duration::from_millis(2));
        assert!(sample.as_secs_f64() >= 0.002);
    }

    #[test]
    fn elapsed_is_never_negative() {
        let now = Instant::now();
        let sample = TimingSample {
            start: now + Duration::from_secs(1),
            end: now,
        };
        assert_eq!(sample.elapsed(), Duration::ZERO);
    }
}
