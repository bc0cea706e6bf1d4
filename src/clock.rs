use std::time::{Duration, Instant};

/// Source of elapsed time for the harness.
pub trait Clock {
    type Mark;

    fn start(&self) -> Self::Mark;

    fn elapsed(&self, mark: &Self::Mark) -> Duration;
}

/// Wall-clock timing via `Instant`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Mark = Instant;

    #[inline]
    fn start(&self) -> Instant {
        Instant::now()
    }

    #[inline]
    fn elapsed(&self, mark: &Instant) -> Duration {
        mark.elapsed()
    }
}

/// Reports the same duration for every measurement. Used for dry runs and
/// for checking normalization without real timing noise.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Duration);

impl Clock for FixedClock {
    type Mark = ();

    fn start(&self) {}

    fn elapsed(&self, _mark: &()) -> Duration {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_advances() {
        let clock = MonotonicClock;
        let mark = clock.start();
        std::thread::sleep(Duration::from_millis(2));
        assert!(clock.elapsed(&mark) >= Duration::from_millis(2));
    }

    #[test]
    fn test_fixed_is_constant() {
        let clock = FixedClock(Duration::from_micros(250));
        let mark = clock.start();
        assert_eq!(clock.elapsed(&mark), Duration::from_micros(250));
        assert_eq!(clock.elapsed(&mark), Duration::from_micros(250));
    }
}
