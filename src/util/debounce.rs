use web_time::{Duration, Instant};

/// Trailing-edge debouncer, polled rather than callback-driven.
///
/// Each [`schedule`](Self::schedule) pushes the deadline out by the full
/// delay, so a burst of events yields exactly one [`fire`](Self::fire).
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Debouncer with the given trailing delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record an event; the deadline moves to `now + delay`, discarding
    /// any earlier pending deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true once the delay has elapsed since the last schedule,
    /// consuming the pending deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_fires_once_after_trailing_delay() {
        let start = Instant::now();
        let mut deb = Debouncer::new(Duration::from_millis(250));

        deb.schedule(start);
        deb.schedule(start + Duration::from_millis(100));
        deb.schedule(start + Duration::from_millis(200));

        // 250ms after the *first* event, but only 50ms after the last
        assert!(!deb.fire(start + Duration::from_millis(250)));
        assert!(deb.fire(start + Duration::from_millis(450)));
        // Consumed: no second fire
        assert!(!deb.fire(start + Duration::from_millis(500)));
        assert!(!deb.is_pending());
    }

    #[test]
    fn never_fires_without_schedule() {
        let mut deb = Debouncer::new(Duration::from_millis(250));
        assert!(!deb.fire(Instant::now()));
    }

    #[test]
    fn cancel_discards_pending_deadline() {
        let start = Instant::now();
        let mut deb = Debouncer::new(Duration::from_millis(250));
        deb.schedule(start);
        assert!(deb.is_pending());
        deb.cancel();
        assert!(!deb.fire(start + Duration::from_millis(300)));
    }
}
