use web_time::{Duration, Instant};

/// The transient error banner.
///
/// Holds at most one message at a time; a newer error replaces the
/// current one and restarts the timer. The shell mirrors
/// [`message`](Self::message) into its UI every frame.
#[derive(Debug)]
pub struct Banner {
    ttl: Duration,
    current: Option<(String, Instant)>,
}

impl Banner {
    /// Banner whose messages dismiss themselves after `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    /// Show a message, replacing any current one.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some((message.into(), now + self.ttl));
    }

    /// Clear the banner immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// The visible message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Auto-dismiss once the message's deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, deadline)) = self.current {
            if now >= deadline {
                self.current = None;
            }
        }
    }
}
