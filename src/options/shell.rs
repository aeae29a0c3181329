use serde::{Deserialize, Serialize};

/// Application-shell timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellOptions {
    /// Quiet period before a burst of resize events collapses into one
    /// viewport update, in milliseconds.
    pub resize_debounce_ms: u64,
    /// How long a transient error banner stays visible, in milliseconds.
    pub banner_ttl_ms: u64,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 250,
            banner_ttl_ms: 5000,
        }
    }
}
