//! Held-key tracking for hosts whose key events may lack releases.
//!
//! Every press or repeat stamps the key with the time it was seen.  A key
//! counts as held while its stamp is younger than the hold window, or until
//! an explicit release arrives.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// OS key repeat runs at ≥ 15 Hz (one event per ≤ 66 ms), so a held key is
/// always refreshed well inside this window, whatever the frame rate.
pub const HOLD_WINDOW: Duration = Duration::from_millis(133);

#[derive(Debug)]
pub struct HeldKeys<K> {
    last_seen: HashMap<K, Instant>,
    window: Duration,
}

impl<K: Eq + Hash> Default for HeldKeys<K> {
    fn default() -> Self {
        Self::new(HOLD_WINDOW)
    }
}

impl<K: Eq + Hash> HeldKeys<K> {
    pub fn new(window: Duration) -> Self {
        Self {
            last_seen: HashMap::new(),
            window,
        }
    }

    /// Record a press or repeat event.
    pub fn press(&mut self, key: K, at: Instant) {
        self.last_seen.insert(key, at);
    }

    pub fn release(&mut self, key: &K) {
        self.last_seen.remove(key);
    }

    pub fn is_held(&self, key: &K, now: Instant) -> bool {
        self.last_seen
            .get(key)
            .is_some_and(|&seen| now.saturating_duration_since(seen) <= self.window)
    }

    pub fn any_held(&self, keys: &[K], now: Instant) -> bool {
        keys.iter().any(|key| self.is_held(key, now))
    }
}
