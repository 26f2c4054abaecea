use derby_core::*;
use std::collections::HashMap;

/// Sliding-window rate limiter.
///
/// Admits at most `limit` hits per key within any `window` milliseconds.
/// Callers own the instance and pick the keys. Expired keys are swept
/// whenever the key count reaches a threshold, which then resets to twice
/// the surviving count, so the map stays proportional to active keys.
#[derive(Debug, Clone)]
pub struct Limiter {
    limit: usize,
    window: Millis,
    sweep: usize,
    hits: HashMap<String, Vec<Millis>>,
}

impl Default for Limiter {
    fn default() -> Self {
        Self::new(CHAT_LIMIT, CHAT_WINDOW)
    }
}

impl Limiter {
    pub fn new(limit: usize, window: Millis) -> Self {
        Self {
            limit,
            window,
            sweep: CHAT_SWEEP,
            hits: HashMap::new(),
        }
    }
    /// Records a hit at `now` if the key has room in its window.
    pub fn allow(&mut self, key: &str, now: Millis) -> bool {
        if self.hits.len() >= self.sweep {
            self.prune(now);
            self.sweep = (self.hits.len() * 2).max(CHAT_SWEEP);
        }
        let window = self.window;
        let hits = self.hits.entry(key.to_string()).or_default();
        hits.retain(|t| now.saturating_sub(*t) < window);
        if hits.len() < self.limit {
            hits.push(now);
            true
        } else {
            false
        }
    }
    /// Drops every key whose hits have all expired.
    pub fn prune(&mut self, now: Millis) {
        let window = self.window;
        self.hits
            .retain(|_, hits| hits.iter().any(|t| now.saturating_sub(*t) < window));
    }
    pub fn len(&self) -> usize {
        self.hits.len()
    }
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
