use alloc::vec::Vec;

use crate::ReconcilerKey;

/// A small timer describing one pending hide animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExitTimer {
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl ExitTimer {
    pub fn new(start_ms: u64, duration_ms: u64) -> Self {
        Self {
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Normalized animation progress in `[0, 1]`, for primitives that want to drive
    /// opacity or translation from it.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }
}

/// Tracks pending hide animations by key, in the order they began.
///
/// This is a minimal stand-in for a real transition primitive: the adapter begins a
/// timer when an item starts exiting and reports elapsed timers back to the
/// reconciler as exit completions (see [`crate::Controller::tick`]).
#[derive(Clone, Debug)]
pub struct ExitSchedule<K> {
    entries: Vec<(K, ExitTimer)>,
}

impl<K> Default for ExitSchedule<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ExitSchedule<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: ReconcilerKey> ExitSchedule<K> {
    pub fn is_scheduled(&self, key: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn timer(&self, key: &K) -> Option<ExitTimer> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, timer)| *timer)
    }

    /// Starts a hide-animation timer for `key`.
    ///
    /// A key that is already scheduled keeps its original timer (a re-render must not
    /// restart an animation in flight); returns `false` in that case.
    pub fn begin(&mut self, key: K, now_ms: u64, duration_ms: u64) -> bool {
        if self.is_scheduled(&key) {
            return false;
        }
        self.entries.push((key, ExitTimer::new(now_ms, duration_ms)));
        true
    }

    /// Cancels the timer for `key`, returning `true` when one was scheduled.
    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        before != self.entries.len()
    }

    /// Keeps only the timers whose key satisfies `f`.
    pub fn retain(&mut self, mut f: impl FnMut(&K) -> bool) {
        self.entries.retain(|(key, _)| f(key));
    }

    /// Removes every timer that has elapsed by `now_ms` and yields its key, in the
    /// order the timers began.
    pub fn drain_elapsed(&mut self, now_ms: u64, mut f: impl FnMut(K)) {
        let mut index = 0;
        while index < self.entries.len() {
            if self.entries[index].1.is_done(now_ms) {
                let (key, _) = self.entries.remove(index);
                f(key);
            } else {
                index += 1;
            }
        }
    }
}
