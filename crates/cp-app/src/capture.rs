//! Capture-side suppression of repeated copies.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Remembers the last text forwarded from each capture surface.
///
/// Copying the same text twice in a row on one surface forwards it once, no
/// matter how much time passes in between; copying something else on that
/// surface re-arms it. This runs before the store and is independent of the
/// store's time-window duplicate rule.
#[derive(Debug, Default)]
pub struct CaptureGuard {
    last_by_surface: Mutex<HashMap<String, String>>,
}

impl CaptureGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `text` copied on `surface` should be submitted to the store.
    ///
    /// Only checks; nothing is remembered until [`CaptureGuard::commit`].
    /// Empty text (after trimming) is never forwarded.
    pub fn should_forward(&self, surface: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        let last = self
            .last_by_surface
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if last.get(surface).map(String::as_str) == Some(text) {
            tracing::debug!(surface, "identical consecutive copy suppressed");
            return false;
        }
        true
    }

    /// Record `text` as the last copy on `surface`.
    ///
    /// Call once the store has taken the text (admitted, or already held it).
    /// A submit that failed must not be committed, so the copy can be retried.
    pub fn commit(&self, surface: &str, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.last_by_surface
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(surface.to_string(), text.to_string());
    }

    /// Drop what the guard remembers about `surface` (e.g. the page was closed).
    pub fn forget_surface(&self, surface: &str) {
        self.last_by_surface
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(guard: &CaptureGuard, surface: &str, text: &str) -> bool {
        let forwarded = guard.should_forward(surface, text);
        if forwarded {
            guard.commit(surface, text);
        }
        forwarded
    }

    #[test]
    fn identical_consecutive_text_is_forwarded_once() {
        let guard = CaptureGuard::new();

        assert!(forward(&guard, "tab-1", "hello"));
        assert!(!forward(&guard, "tab-1", "hello"));
        assert!(!forward(&guard, "tab-1", "  hello  "));
    }

    #[test]
    fn different_text_rearms_the_surface() {
        let guard = CaptureGuard::new();

        assert!(forward(&guard, "tab-1", "hello"));
        assert!(forward(&guard, "tab-1", "world"));
        assert!(forward(&guard, "tab-1", "hello"));
    }

    #[test]
    fn surfaces_are_independent() {
        let guard = CaptureGuard::new();

        assert!(forward(&guard, "tab-1", "hello"));
        assert!(forward(&guard, "tab-2", "hello"));
    }

    #[test]
    fn empty_text_is_never_forwarded() {
        let guard = CaptureGuard::new();

        assert!(forward(&guard, "tab-1", "hello"));
        assert!(!forward(&guard, "tab-1", "   "));
        assert!(!forward(&guard, "tab-1", "hello"));
    }

    #[test]
    fn uncommitted_text_is_not_remembered() {
        let guard = CaptureGuard::new();

        assert!(forward(&guard, "tab-1", "hello"));
        // checked but never committed, e.g. the write failed
        assert!(guard.should_forward("tab-1", "world"));
        assert!(guard.should_forward("tab-1", "world"));
        assert!(!guard.should_forward("tab-1", "hello"));
    }

    #[test]
    fn forgetting_a_surface_allows_resubmission() {
        let guard = CaptureGuard::new();

        assert!(forward(&guard, "tab-1", "hello"));
        guard.forget_surface("tab-1");
        assert!(forward(&guard, "tab-1", "hello"));
    }
}
