//! History retention policy.
//!
//! 历史保留策略：去重、容量裁剪、自动清理。
//!
//! Every function here is pure: it receives the history, an explicit
//! [`Settings`] snapshot and the current time, and returns the new history.
//! Storage order is newest-first insertion order and is never re-sorted.

use crate::clipboard::ClipboardItem;
use crate::settings::Settings;

/// Two items with identical text closer than this are duplicates.
pub const DUPLICATE_WINDOW_MS: i64 = 3_000;

pub const DAY_MS: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmitOutcome {
    Admitted,
    Duplicate,
}

/// What a retention pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetentionReport {
    /// Unpinned items evicted by the capacity trim.
    pub trimmed: usize,
    /// Unpinned items dropped by auto-cleanup.
    pub expired: usize,
}

impl RetentionReport {
    pub fn removed(&self) -> usize {
        self.trimmed + self.expired
    }

    pub fn is_empty(&self) -> bool {
        self.removed() == 0
    }
}

/// Result of [`admit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    pub history: Vec<ClipboardItem>,
    pub outcome: AdmitOutcome,
    pub report: RetentionReport,
}

/// Whether `candidate` repeats an item already in `history` within the window.
pub fn is_duplicate(history: &[ClipboardItem], candidate: &ClipboardItem) -> bool {
    history.iter().any(|existing| {
        existing.text == candidate.text
            && (candidate.created_at - existing.created_at).abs() < DUPLICATE_WINDOW_MS
    })
}

/// Admit a candidate into the history.
///
/// Duplicates leave the history untouched. Otherwise the candidate is
/// prepended and the capacity trim and auto-cleanup run on the result.
pub fn admit(
    history: Vec<ClipboardItem>,
    candidate: ClipboardItem,
    settings: &Settings,
    now_ms: i64,
) -> Admission {
    if is_duplicate(&history, &candidate) {
        #[cfg(feature = "tracing")]
        tracing::debug!(created_at = candidate.created_at, "duplicate candidate rejected");

        return Admission {
            history,
            outcome: AdmitOutcome::Duplicate,
            report: RetentionReport::default(),
        };
    }

    let mut next = Vec::with_capacity(history.len() + 1);
    next.push(candidate);
    next.extend(history);

    let (history, report) = reapply_settings(next, settings, now_ms);
    Admission {
        history,
        outcome: AdmitOutcome::Admitted,
        report,
    }
}

/// Run capacity trim then auto-cleanup without inserting anything.
///
/// Applying it twice with the same inputs yields the same history.
pub fn reapply_settings(
    mut history: Vec<ClipboardItem>,
    settings: &Settings,
    now_ms: i64,
) -> (Vec<ClipboardItem>, RetentionReport) {
    let report = RetentionReport {
        trimmed: trim_to_capacity(&mut history, settings.max_items as usize),
        expired: if settings.cleanup_enabled() {
            expire_before(&mut history, cleanup_cutoff(settings, now_ms))
        } else {
            0
        },
    };

    #[cfg(feature = "tracing")]
    {
        if !report.is_empty() {
            tracing::debug!(
                trimmed = report.trimmed,
                expired = report.expired,
                remaining = history.len(),
                "retention pass removed items"
            );
        }
    }

    (history, report)
}

/// Items created at or before this instant are stale.
pub fn cleanup_cutoff(settings: &Settings, now_ms: i64) -> i64 {
    now_ms - i64::from(settings.auto_cleanup_days) * DAY_MS
}

/// Keep every pinned item and the first `max_items - pinned` unpinned ones.
///
/// Nothing happens while the history is within capacity. Relative order of
/// the survivors is left as it was.
fn trim_to_capacity(history: &mut Vec<ClipboardItem>, max_items: usize) -> usize {
    if history.len() <= max_items {
        return 0;
    }

    let pinned = history.iter().filter(|item| item.pinned).count();
    let mut unpinned_budget = max_items.saturating_sub(pinned);
    let before = history.len();

    history.retain(|item| {
        if item.pinned {
            return true;
        }
        if unpinned_budget > 0 {
            unpinned_budget -= 1;
            return true;
        }
        false
    });

    before - history.len()
}

fn expire_before(history: &mut Vec<ClipboardItem>, cutoff_ms: i64) -> usize {
    let before = history.len();
    history.retain(|item| item.pinned || item.created_at > cutoff_ms);
    before - history.len()
}
