//! Pinned tabs.
//!
//! User-curated ordered list of pages kept at the front of the tab strip.
//! Pinning appends at the tail, unpinning is idempotent, and the user can
//! reorder pins by dragging. Persisted as a JSON array of `{path, label}`
//! entries.

use crate::menu::normalize_path;
use crate::recent::PageEntry;

/// Outcome of a pin toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinToggle {
    /// The page was appended to the pinned list
    Pinned,
    /// The page was removed from the pinned list
    Unpinned,
}

/// The pinned-tabs list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinnedTabs {
    tabs: Vec<PageEntry>,
}

impl PinnedTabs {
    /// Empty list.
    pub fn new() -> Self {
        Self { tabs: Vec::new() }
    }

    /// Rebuild from persisted entries, dropping duplicate paths (first
    /// occurrence wins).
    pub fn from_entries(entries: Vec<PageEntry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            if !list.is_pinned(&entry.path) {
                list.tabs.push(entry);
            }
        }
        list
    }

    /// Whether `path` is pinned.
    pub fn is_pinned(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    /// Index of `path` in the pinned list.
    pub fn position(&self, path: &str) -> Option<usize> {
        let path = normalize_path(path);
        self.tabs.iter().position(|t| t.path == path.as_ref())
    }

    /// Pin or unpin one page.
    ///
    /// Pinning appends `{path, label}` at the tail; unpinning removes the
    /// entry and leaves every other pin in place.
    pub fn toggle(&mut self, path: &str, label: &str) -> PinToggle {
        let path = normalize_path(path);
        if let Some(pos) = self.tabs.iter().position(|t| t.path == path.as_ref()) {
            self.tabs.remove(pos);
            PinToggle::Unpinned
        } else {
            self.tabs.push(PageEntry {
                path: path.into_owned(),
                label: label.to_string(),
            });
            PinToggle::Pinned
        }
    }

    /// Unpin `path`. Idempotent: unpinning an absent path is a no-op
    /// returning `false`.
    pub fn unpin(&mut self, path: &str) -> bool {
        if let Some(pos) = self.position(path) {
            self.tabs.remove(pos);
            true
        } else {
            false
        }
    }

    /// Move the tab at `from` so it lands at display position `to`.
    ///
    /// Splice-move: the tab is removed first, then inserted at `to` in the
    /// shortened list. No-op returning `false` when `from == to` or either
    /// index is out of range. Always a permutation of the list.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.tabs.len() || to >= self.tabs.len() {
            return false;
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        true
    }

    /// Pinned tabs in display order.
    pub fn tabs(&self) -> &[PageEntry] {
        &self.tabs
    }

    /// Number of pinned tabs.
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether nothing is pinned.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tabs() -> PinnedTabs {
        let mut tabs = PinnedTabs::new();
        tabs.toggle("/mes/dashboard", "대시보드");
        tabs.toggle("/mes/master/machine", "설비 관리");
        tabs.toggle("/mes/master/process", "공정 관리");
        tabs
    }

    fn paths(tabs: &PinnedTabs) -> Vec<&str> {
        tabs.tabs().iter().map(|t| t.path.as_str()).collect()
    }

    #[test]
    fn test_pin_appends_at_tail() {
        let tabs = sample_tabs();
        assert_eq!(
            paths(&tabs),
            ["/mes/dashboard", "/mes/master/machine", "/mes/master/process"]
        );
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut tabs = sample_tabs();
        let before = tabs.clone();

        assert_eq!(tabs.toggle("/mes/qc/inspect", "검사 관리"), PinToggle::Pinned);
        assert_eq!(tabs.toggle("/mes/qc/inspect", "검사 관리"), PinToggle::Unpinned);
        assert_eq!(tabs, before);
    }

    #[test]
    fn test_unpin_is_idempotent() {
        let mut tabs = sample_tabs();
        assert!(tabs.unpin("/mes/master/machine"));
        assert!(!tabs.unpin("/mes/master/machine"));
        assert_eq!(paths(&tabs), ["/mes/dashboard", "/mes/master/process"]);
    }

    #[test]
    fn test_unpin_normalizes_path() {
        let mut tabs = sample_tabs();
        assert!(tabs.unpin("/mes/master/machine/"));
        assert!(!tabs.is_pinned("/mes/master/machine"));
    }

    #[test]
    fn test_reorder_forward() {
        let mut tabs = sample_tabs();
        assert!(tabs.reorder(0, 2));
        assert_eq!(
            paths(&tabs),
            ["/mes/master/machine", "/mes/master/process", "/mes/dashboard"]
        );
    }

    #[test]
    fn test_reorder_backward() {
        let mut tabs = sample_tabs();
        assert!(tabs.reorder(2, 0));
        assert_eq!(
            paths(&tabs),
            ["/mes/master/process", "/mes/dashboard", "/mes/master/machine"]
        );
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let mut tabs = sample_tabs();
        let mut before = paths(&tabs)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        before.sort();

        tabs.reorder(1, 2);
        tabs.reorder(2, 0);
        tabs.reorder(0, 1);

        let mut after = paths(&tabs)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reorder_noop_cases() {
        let mut tabs = sample_tabs();
        let before = tabs.clone();

        assert!(!tabs.reorder(1, 1));
        assert!(!tabs.reorder(3, 0));
        assert!(!tabs.reorder(0, 3));
        assert_eq!(tabs, before);
    }

    #[test]
    fn test_from_entries_deduplicates() {
        let tabs = PinnedTabs::from_entries(vec![
            PageEntry::new("/a", "A"),
            PageEntry::new("/a", "A again"),
            PageEntry::new("/b", "B"),
        ]);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs.position("/b"), Some(1));
    }
}
