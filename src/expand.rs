//! Expanded sidebar groups.
//!
//! Tracks which menu groups are open, persisted as a JSON array of group
//! keys. Two things mutate it: the user toggling a group header, and
//! navigation auto-expanding every group that contains the active page so
//! the page is always revealed. Auto-expansion only ever adds keys.

use crate::menu::MenuTree;

/// Which sidebar groups are open.
///
/// Set semantics over an ordered `Vec`: no duplicate keys, stable order for
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    keys: Vec<String>,
}

impl ExpandState {
    /// Empty state, everything collapsed.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Rebuild from persisted keys, dropping duplicates (first wins).
    ///
    /// Keys that no longer exist in the menu are kept; menus may grow and
    /// shrink between runs and stale keys are harmless.
    pub fn from_keys(keys: Vec<String>) -> Self {
        let mut state = Self::new();
        for key in keys {
            if !state.is_open(&key) {
                state.keys.push(key);
            }
        }
        state
    }

    /// Whether the group with `key` is open.
    pub fn is_open(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Toggle one group; returns whether it is open afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        if let Some(pos) = self.keys.iter().position(|k| k == key) {
            self.keys.remove(pos);
            false
        } else {
            self.keys.push(key.to_string());
            true
        }
    }

    /// Open one group if closed; returns whether the set changed.
    pub fn open(&mut self, key: &str) -> bool {
        if self.is_open(key) {
            return false;
        }
        self.keys.push(key.to_string());
        true
    }

    /// Open every group whose subtree covers `path`.
    ///
    /// Strictly additive: groups already open stay open and nothing closes,
    /// so repeated navigation never collapses what the user opened by hand.
    /// Returns whether the set changed.
    pub fn auto_expand_for_path(&mut self, path: &str, menu: &MenuTree) -> bool {
        let mut changed = false;
        for key in menu.group_keys_for_path(path) {
            if self.open(key) {
                changed = true;
            }
        }
        changed
    }

    /// Open keys in insertion order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of open groups.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether everything is collapsed.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuGroup;

    fn sample_menu() -> MenuTree {
        MenuTree::new()
            .group(
                MenuGroup::new("master", "기준정보")
                    .item("/mes/master/machine", "설비 관리")
                    .item("/mes/master/process", "공정 관리"),
            )
            .group(
                MenuGroup::new("production", "생산관리").group(
                    MenuGroup::new("production-report", "생산 실적")
                        .item("/mes/production/report/daily", "일일 실적"),
                ),
            )
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = ExpandState::new();
        assert!(state.toggle("master"));
        assert!(state.is_open("master"));
        assert!(!state.toggle("master"));
        assert!(!state.is_open("master"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_from_keys_deduplicates() {
        let state = ExpandState::from_keys(vec![
            "master".to_string(),
            "production".to_string(),
            "master".to_string(),
        ]);
        assert_eq!(state.keys(), ["master".to_string(), "production".to_string()]);
    }

    #[test]
    fn test_auto_expand_opens_containing_groups() {
        let mut state = ExpandState::new();
        let menu = sample_menu();

        assert!(state.auto_expand_for_path("/mes/production/report/daily", &menu));
        assert!(state.is_open("production"));
        assert!(state.is_open("production-report"));
        assert!(!state.is_open("master"));
    }

    #[test]
    fn test_auto_expand_is_additive() {
        let mut state = ExpandState::new();
        let menu = sample_menu();

        state.toggle("master");
        assert!(state.auto_expand_for_path("/mes/production/report/daily", &menu));
        assert!(state.is_open("master"));

        // Navigating elsewhere never closes what is already open.
        assert!(!state.auto_expand_for_path("/mes/master/machine", &menu));
        assert!(state.is_open("master"));
        assert!(state.is_open("production"));
        assert!(state.is_open("production-report"));
    }

    #[test]
    fn test_auto_expand_monotone_under_navigation() {
        let mut state = ExpandState::new();
        let menu = sample_menu();
        let paths = [
            "/mes/master/machine",
            "/mes/production/report/daily",
            "/mes/master/process",
            "/mes/dashboard",
        ];

        let mut previous = 0;
        for path in paths {
            state.auto_expand_for_path(path, &menu);
            assert!(state.len() >= previous);
            previous = state.len();
        }
    }

    #[test]
    fn test_auto_expand_unknown_path_is_noop() {
        let mut state = ExpandState::new();
        let menu = sample_menu();

        assert!(!state.auto_expand_for_path("/other/page", &menu));
        assert!(state.is_empty());
    }

    #[test]
    fn test_auto_expand_already_open_reports_unchanged() {
        let mut state = ExpandState::new();
        let menu = sample_menu();

        assert!(state.auto_expand_for_path("/mes/master/machine", &menu));
        assert!(!state.auto_expand_for_path("/mes/master/machine", &menu));
        assert_eq!(state.len(), 1);
    }
}
