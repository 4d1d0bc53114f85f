//! Recently visited pages.
//!
//! Insertion-ordered, deduplicated by path. Pages are recorded when
//! navigation lands on them, but only when the menu knows a label for the
//! path; unlabeled pages stay untracked. Entries are persisted as a JSON
//! array and rendered in the tab strip after the pinned region.

use serde::{Deserialize, Serialize};

use crate::menu::normalize_path;

/// A page reference carried by tabs: path plus human label.
///
/// Older builds may have stored extra fields; serde ignores them on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Normalized page path
    pub path: String,
    /// Label resolved from the menu at visit time
    pub label: String,
}

impl PageEntry {
    /// Create an entry; the path is normalized on construction.
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            path: normalize_path(&path).into_owned(),
            label: label.into(),
        }
    }
}

/// The recent-pages list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentPages {
    entries: Vec<PageEntry>,
}

impl RecentPages {
    /// Empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuild from persisted entries, dropping duplicate paths (first
    /// occurrence wins).
    pub fn from_entries(entries: Vec<PageEntry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            if !list.contains(&entry.path) {
                list.entries.push(entry);
            }
        }
        list
    }

    /// Record a visit to `path`.
    ///
    /// Appends `{path, label}` at the tail and returns `true`. No-op
    /// returning `false` when the path is already present or when `label`
    /// is `None`. Existing entries are never reordered by a visit.
    pub fn visit(&mut self, path: &str, label: Option<&str>) -> bool {
        let Some(label) = label else {
            return false;
        };
        let path = normalize_path(path);
        if self.contains(&path) {
            return false;
        }
        self.entries.push(PageEntry {
            path: path.into_owned(),
            label: label.to_string(),
        });
        true
    }

    /// Remove the entry for `path`. Idempotent: removing an absent path is
    /// a no-op returning `false`.
    pub fn remove(&mut self, path: &str) -> bool {
        let path = normalize_path(path);
        if let Some(pos) = self.entries.iter().position(|e| e.path == path.as_ref()) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drop every entry. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        true
    }

    /// Whether an entry for `path` exists.
    pub fn contains(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.entries.iter().any(|e| e.path == path.as_ref())
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
