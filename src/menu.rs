//! Static sidebar menu tree with a derived label table.
//!
//! The menu is declared once at startup: top-level groups, optional
//! sub-groups, and leaf pages. From that declaration the tree derives a
//! path → label lookup table used by the recent-pages tracker and the tab
//! strip.
//!
//! # Design
//!
//! - Paths are normalized on insert and on lookup (leading slash, no
//!   trailing slash), so `/mes/master/` and `/mes/master` name the same page.
//! - Containment is segment-aware: a leaf at `/mes/master` contains
//!   `/mes/master/machine` but not `/mes/masterdata`. Raw substring
//!   comparison over-matches exactly that second case.
//! - The label table is built while the tree is declared; later queries
//!   never rebuild it.
//!
//! # Examples
//!
//! ```
//! use gpui_navshell::menu::{MenuGroup, MenuTree};
//!
//! let menu = MenuTree::new()
//!     .label("/mes/dashboard", "대시보드")
//!     .group(
//!         MenuGroup::new("master", "기준정보")
//!             .item("/mes/master/machine", "설비 관리")
//!             .item("/mes/master/process", "공정 관리"),
//!     );
//!
//! assert_eq!(menu.label_for("/mes/dashboard"), Some("대시보드"));
//! assert_eq!(menu.group_keys_for_path("/mes/master/process"), vec!["master"]);
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

// ============================================================================
// Path Helpers
// ============================================================================

/// Normalize a path for consistent comparison
///
/// Ensures paths have a leading slash and no trailing slash (unless root).
/// Returns `Cow<str>` to avoid allocation when the path is already
/// normalized. Interior empty segments are left alone; segment splitting
/// filters them.
///
/// # Examples
///
/// ```
/// use gpui_navshell::menu::normalize_path;
///
/// assert_eq!(normalize_path("/mes/dashboard"), "/mes/dashboard");
/// assert_eq!(normalize_path("mes/dashboard"), "/mes/dashboard");
/// assert_eq!(normalize_path("/mes/dashboard/"), "/mes/dashboard");
/// assert_eq!(normalize_path("/"), "/");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &'_ str) -> Cow<'_, str> {
    if path.is_empty() {
        return Cow::Borrowed("/");
    }

    if path == "/" {
        return Cow::Borrowed(path);
    }

    let has_leading = path.starts_with('/');
    let has_trailing = path.ends_with('/');

    if has_leading && !has_trailing {
        return Cow::Borrowed(path);
    }

    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{trimmed}"))
    }
}

/// Split a path into segments, filtering empty segments
fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Segment-aware prefix check: does `path` lie at or under `prefix`?
///
/// Both sides are compared segment by segment, so `/mes/master` covers
/// `/mes/master` and `/mes/master/machine` but never `/mes/masterdata`.
/// An empty prefix (no segments) matches nothing.
///
/// # Examples
///
/// ```
/// use gpui_navshell::menu::path_starts_with;
///
/// assert!(path_starts_with("/mes/master/machine", "/mes/master"));
/// assert!(path_starts_with("/mes/master", "/mes/master"));
/// assert!(!path_starts_with("/mes/masterdata", "/mes/master"));
/// assert!(!path_starts_with("/mes/master", ""));
/// ```
#[must_use]
pub fn path_starts_with(path: &str, prefix: &str) -> bool {
    let prefix_segments = path_segments(prefix);
    if prefix_segments.is_empty() {
        return false;
    }
    path_segments(path).starts_with(&prefix_segments)
}

// ============================================================================
// Menu Tree
// ============================================================================

/// A leaf page in the sidebar menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Normalized page path
    pub path: String,
    /// Human label shown in the sidebar and on tabs
    pub label: String,
}

impl MenuItem {
    /// Create a leaf item; the path is normalized on construction.
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            path: normalize_path(&path).into_owned(),
            label: label.into(),
        }
    }
}

/// A sidebar group: leaf items plus optional sub-groups.
#[derive(Debug, Clone, Default)]
pub struct MenuGroup {
    /// Stable key used by the expand state
    pub key: String,
    /// Group title shown in the sidebar
    pub title: String,
    items: Vec<MenuItem>,
    groups: Vec<MenuGroup>,
}

impl MenuGroup {
    /// Create an empty group.
    ///
    /// The key must stay stable across releases: it is what the persisted
    /// open-keys list refers to.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            items: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Add a leaf page to this group.
    pub fn item(mut self, path: impl Into<String>, label: impl Into<String>) -> Self {
        self.items.push(MenuItem::new(path, label));
        self
    }

    /// Add a sub-group.
    pub fn group(mut self, group: MenuGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Leaf items declared directly on this group.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Sub-groups of this group.
    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// Whether any leaf in this subtree covers `path` (segment-aware).
    ///
    /// Expects a normalized path.
    pub fn contains_path(&self, path: &str) -> bool {
        self.items
            .iter()
            .any(|item| path_starts_with(path, &item.path))
            || self.groups.iter().any(|group| group.contains_path(path))
    }

    fn collect_labels(&self, table: &mut HashMap<String, String>) {
        for item in &self.items {
            table.insert(item.path.clone(), item.label.clone());
        }
        for group in &self.groups {
            group.collect_labels(table);
        }
    }
}

/// The complete sidebar menu plus the derived path → label table.
#[derive(Debug, Clone, Default)]
pub struct MenuTree {
    groups: Vec<MenuGroup>,
    labels: HashMap<String, String>,
}

impl MenuTree {
    /// Create an empty menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level group, folding its leaf labels into the lookup table.
    ///
    /// When two leaves share a path, the last registered label wins.
    pub fn group(mut self, group: MenuGroup) -> Self {
        group.collect_labels(&mut self.labels);
        self.groups.push(group);
        self
    }

    /// Register a label for a page reachable outside the menu, such as the
    /// home page.
    pub fn label(mut self, path: impl Into<String>, label: impl Into<String>) -> Self {
        let path = path.into();
        self.labels
            .insert(normalize_path(&path).into_owned(), label.into());
        self
    }

    /// Top-level groups in declaration order.
    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// Whether the menu has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up the label for an exact page path.
    ///
    /// Pages without a label here are not tracked by the recent list.
    pub fn label_for(&self, path: &str) -> Option<&str> {
        self.labels
            .get(normalize_path(path).as_ref())
            .map(String::as_str)
    }

    /// Keys of every group and sub-group whose subtree covers `path`.
    ///
    /// Drives sidebar auto-expansion: each returned key belongs to a group
    /// that must be open for the page at `path` to be visible.
    pub fn group_keys_for_path(&self, path: &str) -> Vec<&str> {
        let path = normalize_path(path);
        let mut keys = Vec::new();
        for group in &self.groups {
            push_containing_keys(group, &path, &mut keys);
        }
        keys
    }
}

fn push_containing_keys<'a>(group: &'a MenuGroup, path: &str, keys: &mut Vec<&'a str>) {
    if group.contains_path(path) {
        keys.push(group.key.as_str());
        for sub in group.groups() {
            push_containing_keys(sub, path, keys);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
