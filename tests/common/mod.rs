//! Test utilities for shell state tests
//!
//! Provides the sample MES menu and a shared storage backend for
//! persistence round trips.

#![allow(dead_code)]

use gpui_navshell::*;
use std::sync::{Arc, Mutex};

/// The menu used across the state tests: two-level groups with Korean
/// labels, one nested sub-group.
pub fn sample_menu() -> MenuTree {
    MenuTree::new()
        .label("/mes/dashboard", "대시보드")
        .group(
            MenuGroup::new("master", "기준정보")
                .item("/mes/master/machine", "설비 관리")
                .item("/mes/master/process", "공정 관리"),
        )
        .group(
            MenuGroup::new("production", "생산관리")
                .item("/mes/production/plan", "생산 계획")
                .group(
                    MenuGroup::new("production-report", "생산실적")
                        .item("/mes/production/report/daily", "일일 실적"),
                ),
        )
}

/// Backend whose map outlives any one store, so tests can inspect raw
/// values and rebuild stores over the same data.
#[derive(Clone, Default)]
pub struct SharedBackend(Arc<Mutex<MemoryBackend>>);

impl SharedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, for corrupt-data and migration scenarios.
    pub fn seed(self, key: &str, value: &str) -> Self {
        self.0
            .lock()
            .unwrap()
            .write(key, value)
            .expect("memory write cannot fail");
        self
    }

    /// Raw stored value, bypassing the store's JSON layer.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.0.lock().unwrap().read(key)
    }
}

impl StorageBackend for SharedBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.0.lock().unwrap().read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.0.lock().unwrap().write(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.0.lock().unwrap().remove(key)
    }
}

/// Paths of a list of entries, in order.
pub fn entry_paths(entries: &[PageEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.path.as_str()).collect()
}

/// Paths of the merged tab row, in order.
pub fn visible_paths(pinned: &PinnedTabs, recent: &RecentPages) -> Vec<String> {
    visible_tabs(pinned, recent)
        .iter()
        .map(|tab| tab.entry.path.clone())
        .collect()
}
