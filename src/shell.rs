//! Shell state integration for GPUI.
//!
//! This module provides the global shell state management through GPUI's
//! context system. It contains three key types:
//!
//! - [`NavigationShell`] — the central shell object stored as a GPUI
//!   `Global`. It owns the menu tree, the persistent store, the three
//!   durable state components (expand, recent, pinned), the transient tab
//!   strip state, and the host adapters.
//!
//! - [`Shell`] — a convenience API with static methods
//!   (`Shell::activate`, `Shell::toggle_pin_current`, …) that read/write
//!   the `NavigationShell` through `cx` and refresh windows after
//!   mutations.
//!
//! - [`ShellConfig`] — a builder collecting everything the shell needs at
//!   startup: the menu, a storage backend, storage keys, the home path,
//!   and the host callbacks.
//!
//! The shell does not navigate by itself. Page activation calls a
//! host-supplied [`NavigateHandler`]; the host router, once it lands on a
//! page, reports back through [`Shell::sync_active_path`], which expands
//! the sidebar, records the visit, and persists what changed.
//!
//! # Initialization
//!
//! Use [`init_shell`] before opening any window:
//!
//! ```ignore
//! use gpui_navshell::{init_shell, MenuGroup, MenuTree, ShellConfig};
//!
//! init_shell(cx, ShellConfig::new(menu)
//!     .home_path("/mes/dashboard")
//!     .on_navigate(|cx, path| my_router::open(cx, path)));
//! ```

use std::borrow::BorrowMut;
use std::sync::Arc;

use gpui::{App, BorrowAppContext, Global};

use crate::expand::ExpandState;
use crate::menu::{normalize_path, MenuTree};
use crate::pinned::{PinToggle, PinnedTabs};
use crate::recent::{PageEntry, RecentPages};
use crate::store::{MemoryBackend, PersistentStore, StorageBackend, StorageKeys};
use crate::strip::{self, ScrollCommand, TabGesture, TabStrip, VisibleTab};
use crate::{debug_log, info_log, trace_log, warn_log};

/// Host router callback, invoked with the path to open.
pub type NavigateHandler = Arc<dyn Fn(&mut App, &str) + Send + Sync>;

/// Host session callback, invoked when the user logs out.
pub type LogoutHandler = Arc<dyn Fn(&mut App) + Send + Sync>;

// ============================================================================
// SessionInfo
// ============================================================================

/// Signed-in user info shown in the sidebar footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Name rendered in the footer
    pub display_name: String,

    /// User or employee code rendered under the name
    pub code: String,
}

impl SessionInfo {
    /// Create session info for the footer.
    pub fn new(display_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            code: code.into(),
        }
    }
}

// ============================================================================
// ShellConfig
// ============================================================================

/// Startup configuration for the shell, collected with builder methods.
///
/// Storage defaults to an in-memory backend so a missing store never blocks
/// startup; pass a [`FileBackend`](crate::store::FileBackend) (or your own
/// backend) for durable state.
pub struct ShellConfig {
    menu: MenuTree,
    backend: Option<Box<dyn StorageBackend>>,
    keys: StorageKeys,
    home_path: String,
    on_navigate: Option<NavigateHandler>,
    session: Option<SessionInfo>,
    on_logout: Option<LogoutHandler>,
}

impl ShellConfig {
    /// Start a config around the sidebar menu.
    pub fn new(menu: MenuTree) -> Self {
        Self {
            menu,
            backend: None,
            keys: StorageKeys::default(),
            home_path: "/".to_string(),
            on_navigate: None,
            session: None,
            on_logout: None,
        }
    }

    /// Storage backend for the persisted lists.
    pub fn backend(mut self, backend: impl StorageBackend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    /// Override the storage keys, for hosts embedding several shells.
    pub fn storage_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    /// The page the logo row and [`Shell::go_home`] navigate to.
    pub fn home_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.home_path = normalize_path(&path).into_owned();
        self
    }

    /// Host router callback for page activation.
    pub fn on_navigate<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut App, &str) + Send + Sync + 'static,
    {
        self.on_navigate = Some(Arc::new(handler));
        self
    }

    /// Signed-in user info for the sidebar footer.
    pub fn session(mut self, session: SessionInfo) -> Self {
        self.session = Some(session);
        self
    }

    /// Host callback for the footer's logout button.
    pub fn on_logout<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut App) + Send + Sync + 'static,
    {
        self.on_logout = Some(Arc::new(handler));
        self
    }
}

// ============================================================================
// NavigationShell
// ============================================================================

/// Global shell state accessible from any component.
///
/// One value owns everything the shell knows: the static menu, the store
/// and its keys, the durable lists, the transient tab strip state, and the
/// host adapters. Constructed once at startup by [`init_shell`]; every
/// mutation is applied in memory first and then persisted best-effort in
/// the same call.
pub struct NavigationShell {
    menu: MenuTree,
    store: PersistentStore,
    keys: StorageKeys,
    expand: ExpandState,
    recent: RecentPages,
    pinned: PinnedTabs,
    strip: TabStrip,
    active_path: String,
    home_path: String,
    on_navigate: Option<NavigateHandler>,
    session: Option<SessionInfo>,
    on_logout: Option<LogoutHandler>,
}

impl NavigationShell {
    fn from_config(config: ShellConfig) -> Self {
        let store = match config.backend {
            Some(backend) => PersistentStore::new(BoxedBackend(backend)),
            None => PersistentStore::new(MemoryBackend::new()),
        };
        Self {
            menu: config.menu,
            store,
            keys: config.keys,
            expand: ExpandState::new(),
            recent: RecentPages::new(),
            pinned: PinnedTabs::new(),
            strip: TabStrip::new(),
            active_path: config.home_path.clone(),
            home_path: config.home_path,
            on_navigate: config.on_navigate,
            session: config.session,
            on_logout: config.on_logout,
        }
    }

    /// Load the three persisted lists. Missing or corrupt values load as
    /// empty lists; nothing here can fail startup.
    fn load_persisted(&mut self) {
        if let Some(keys) = self.store.load::<Vec<String>>(&self.keys.open_keys) {
            self.expand = ExpandState::from_keys(keys);
        }
        if let Some(entries) = self.store.load::<Vec<PageEntry>>(&self.keys.recent) {
            self.recent = RecentPages::from_entries(entries);
        }
        if let Some(entries) = self.store.load::<Vec<PageEntry>>(&self.keys.pinned) {
            self.pinned = PinnedTabs::from_entries(entries);
        }
        debug_log!(
            "Loaded shell state: {} open groups, {} recent, {} pinned",
            self.expand.len(),
            self.recent.len(),
            self.pinned.len()
        );
    }

    // ========================================================================
    // Route-change entry point
    // ========================================================================

    /// Record that the host router landed on `path`.
    ///
    /// Sets the active path, opens every sidebar group containing it,
    /// records the visit when the menu knows a label for it, and requests
    /// a scroll to the end of the tab strip when the visit appended a tab.
    /// Each changed list is persisted in the same call.
    pub fn sync_active_path(&mut self, path: impl Into<String>) {
        let raw = path.into();
        let path = normalize_path(&raw).into_owned();
        trace_log!("Active path: '{}'", path);
        self.active_path = path.clone();

        if self.expand.auto_expand_for_path(&path, &self.menu) {
            self.persist_open_keys();
        }

        let label = self.menu.label_for(&path).map(str::to_string);
        if self.recent.visit(&path, label.as_deref()) {
            self.persist_recent();
            self.strip.request_scroll_to_end();
        }
    }

    // ========================================================================
    // Sidebar operations
    // ========================================================================

    /// Toggle one sidebar group; returns whether it is open afterwards.
    pub fn toggle_group(&mut self, key: &str) -> bool {
        let open = self.expand.toggle(key);
        trace_log!(
            "Sidebar group '{}' {}",
            key,
            if open { "opened" } else { "closed" }
        );
        self.persist_open_keys();
        open
    }

    // ========================================================================
    // Tab operations
    // ========================================================================

    /// Pin or unpin the active page.
    ///
    /// The label comes from the menu; pages outside the menu fall back to
    /// their path so the affordance still works there.
    pub fn toggle_pin_current(&mut self) -> PinToggle {
        let path = self.active_path.clone();
        let label = self
            .menu
            .label_for(&path)
            .map_or_else(|| path.clone(), str::to_string);
        let outcome = self.pinned.toggle(&path, &label);
        debug_log!("Pin toggle for '{}': {:?}", path, outcome);
        self.persist_pinned();
        outcome
    }

    /// Unpin one page. Idempotent; persists only when something changed.
    pub fn unpin(&mut self, path: &str) -> bool {
        let changed = self.pinned.unpin(path);
        if changed {
            self.persist_pinned();
        }
        changed
    }

    /// Remove one page from the recent list. Idempotent.
    pub fn remove_recent(&mut self, path: &str) -> bool {
        let changed = self.recent.remove(path);
        if changed {
            self.persist_recent();
        }
        changed
    }

    /// Move a pinned tab; splice-move semantics, no-op on equal or
    /// out-of-range indices.
    pub fn reorder_pinned(&mut self, from: usize, to: usize) -> bool {
        let changed = self.pinned.reorder(from, to);
        if changed {
            debug_log!("Pinned tabs reordered: {} -> {}", from, to);
            self.persist_pinned();
        }
        changed
    }

    /// Close the whole unpinned region.
    pub fn clear_unpinned(&mut self) -> bool {
        let changed = self.recent.clear();
        if changed {
            self.persist_recent();
        }
        changed
    }

    // ========================================================================
    // Drag protocol
    // ========================================================================

    /// Open a drag session on a pinned-region index.
    pub fn begin_tab_drag(&mut self, index: usize) {
        self.strip.begin_drag(index);
    }

    /// Record the pointer hovering a pinned-region index.
    pub fn tab_drag_over(&mut self, index: usize) {
        self.strip.drag_over(index);
    }

    /// Close the session on a release over a pinned-region index.
    ///
    /// A drag applies its reorder here, exactly once. The returned gesture
    /// tells the caller whether the release was a clean click that should
    /// activate the tab instead.
    pub fn release_tab_over(&mut self, index: usize) -> TabGesture {
        let gesture = self.strip.release_over(index);
        if let TabGesture::Move { from, to } = gesture {
            self.reorder_pinned(from, to);
        }
        gesture
    }

    /// Abandon the drag session. Idempotent.
    pub fn cancel_tab_drag(&mut self) {
        self.strip.cancel_drag();
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    /// Ask the unpinned region to scroll by a pixel delta after the next
    /// paint.
    pub fn scroll_tabs_by(&mut self, delta: f32) {
        self.strip.request_scroll_by(delta);
    }

    /// Take the pending scroll intent, leaving none.
    pub fn take_scroll_command(&mut self) -> Option<ScrollCommand> {
        self.strip.take_scroll_command()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The merged tab row: pinned first, then recent minus pinned.
    /// Derived fresh on every call.
    pub fn visible_tabs(&self) -> Vec<VisibleTab<'_>> {
        strip::visible_tabs(&self.pinned, &self.recent)
    }

    /// The path the host router currently shows.
    pub fn active_path(&self) -> &str {
        &self.active_path
    }

    /// The home page path.
    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// The sidebar menu.
    pub fn menu(&self) -> &MenuTree {
        &self.menu
    }

    /// The expand state.
    pub fn expand(&self) -> &ExpandState {
        &self.expand
    }

    /// The recent-pages list.
    pub fn recent(&self) -> &RecentPages {
        &self.recent
    }

    /// The pinned-tabs list.
    pub fn pinned(&self) -> &PinnedTabs {
        &self.pinned
    }

    /// The transient tab strip state.
    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    /// Whether the active page is pinned.
    pub fn is_current_pinned(&self) -> bool {
        self.pinned.is_pinned(&self.active_path)
    }

    /// Signed-in user info, if the host provided any.
    pub fn session(&self) -> Option<&SessionInfo> {
        self.session.as_ref()
    }

    fn navigate_handler(&self) -> Option<NavigateHandler> {
        self.on_navigate.clone()
    }

    fn logout_handler(&self) -> Option<LogoutHandler> {
        self.on_logout.clone()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    fn persist_open_keys(&mut self) {
        self.store.save(&self.keys.open_keys, self.expand.keys());
    }

    fn persist_recent(&mut self) {
        self.store.save(&self.keys.recent, self.recent.entries());
    }

    fn persist_pinned(&mut self) {
        self.store.save(&self.keys.pinned, self.pinned.tabs());
    }
}

impl Global for NavigationShell {}

/// Adapter so a `Box<dyn StorageBackend>` from the config can feed
/// `PersistentStore::new`, which takes the backend by value.
struct BoxedBackend(Box<dyn StorageBackend>);

impl StorageBackend for BoxedBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.0.read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> crate::error::StoreResult<()> {
        self.0.write(key, value)
    }

    fn remove(&mut self, key: &str) -> crate::error::StoreResult<()> {
        self.0.remove(key)
    }
}

// ============================================================================
// UseShell trait
// ============================================================================

/// Trait for accessing the global shell from context.
pub trait UseShell {
    /// Get reference to the global shell.
    fn shell(&self) -> &NavigationShell;

    /// Update the global shell.
    fn update_shell<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut NavigationShell, &mut App) -> R;

    /// Whether [`init_shell`] has run.
    fn shell_installed(&self) -> bool;
}

impl UseShell for App {
    fn shell(&self) -> &NavigationShell {
        self.global::<NavigationShell>()
    }

    fn update_shell<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut NavigationShell, &mut App) -> R,
    {
        self.update_global(f)
    }

    fn shell_installed(&self) -> bool {
        self.try_global::<NavigationShell>().is_some()
    }
}

// ============================================================================
// init_shell
// ============================================================================

/// Initialize the global shell from a [`ShellConfig`].
///
/// Loads the persisted lists (missing or corrupt values come back empty)
/// and installs the shell as a GPUI global. Calling it again replaces the
/// installed shell.
///
/// # Example
///
/// ```ignore
/// use gpui_navshell::{init_shell, MenuGroup, MenuTree, ShellConfig};
///
/// let menu = MenuTree::new()
///     .label("/mes/dashboard", "대시보드")
///     .group(MenuGroup::new("master", "기준정보").item("/mes/master/machine", "설비 관리"));
///
/// init_shell(cx, ShellConfig::new(menu).home_path("/mes/dashboard"));
/// ```
pub fn init_shell(cx: &mut App, config: ShellConfig) {
    if cx.shell_installed() {
        debug_log!("Navigation shell already installed; replacing");
    }
    let mut shell = NavigationShell::from_config(config);
    shell.load_persisted();
    info_log!("Navigation shell installed (home: '{}')", shell.home_path);
    cx.set_global(shell);
}

// ============================================================================
// Shell
// ============================================================================

/// Shell API for convenient state access from windows and elements.
///
/// Provides static methods over the global [`NavigationShell`]:
/// - `Shell::activate(cx, "/path")` — open a page through the host router
/// - `Shell::toggle_pin_current(cx)` — pin/unpin the active page
/// - `Shell::sync_active_path(cx, "/path")` — report a route change
///
/// Mutating methods refresh all windows afterwards.
///
/// # Example
///
/// ```ignore
/// use gpui_navshell::Shell;
///
/// Shell::activate(cx, "/mes/master/machine");
/// Shell::toggle_group(cx, "master");
/// Shell::toggle_pin_current(cx);
/// ```
pub struct Shell;

impl Shell {
    /// Report that the host router landed on `path`.
    pub fn sync_active_path(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
        path: impl Into<String>,
    ) {
        let path = path.into();
        cx.update_global::<NavigationShell, _>(|shell, _| {
            shell.sync_active_path(path);
        });
        cx.borrow_mut().refresh_windows();
    }

    /// Open a page through the host router.
    ///
    /// The handler runs outside the global borrow, so it is free to call
    /// back into the shell (typically via
    /// [`sync_active_path`](Self::sync_active_path)).
    pub fn activate(cx: &mut (impl BorrowAppContext + BorrowMut<App>), path: impl Into<String>) {
        let path = path.into();
        let app: &mut App = cx.borrow_mut();
        let handler = app.global::<NavigationShell>().navigate_handler();
        match handler {
            Some(handler) => {
                debug_log!("Shell::activate: '{}'", path);
                handler(app, &path);
            }
            None => {
                warn_log!("Shell::activate: no navigate handler installed for '{}'", path);
            }
        }
        app.refresh_windows();
    }

    /// Navigate to the home page.
    pub fn go_home(cx: &mut (impl BorrowAppContext + BorrowMut<App>)) {
        let home = cx.borrow_mut().global::<NavigationShell>().home_path().to_string();
        Self::activate(cx, home);
    }

    /// Re-open the active page through the host router.
    pub fn refresh_current(cx: &mut (impl BorrowAppContext + BorrowMut<App>)) {
        let current = cx
            .borrow_mut()
            .global::<NavigationShell>()
            .active_path()
            .to_string();
        Self::activate(cx, current);
    }

    /// Toggle one sidebar group.
    pub fn toggle_group(cx: &mut (impl BorrowAppContext + BorrowMut<App>), key: impl AsRef<str>) {
        cx.update_global::<NavigationShell, _>(|shell, _| {
            shell.toggle_group(key.as_ref());
        });
        cx.borrow_mut().refresh_windows();
    }

    /// Pin or unpin the active page.
    pub fn toggle_pin_current(cx: &mut (impl BorrowAppContext + BorrowMut<App>)) {
        cx.update_global::<NavigationShell, _>(|shell, _| {
            shell.toggle_pin_current();
        });
        cx.borrow_mut().refresh_windows();
    }

    /// Unpin one page.
    pub fn unpin(cx: &mut (impl BorrowAppContext + BorrowMut<App>), path: impl AsRef<str>) {
        cx.update_global::<NavigationShell, _>(|shell, _| {
            shell.unpin(path.as_ref());
        });
        cx.borrow_mut().refresh_windows();
    }

    /// Remove one page from the recent list.
    pub fn remove_recent(cx: &mut (impl BorrowAppContext + BorrowMut<App>), path: impl AsRef<str>) {
        cx.update_global::<NavigationShell, _>(|shell, _| {
            shell.remove_recent(path.as_ref());
        });
        cx.borrow_mut().refresh_windows();
    }

    /// Move a pinned tab.
    pub fn reorder_pinned(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
        from: usize,
        to: usize,
    ) {
        cx.update_global::<NavigationShell, _>(|shell, _| {
            shell.reorder_pinned(from, to);
        });
        cx.borrow_mut().refresh_windows();
    }

    /// Close the whole unpinned region.
    pub fn clear_unpinned(cx: &mut (impl BorrowAppContext + BorrowMut<App>)) {
        cx.update_global::<NavigationShell, _>(|shell, _| {
            shell.clear_unpinned();
        });
        cx.borrow_mut().refresh_windows();
    }

    /// Open a drag session on a pinned-region index.
    pub fn begin_tab_drag(cx: &mut (impl BorrowAppContext + BorrowMut<App>), index: usize) {
        cx.update_global::<NavigationShell, _>(|shell, _| {
            shell.begin_tab_drag(index);
        });
        cx.borrow_mut().refresh_windows();
    }

    /// Record the pointer hovering a pinned-region index.
    pub fn tab_drag_over(cx: &mut (impl BorrowAppContext + BorrowMut<App>), index: usize) {
        cx.update_global::<NavigationShell, _>(|shell, _| {
            shell.tab_drag_over(index);
        });
        cx.borrow_mut().refresh_windows();
    }

    /// Close the drag session on a release over the pinned tab at `index`,
    /// whose page is `path`.
    ///
    /// A clean click activates the page; a drag applies its reorder and
    /// never activates.
    pub fn release_tab(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
        index: usize,
        path: impl Into<String>,
    ) {
        let gesture =
            cx.update_global::<NavigationShell, _>(|shell, _| shell.release_tab_over(index));
        match gesture {
            TabGesture::Activate => Self::activate(cx, path),
            TabGesture::Move { .. } => cx.borrow_mut().refresh_windows(),
        }
    }

    /// Abandon the drag session (release outside any tab, escape, blur).
    pub fn cancel_tab_drag(cx: &mut (impl BorrowAppContext + BorrowMut<App>)) {
        cx.update_global::<NavigationShell, _>(|shell, _| {
            shell.cancel_tab_drag();
        });
        cx.borrow_mut().refresh_windows();
    }

    /// Ask the unpinned region to scroll by a pixel delta.
    pub fn scroll_tabs_by(cx: &mut (impl BorrowAppContext + BorrowMut<App>), delta: f32) {
        cx.update_global::<NavigationShell, _>(|shell, _| {
            shell.scroll_tabs_by(delta);
        });
        cx.borrow_mut().refresh_windows();
    }

    /// Take the pending scroll intent. Called by the tab strip widget after
    /// paint; does not refresh windows.
    pub fn take_scroll_command(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
    ) -> Option<ScrollCommand> {
        cx.update_global::<NavigationShell, _>(|shell, _| shell.take_scroll_command())
    }

    /// Log out through the host session callback.
    pub fn logout(cx: &mut (impl BorrowAppContext + BorrowMut<App>)) {
        let app: &mut App = cx.borrow_mut();
        let handler = app.global::<NavigationShell>().logout_handler();
        match handler {
            Some(handler) => {
                info_log!("Logging out");
                handler(app);
            }
            None => {
                warn_log!("Shell::logout: no logout handler installed");
            }
        }
        app.refresh_windows();
    }

    /// The path the host router currently shows.
    pub fn active_path(cx: &App) -> String {
        cx.shell().active_path().to_string()
    }

    /// Whether the active page is pinned.
    pub fn is_current_pinned(cx: &App) -> bool {
        cx.shell().is_current_pinned()
    }

    /// Signed-in user info, if the host provided any.
    pub fn session(cx: &App) -> Option<SessionInfo> {
        cx.shell().session().cloned()
    }

    /// Whether [`init_shell`] has run.
    pub fn installed(cx: &App) -> bool {
        cx.shell_installed()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreResult;
    use crate::menu::MenuGroup;
    use crate::store::MemoryBackend;
    use gpui::TestAppContext;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Mutex;

    fn test_menu() -> MenuTree {
        MenuTree::new()
            .label("/mes/dashboard", "대시보드")
            .group(
                MenuGroup::new("master", "기준정보")
                    .item("/mes/master/machine", "설비 관리")
                    .item("/mes/master/process", "공정 관리"),
            )
            .group(
                MenuGroup::new("production", "생산관리").item("/mes/production/plan", "생산 계획"),
            )
    }

    /// Backend handle that keeps the underlying map inspectable after the
    /// shell takes ownership of its clone.
    #[derive(Clone)]
    struct SharedBackend(Rc<RefCell<MemoryBackend>>);

    impl SharedBackend {
        fn new() -> Self {
            Self(Rc::new(RefCell::new(MemoryBackend::new())))
        }

        fn seed(self, key: &str, value: &str) -> Self {
            (*self.0)
                .borrow_mut()
                .write(key, value)
                .expect("memory write cannot fail");
            self
        }

        fn raw(&self, key: &str) -> Option<String> {
            self.0.borrow().read(key)
        }
    }

    impl StorageBackend for SharedBackend {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
            (*self.0).borrow_mut().write(key, value)
        }

        fn remove(&mut self, key: &str) -> StoreResult<()> {
            (*self.0).borrow_mut().remove(key)
        }
    }

    fn init_test_shell(cx: &mut TestAppContext, backend: SharedBackend) {
        cx.update(|cx| {
            init_shell(
                cx,
                ShellConfig::new(test_menu())
                    .backend(backend)
                    .home_path("/mes/dashboard"),
            );
        });
    }

    #[gpui::test]
    fn test_init_installs_shell(cx: &mut TestAppContext) {
        init_test_shell(cx, SharedBackend::new());

        assert!(cx.read(Shell::installed));
        assert_eq!(cx.read(Shell::active_path), "/mes/dashboard");
        assert!(cx.read(|cx| cx.shell().visible_tabs().is_empty()));
    }

    #[gpui::test]
    fn test_sync_tracks_visit_and_expands(cx: &mut TestAppContext) {
        init_test_shell(cx, SharedBackend::new());

        cx.update(|cx| Shell::sync_active_path(cx, "/mes/master/machine"));

        cx.read(|cx| {
            let shell = cx.shell();
            assert_eq!(shell.active_path(), "/mes/master/machine");
            assert!(shell.expand().is_open("master"));
            assert!(shell.recent().contains("/mes/master/machine"));
        });
    }

    #[gpui::test]
    fn test_sync_unlabeled_path_not_tracked(cx: &mut TestAppContext) {
        init_test_shell(cx, SharedBackend::new());

        cx.update(|cx| Shell::sync_active_path(cx, "/mes/unknown/page"));

        cx.read(|cx| {
            let shell = cx.shell();
            assert_eq!(shell.active_path(), "/mes/unknown/page");
            assert!(shell.recent().is_empty());
        });
    }

    #[gpui::test]
    fn test_visit_requests_scroll_to_end(cx: &mut TestAppContext) {
        init_test_shell(cx, SharedBackend::new());

        cx.update(|cx| Shell::sync_active_path(cx, "/mes/master/machine"));
        cx.read(|cx| {
            assert_eq!(cx.shell().strip().pending_scroll(), Some(ScrollCommand::ToEnd));
        });

        // A repeat visit appends nothing and requests nothing.
        cx.update(|cx| {
            let _ = Shell::take_scroll_command(cx);
            Shell::sync_active_path(cx, "/mes/master/machine");
        });
        cx.read(|cx| assert_eq!(cx.shell().strip().pending_scroll(), None));
    }

    #[gpui::test]
    fn test_activate_invokes_navigate_handler(cx: &mut TestAppContext) {
        let navigated = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = navigated.clone();

        cx.update(|cx| {
            init_shell(
                cx,
                ShellConfig::new(test_menu())
                    .home_path("/mes/dashboard")
                    .on_navigate(move |_cx, path| sink.lock().unwrap().push(path.to_string())),
            );
        });

        cx.update(|cx| Shell::activate(cx, "/mes/master/machine"));
        assert_eq!(
            navigated.lock().unwrap().as_slice(),
            ["/mes/master/machine".to_string()]
        );
    }

    #[gpui::test]
    fn test_activate_without_handler_is_harmless(cx: &mut TestAppContext) {
        init_test_shell(cx, SharedBackend::new());
        cx.update(|cx| Shell::activate(cx, "/mes/master/machine"));
        assert_eq!(cx.read(Shell::active_path), "/mes/dashboard");
    }

    #[gpui::test]
    fn test_toggle_pin_uses_menu_label(cx: &mut TestAppContext) {
        init_test_shell(cx, SharedBackend::new());

        cx.update(|cx| {
            Shell::sync_active_path(cx, "/mes/master/machine");
            Shell::toggle_pin_current(cx);
        });

        cx.read(|cx| {
            let shell = cx.shell();
            assert!(shell.is_current_pinned());
            assert_eq!(shell.pinned().tabs()[0].label, "설비 관리");
        });
    }

    #[gpui::test]
    fn test_toggle_pin_falls_back_to_path(cx: &mut TestAppContext) {
        init_test_shell(cx, SharedBackend::new());

        cx.update(|cx| {
            Shell::sync_active_path(cx, "/mes/unknown/page");
            Shell::toggle_pin_current(cx);
        });

        cx.read(|cx| {
            let shell = cx.shell();
            assert_eq!(shell.pinned().tabs()[0].label, "/mes/unknown/page");
        });
    }

    #[gpui::test]
    fn test_clean_click_activates_tab(cx: &mut TestAppContext) {
        let navigated = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = navigated.clone();

        cx.update(|cx| {
            init_shell(
                cx,
                ShellConfig::new(test_menu())
                    .home_path("/mes/dashboard")
                    .on_navigate(move |_cx, path| sink.lock().unwrap().push(path.to_string())),
            );
            Shell::sync_active_path(cx, "/mes/master/machine");
            Shell::toggle_pin_current(cx);
        });

        cx.update(|cx| {
            Shell::begin_tab_drag(cx, 0);
            Shell::release_tab(cx, 0, "/mes/master/machine");
        });

        assert_eq!(
            navigated.lock().unwrap().as_slice(),
            ["/mes/master/machine".to_string()]
        );
    }

    #[gpui::test]
    fn test_drag_reorders_without_activation(cx: &mut TestAppContext) {
        let navigated = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = navigated.clone();

        cx.update(|cx| {
            init_shell(
                cx,
                ShellConfig::new(test_menu())
                    .home_path("/mes/dashboard")
                    .on_navigate(move |_cx, path| sink.lock().unwrap().push(path.to_string())),
            );
            for path in ["/mes/dashboard", "/mes/master/machine", "/mes/master/process"] {
                Shell::sync_active_path(cx, path);
                Shell::toggle_pin_current(cx);
            }
        });

        cx.update(|cx| {
            Shell::begin_tab_drag(cx, 0);
            Shell::tab_drag_over(cx, 2);
            Shell::release_tab(cx, 2, "/mes/dashboard");
        });

        assert!(navigated.lock().unwrap().is_empty());
        cx.read(|cx| {
            let paths: Vec<String> = cx
                .shell()
                .pinned()
                .tabs()
                .iter()
                .map(|t| t.path.clone())
                .collect();
            assert_eq!(
                paths,
                ["/mes/master/machine", "/mes/master/process", "/mes/dashboard"]
            );
        });
    }

    #[gpui::test]
    fn test_cancel_then_release_is_click(cx: &mut TestAppContext) {
        let navigated = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = navigated.clone();

        cx.update(|cx| {
            init_shell(
                cx,
                ShellConfig::new(test_menu())
                    .home_path("/mes/dashboard")
                    .on_navigate(move |_cx, path| sink.lock().unwrap().push(path.to_string())),
            );
            Shell::sync_active_path(cx, "/mes/master/machine");
            Shell::toggle_pin_current(cx);
        });

        cx.update(|cx| {
            Shell::begin_tab_drag(cx, 0);
            Shell::tab_drag_over(cx, 0);
            Shell::cancel_tab_drag(cx);
            Shell::release_tab(cx, 0, "/mes/master/machine");
        });

        assert_eq!(navigated.lock().unwrap().len(), 1);
    }

    #[gpui::test]
    fn test_write_through_persistence(cx: &mut TestAppContext) {
        let backend = SharedBackend::new();
        init_test_shell(cx, backend.clone());

        cx.update(|cx| {
            Shell::sync_active_path(cx, "/mes/master/machine");
            Shell::toggle_pin_current(cx);
        });

        let recent = backend.raw("mes_recent_pages").expect("recent saved");
        assert!(recent.contains("/mes/master/machine"));
        let pinned = backend.raw("mes_pinned_tabs").expect("pinned saved");
        assert!(pinned.contains("설비 관리"));
        let open = backend.raw("mes_sidebar_open_keys").expect("open keys saved");
        assert!(open.contains("master"));
    }

    #[gpui::test]
    fn test_reload_restores_state(cx: &mut TestAppContext) {
        let backend = SharedBackend::new();
        init_test_shell(cx, backend.clone());

        cx.update(|cx| {
            Shell::sync_active_path(cx, "/mes/master/machine");
            Shell::toggle_pin_current(cx);
            Shell::sync_active_path(cx, "/mes/production/plan");
        });

        // Fresh shell over the same backend, as on app restart.
        init_test_shell(cx, backend);

        cx.read(|cx| {
            let shell = cx.shell();
            assert!(shell.pinned().is_pinned("/mes/master/machine"));
            assert!(shell.recent().contains("/mes/production/plan"));
            assert!(shell.expand().is_open("master"));
            assert!(shell.expand().is_open("production"));
        });
    }

    #[gpui::test]
    fn test_corrupt_storage_loads_empty(cx: &mut TestAppContext) {
        let backend = SharedBackend::new()
            .seed("mes_recent_pages", "{definitely not json")
            .seed("mes_pinned_tabs", "42")
            .seed("mes_sidebar_open_keys", "{\"a\":1}");
        init_test_shell(cx, backend);

        cx.read(|cx| {
            let shell = cx.shell();
            assert!(shell.recent().is_empty());
            assert!(shell.pinned().is_empty());
            assert!(shell.expand().is_empty());
        });
    }

    #[gpui::test]
    fn test_remove_recent_and_unpin_round_trip(cx: &mut TestAppContext) {
        init_test_shell(cx, SharedBackend::new());

        cx.update(|cx| {
            Shell::sync_active_path(cx, "/mes/master/machine");
            Shell::toggle_pin_current(cx);
            Shell::unpin(cx, "/mes/master/machine");
            Shell::remove_recent(cx, "/mes/master/machine");
        });

        cx.read(|cx| {
            let shell = cx.shell();
            assert!(shell.pinned().is_empty());
            assert!(shell.recent().is_empty());
        });
    }

    #[gpui::test]
    fn test_scroll_requests_coalesce(cx: &mut TestAppContext) {
        init_test_shell(cx, SharedBackend::new());

        cx.update(|cx| {
            Shell::scroll_tabs_by(cx, 120.0);
            Shell::scroll_tabs_by(cx, -40.0);
        });

        cx.update(|cx| {
            assert_eq!(Shell::take_scroll_command(cx), Some(ScrollCommand::By(80.0)));
            assert_eq!(Shell::take_scroll_command(cx), None);
        });
    }
}
