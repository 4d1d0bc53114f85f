//! Navigation shell for GPUI applications.
//!
//! `gpui-navshell` provides the chrome that wraps an application's pages:
//! a grouped sidebar menu, a tab strip with pinned and recently visited
//! pages, and persistence for all of it between launches. It does not
//! route — page activation goes through a callback into whatever router
//! the host already has, and route changes are reported back with one
//! call.
//!
//! # Features
//!
//! - **Sidebar menu** — static tree of groups, sub-groups, and leaf
//!   pages; collapsible sections that auto-open along the active path
//! - **Recent pages** — insertion-ordered, deduplicated list of visited
//!   pages, shown as the scrollable region of the tab strip
//! - **Pinned tabs** — user-curated tabs ahead of the recent region,
//!   reorderable by drag
//! - **Persistence** — open groups, recent pages, and pinned tabs stored
//!   as JSON through a pluggable [`StorageBackend`]; corrupt or missing
//!   data loads as empty state
//! - **Host integration** — plain callbacks for navigation and logout,
//!   no trait to implement
//!
//! # Quick Start
//!
//! ```ignore
//! use gpui::prelude::*;
//! use gpui::*;
//! use gpui_navshell::{
//!     init_shell, shell_sidebar, shell_tab_bar, MenuGroup, MenuTree, Shell, ShellConfig,
//! };
//!
//! struct MainWindow;
//!
//! impl Render for MainWindow {
//!     fn render(&mut self, window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
//!         div()
//!             .size_full()
//!             .flex()
//!             .child(shell_sidebar(window, cx, "sidebar"))
//!             .child(
//!                 div()
//!                     .flex_grow()
//!                     .flex()
//!                     .flex_col()
//!                     .child(shell_tab_bar(window, cx, "tabs"))
//!                     .child(div().flex_grow().child("page content")),
//!             )
//!     }
//! }
//!
//! fn main() {
//!     Application::new().run(|cx: &mut App| {
//!         let menu = MenuTree::new()
//!             .label("/mes/dashboard", "대시보드")
//!             .group(
//!                 MenuGroup::new("master", "기준정보")
//!                     .item("/mes/master/machine", "설비 관리")
//!                     .item("/mes/master/process", "공정 관리"),
//!             );
//!
//!         init_shell(
//!             cx,
//!             ShellConfig::new(menu)
//!                 .home_path("/mes/dashboard")
//!                 .on_navigate(|cx, path| {
//!                     // hand off to the host router, then report back
//!                     Shell::sync_active_path(cx, path);
//!                 }),
//!         );
//!
//!         cx.open_window(WindowOptions::default(), |_, cx| cx.new(|_| MainWindow))
//!             .unwrap();
//!     });
//! }
//! ```
//!
//! # Storage
//!
//! State lives under three keys (`mes_recent_pages`, `mes_pinned_tabs`,
//! `mes_sidebar_open_keys` by default; see [`StorageKeys`]) as JSON
//! arrays. Reads that fail for any reason come back as `None` and the
//! shell starts that list empty; writes are best-effort and never
//! interrupt navigation. [`MemoryBackend`] is always available;
//! [`FileBackend`] (feature `file-store`, on by default) keeps one file
//! per key under the platform data directory.
//!
//! # Feature Flags
//!
//! | Feature      | Default | Description                                  |
//! |--------------|---------|----------------------------------------------|
//! | `log`        | ✅      | Internal logging via the `log` crate         |
//! | `tracing`    | ❌      | Internal logging via `tracing` (alternative) |
//! | `file-store` | ✅      | [`FileBackend`] backed by the data directory |

mod logging;

pub mod error;
pub mod expand;
pub mod menu;
pub mod pinned;
pub mod recent;
pub mod shell;
pub mod store;
pub mod strip;
pub mod widgets;

pub use error::{StoreError, StoreResult};
pub use expand::ExpandState;
pub use menu::{normalize_path, path_starts_with, MenuGroup, MenuItem, MenuTree};
pub use pinned::{PinToggle, PinnedTabs};
pub use recent::{PageEntry, RecentPages};
pub use shell::{
    init_shell, LogoutHandler, NavigateHandler, NavigationShell, SessionInfo, Shell, ShellConfig,
    UseShell,
};
#[cfg(feature = "file-store")]
pub use store::FileBackend;
pub use store::{MemoryBackend, PersistentStore, StorageBackend, StorageKeys};
pub use strip::{visible_tabs, DragSession, ScrollCommand, TabGesture, TabStrip, VisibleTab};
pub use widgets::{shell_sidebar, shell_tab_bar, ShellSidebar, ShellTabBar};
