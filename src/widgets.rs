//! Shell widgets: sidebar menu and tab strip.
//!
//! This module provides the GPUI components that render the shell chrome:
//!
//! - [`ShellSidebar`] / [`shell_sidebar`] — the grouped sidebar menu with
//!   collapsible sections, active-item highlight, and a session footer.
//! - [`ShellTabBar`] / [`shell_tab_bar`] — the tab strip: pinned tabs on
//!   the left (drag to reorder), the scrollable recent region on the
//!   right.
//!
//! Both widgets are thin views over the global
//! [`NavigationShell`](crate::shell::NavigationShell): they snapshot the
//! state they need at render time and push every interaction through the
//! [`Shell`] API, so any number of windows can show the same shell.
//!
//! ```text
//! ┌ sidebar ──┐┌ tab bar ────────────────────────────────┐
//! │ MES       ││ [*설비 관리][*공정 관리] | [생산 계획]  < > │
//! │ v 기준정보 │└─────────────────────────────────────────┘
//! │   설비 관리 │   pinned (drag to reorder)   recent (scroll)
//! │   공정 관리 │
//! │ > 생산관리 │
//! └───────────┘
//! ```

use crate::expand::ExpandState;
use crate::menu::MenuGroup;
use crate::shell::{NavigationShell, SessionInfo, Shell, UseShell};
use crate::strip::ScrollCommand;
use crate::{debug_log, trace_log};
use gpui::prelude::*;
use gpui::*;

// ============================================================================
// ShellSidebar
// ============================================================================

/// Sidebar component rendering the menu tree.
///
/// Group headers toggle their section, leaf rows activate their page
/// through the host router, and the title row navigates home. The open
/// set and the active highlight come from the global shell, so the
/// sidebar needs no state of its own.
///
/// # Examples
///
/// ```ignore
/// cx.new(|_| ShellSidebar::new().title("MES"))
/// ```
pub struct ShellSidebar {
    title: SharedString,
}

impl ShellSidebar {
    /// Create a sidebar with the default title.
    pub fn new() -> Self {
        Self {
            title: SharedString::from("Home"),
        }
    }

    /// Title shown in the header row, which navigates home on click.
    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for ShellSidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for ShellSidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        if !Shell::installed(cx) {
            trace_log!("ShellSidebar: no navigation shell installed");
            return div().child("No navigation shell configured").into_any_element();
        }

        // Snapshot shell state, then drop the borrow
        let (menu, expand, active_path, session) = {
            let shell = cx.shell();
            (
                shell.menu().clone(),
                shell.expand().clone(),
                shell.active_path().to_string(),
                shell.session().cloned(),
            )
        };

        div()
            .w(px(240.0))
            .h_full()
            .flex()
            .flex_col()
            .bg(rgb(0x252526))
            .border_r_1()
            .border_color(rgb(0x3c3c3c))
            .child(
                div()
                    .id("shell-home")
                    .px(px(16.0))
                    .py(px(14.0))
                    .text_size(px(14.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(rgb(0xffffff))
                    .cursor_pointer()
                    .hover(|s| s.bg(rgb(0x2d2d2d)))
                    .on_click(cx.listener(|_this, _event, _window, cx| {
                        Shell::go_home(cx);
                    }))
                    .child(self.title.clone()),
            )
            .child(
                div()
                    .id("shell-sidebar-scroll")
                    .flex_grow()
                    .overflow_y_scroll()
                    .flex()
                    .flex_col()
                    .py(px(8.0))
                    .children(
                        menu.groups()
                            .iter()
                            .map(|group| group_section(group, 0, &active_path, &expand, cx))
                            .collect::<Vec<_>>(),
                    ),
            )
            .when_some(session, |el, session| el.child(session_footer(&session, cx)))
            .into_any_element()
    }
}

/// Create a cached ShellSidebar that persists across renders.
pub fn shell_sidebar<V>(
    window: &mut Window,
    cx: &mut Context<'_, V>,
    key: impl Into<String>,
) -> impl IntoElement {
    window
        .use_keyed_state(ElementId::Name(key.into().into()), cx, |_, _| {
            ShellSidebar::new()
        })
        .clone()
}

/// One collapsible section: a header row plus, when open, its leaf rows
/// and sub-sections.
fn group_section(
    group: &MenuGroup,
    depth: usize,
    active_path: &str,
    expand: &ExpandState,
    cx: &mut Context<'_, ShellSidebar>,
) -> Div {
    let key = group.key.clone();
    let open = expand.is_open(&key);
    let indent = px(12.0 + depth as f32 * 12.0);

    let header = div()
        .id(SharedString::from(format!("group-{}", group.key)))
        .flex()
        .items_center()
        .gap(px(8.0))
        .pl(indent)
        .pr(px(12.0))
        .py(px(8.0))
        .cursor_pointer()
        .hover(|s| s.bg(rgb(0x2d2d2d)))
        .on_click(cx.listener(move |_this, _event, _window, cx| {
            Shell::toggle_group(cx, key.clone());
        }))
        .child(
            div()
                .text_size(px(9.0))
                .text_color(rgb(0x888888))
                .child(if open { "v" } else { ">" }),
        )
        .child(
            div()
                .text_size(px(12.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(rgb(0xcccccc))
                .child(group.title.clone()),
        );

    div()
        .flex()
        .flex_col()
        .child(header)
        .when(open, |el| {
            el.children(
                group
                    .items()
                    .iter()
                    .map(|item| {
                        leaf_row(&item.path, &item.label, depth + 1, active_path, cx)
                    })
                    .collect::<Vec<_>>(),
            )
            .children(
                group
                    .groups()
                    .iter()
                    .map(|sub| group_section(sub, depth + 1, active_path, expand, cx))
                    .collect::<Vec<_>>(),
            )
        })
}

/// One leaf page row. Activates its page through the host router.
fn leaf_row(
    path: &str,
    label: &str,
    depth: usize,
    active_path: &str,
    cx: &mut Context<'_, ShellSidebar>,
) -> impl IntoElement {
    let is_active = path == active_path;
    let target = path.to_string();
    let indent = px(12.0 + depth as f32 * 12.0);

    div()
        .id(SharedString::from(format!("nav-{}", path)))
        .pl(indent)
        .pr(px(12.0))
        .py(px(7.0))
        .text_size(px(12.0))
        .cursor_pointer()
        .bg(if is_active {
            rgba(0x2196f322)
        } else {
            rgba(0x00000000)
        })
        .text_color(if is_active { rgb(0xffffff) } else { rgb(0xaaaaaa) })
        .hover(|s| s.bg(rgb(0x2d2d2d)).text_color(rgb(0xffffff)))
        .when(is_active, |s| s.border_l_2().border_color(rgb(0x2196f3)))
        .on_click(cx.listener(move |_this, _event, _window, cx| {
            Shell::activate(cx, target.clone());
        }))
        .child(label.to_string())
}

/// Footer with the signed-in user and a logout action.
fn session_footer(session: &SessionInfo, cx: &mut Context<'_, ShellSidebar>) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .justify_between()
        .px(px(16.0))
        .py(px(12.0))
        .border_t_1()
        .border_color(rgb(0x3c3c3c))
        .child(
            div()
                .flex()
                .flex_col()
                .gap(px(2.0))
                .child(
                    div()
                        .text_size(px(12.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(rgb(0xffffff))
                        .child(session.display_name.clone()),
                )
                .child(
                    div()
                        .text_size(px(10.0))
                        .text_color(rgb(0x888888))
                        .child(session.code.clone()),
                ),
        )
        .child(
            div()
                .id("shell-logout")
                .px(px(8.0))
                .py(px(4.0))
                .rounded(px(4.0))
                .text_size(px(11.0))
                .text_color(rgb(0x888888))
                .cursor_pointer()
                .hover(|s| s.bg(rgb(0x2d2d2d)).text_color(rgb(0xffffff)))
                .on_click(cx.listener(|_this, _event, _window, cx| {
                    Shell::logout(cx);
                }))
                .child("Logout"),
        )
}

// ============================================================================
// ShellTabBar
// ============================================================================

/// Owned snapshot of one strip entry, taken per render.
struct TabRow {
    path: String,
    label: String,
    pinned: bool,
    index: usize,
    active: bool,
}

fn tab_rows(shell: &NavigationShell) -> Vec<TabRow> {
    let active_path = shell.active_path().to_string();
    shell
        .visible_tabs()
        .into_iter()
        .map(|tab| TabRow {
            path: tab.entry.path.clone(),
            label: tab.entry.label.clone(),
            pinned: tab.pinned,
            index: tab.index,
            active: tab.entry.path == active_path,
        })
        .collect()
}

/// Tab strip component: pinned region, then the scrollable recent region.
///
/// Pinned tabs speak the press/hover/release drag protocol of
/// [`TabStrip`](crate::strip::TabStrip); a clean click activates, a drag
/// reorders. Recent tabs activate on click. The widget owns the scroll
/// position of the recent region and applies the shell's pending
/// [`ScrollCommand`] on the next render.
pub struct ShellTabBar {
    scroll_handle: ScrollHandle,
}

impl ShellTabBar {
    pub fn new() -> Self {
        Self {
            scroll_handle: ScrollHandle::new(),
        }
    }
}

impl Default for ShellTabBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for ShellTabBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        if !Shell::installed(cx) {
            trace_log!("ShellTabBar: no navigation shell installed");
            return div().into_any_element();
        }

        // Snapshot shell state, then drop the borrow
        let (rows, hover_index, dragging) = {
            let shell = cx.shell();
            let strip = shell.strip();
            (tab_rows(shell), strip.hover_index(), strip.is_dragging())
        };

        // Apply the scroll intent recorded since the last render. Offsets
        // grow negative toward the end; gpui clamps them to the content.
        if let Some(command) = Shell::take_scroll_command(cx) {
            debug_log!("Tab strip scroll: {:?}", command);
            let mut offset = self.scroll_handle.offset();
            match command {
                ScrollCommand::By(delta) => offset.x -= px(delta),
                ScrollCommand::ToEnd => offset.x = px(-1_000_000.0),
            }
            self.scroll_handle.set_offset(offset);
        }

        let pinned_rows: Vec<_> = rows.iter().filter(|row| row.pinned).collect();
        let recent_rows: Vec<_> = rows.iter().filter(|row| !row.pinned).collect();
        let has_recent = !recent_rows.is_empty();

        div()
            .h(px(36.0))
            .w_full()
            .flex()
            .items_end()
            .px(px(8.0))
            .gap(px(2.0))
            .border_b_1()
            .border_color(rgb(0x3c3c3c))
            .bg(rgb(0x252526))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|_this, _event, _window, cx| {
                    // A release the tabs did not claim abandons the drag
                    if cx.shell().strip().is_dragging() {
                        Shell::cancel_tab_drag(cx);
                    }
                }),
            )
            .children(
                pinned_rows
                    .iter()
                    .map(|row| pinned_tab(row, hover_index, dragging, cx))
                    .collect::<Vec<_>>(),
            )
            .when(!pinned_rows.is_empty() && has_recent, |el| {
                el.child(
                    div()
                        .w(px(1.0))
                        .h(px(20.0))
                        .mb(px(4.0))
                        .mx(px(4.0))
                        .bg(rgb(0x3c3c3c)),
                )
            })
            .child(
                div()
                    .id("recent-tabs-scroll")
                    .flex_grow()
                    .overflow_x_scroll()
                    .track_scroll(&self.scroll_handle)
                    .flex()
                    .items_end()
                    .gap(px(2.0))
                    .children(
                        recent_rows
                            .iter()
                            .map(|row| recent_tab(row, cx))
                            .collect::<Vec<_>>(),
                    ),
            )
            .child(scroll_button("tabs-scroll-back", "<", -160.0, cx))
            .child(scroll_button("tabs-scroll-forward", ">", 160.0, cx))
            .when(has_recent, |el| {
                el.child(
                    div()
                        .id("tabs-clear-recent")
                        .px(px(8.0))
                        .py(px(4.0))
                        .mb(px(2.0))
                        .rounded(px(4.0))
                        .text_size(px(10.0))
                        .text_color(rgb(0x888888))
                        .cursor_pointer()
                        .hover(|s| s.bg(rgb(0x2d2d2d)).text_color(rgb(0xffffff)))
                        .on_click(cx.listener(|_this, _event, _window, cx| {
                            Shell::clear_unpinned(cx);
                        }))
                        .child("Clear"),
                )
            })
            .into_any_element()
    }
}

/// Create a cached ShellTabBar that persists across renders.
pub fn shell_tab_bar<V>(
    window: &mut Window,
    cx: &mut Context<'_, V>,
    key: impl Into<String>,
) -> impl IntoElement {
    window
        .use_keyed_state(ElementId::Name(key.into().into()), cx, |_, _| {
            ShellTabBar::new()
        })
        .clone()
}

/// One pinned tab. Mouse down opens a drag session, mouse move while
/// dragging records the hover target, mouse up settles the gesture.
fn pinned_tab(
    row: &TabRow,
    hover_index: Option<usize>,
    dragging: bool,
    cx: &mut Context<'_, ShellTabBar>,
) -> impl IntoElement {
    let index = row.index;
    let path_for_up = row.path.clone();
    let path_for_close = row.path.clone();
    let hover_marker = dragging && hover_index == Some(index);

    div()
        .h(px(28.0))
        .px(px(10.0))
        .rounded_t(px(6.0))
        .flex()
        .items_center()
        .gap(px(6.0))
        .cursor_pointer()
        .bg(if row.active { rgb(0x1e1e1e) } else { rgba(0x00000000) })
        .border_t_1()
        .border_l_1()
        .border_r_1()
        .border_color(if row.active {
            rgb(0x3c3c3c)
        } else {
            rgba(0x00000000)
        })
        .when(hover_marker, |s| s.border_l_2().border_color(rgb(0x2196f3)))
        .hover(|s| s.bg(rgb(0x2d2d2d)))
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |_this, _event, _window, cx| {
                Shell::begin_tab_drag(cx, index);
            }),
        )
        .on_mouse_move(cx.listener(move |_this, _event, _window, cx| {
            let strip = cx.shell().strip();
            if strip.is_dragging() && strip.hover_index() != Some(index) {
                Shell::tab_drag_over(cx, index);
            }
        }))
        .on_mouse_up(
            MouseButton::Left,
            cx.listener(move |_this, _event, _window, cx| {
                if cx.shell().strip().is_dragging() {
                    cx.stop_propagation();
                    Shell::release_tab(cx, index, path_for_up.clone());
                }
            }),
        )
        .child(
            div()
                .text_size(px(8.0))
                .text_color(rgb(0x2196f3))
                .child("*"),
        )
        .child(
            div()
                .text_size(px(12.0))
                .font_weight(if row.active {
                    FontWeight::SEMIBOLD
                } else {
                    FontWeight::MEDIUM
                })
                .text_color(if row.active { rgb(0xffffff) } else { rgb(0xaaaaaa) })
                .child(row.label.clone()),
        )
        .child(
            div()
                .id(SharedString::from(format!("unpin-tab-{}", row.path)))
                .size(px(14.0))
                .rounded(px(2.0))
                .flex()
                .items_center()
                .justify_center()
                .text_size(px(10.0))
                .text_color(rgb(0x888888))
                .hover(|s| s.bg(rgba(0xf4433622)).text_color(rgb(0xf44336)))
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(move |_this, _event, _window, cx| {
                        cx.stop_propagation();
                        Shell::unpin(cx, path_for_close.clone());
                    }),
                )
                .child("x"),
        )
}

/// One recent tab. Click activates; the star pins; "x" closes.
fn recent_tab(row: &TabRow, cx: &mut Context<'_, ShellTabBar>) -> impl IntoElement {
    let path_for_click = row.path.clone();
    let path_for_close = row.path.clone();

    div()
        .id(SharedString::from(format!("tab-{}", row.path)))
        .h(px(28.0))
        .px(px(10.0))
        .rounded_t(px(6.0))
        .flex()
        .items_center()
        .gap(px(6.0))
        .cursor_pointer()
        .bg(if row.active { rgb(0x1e1e1e) } else { rgba(0x00000000) })
        .border_t_1()
        .border_l_1()
        .border_r_1()
        .border_color(if row.active {
            rgb(0x3c3c3c)
        } else {
            rgba(0x00000000)
        })
        .hover(|s| s.bg(rgb(0x2d2d2d)))
        .on_click(cx.listener(move |_this, _event, _window, cx| {
            Shell::activate(cx, path_for_click.clone());
        }))
        .child(
            div()
                .text_size(px(12.0))
                .font_weight(if row.active {
                    FontWeight::SEMIBOLD
                } else {
                    FontWeight::NORMAL
                })
                .text_color(if row.active { rgb(0xffffff) } else { rgb(0xaaaaaa) })
                .child(row.label.clone()),
        )
        .when(row.active, |el| {
            el.child(
                div()
                    .id(SharedString::from(format!("pin-tab-{}", row.path)))
                    .text_size(px(10.0))
                    .text_color(rgb(0x888888))
                    .hover(|s| s.text_color(rgb(0x2196f3)))
                    .on_click(cx.listener(|_this, _event, _window, cx| {
                        cx.stop_propagation();
                        Shell::toggle_pin_current(cx);
                    }))
                    .child("*"),
            )
        })
        .child(
            div()
                .id(SharedString::from(format!("close-tab-{}", row.path)))
                .size(px(14.0))
                .rounded(px(2.0))
                .flex()
                .items_center()
                .justify_center()
                .text_size(px(10.0))
                .text_color(rgb(0x888888))
                .hover(|s| s.bg(rgba(0xf4433622)).text_color(rgb(0xf44336)))
                .on_click(cx.listener(move |_this, _event, _window, cx| {
                    cx.stop_propagation();
                    Shell::remove_recent(cx, path_for_close.clone());
                }))
                .child("x"),
        )
}

fn scroll_button(
    id: &'static str,
    glyph: &'static str,
    delta: f32,
    cx: &mut Context<'_, ShellTabBar>,
) -> impl IntoElement {
    div()
        .id(id)
        .size(px(24.0))
        .mb(px(4.0))
        .rounded(px(4.0))
        .cursor_pointer()
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(12.0))
        .text_color(rgb(0x888888))
        .hover(|s| s.bg(rgb(0x2d2d2d)).text_color(rgb(0xffffff)))
        .on_click(cx.listener(move |_this, _event, _window, cx| {
            Shell::scroll_tabs_by(cx, delta);
        }))
        .child(glyph)
}

#[cfg(test)]
mod tests {
    use super::{ShellSidebar, ShellTabBar};
    use gpui::Point;

    #[test]
    fn test_sidebar_title() {
        let sidebar = ShellSidebar::new();
        assert_eq!(sidebar.title.as_ref(), "Home");

        let titled = ShellSidebar::new().title("MES");
        assert_eq!(titled.title.as_ref(), "MES");
    }

    #[test]
    fn test_tab_bar_creation() {
        let bar = ShellTabBar::default();
        assert_eq!(bar.scroll_handle.offset(), Point::default());
    }
}
