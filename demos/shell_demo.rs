//! Navigation Shell Demo
//!
//! An MES-style dashboard shell: grouped sidebar on the left, tab strip on
//! top, and a content pane that follows the active path. The demo has no
//! real router — `on_navigate` reports straight back through
//! `Shell::sync_active_path`, which is all the shell needs to track
//! visits, expand the sidebar, and persist state between runs.

use gpui::{
    div, px, rgb, size, App, AppContext, Application, Bounds, Context, Entity, FontWeight,
    IntoElement, ParentElement, Render, Styled, TitlebarOptions, Window, WindowBounds,
    WindowOptions,
};
use gpui_navshell::{
    init_shell, FileBackend, MenuGroup, MenuTree, SessionInfo, Shell, ShellConfig, ShellSidebar,
    ShellTabBar, UseShell,
};

fn main() {
    env_logger::init();

    Application::new().run(|cx: &mut App| {
        let menu = MenuTree::new()
            .label("/mes/dashboard", "대시보드")
            .group(
                MenuGroup::new("master", "기준정보")
                    .item("/mes/master/machine", "설비 관리")
                    .item("/mes/master/process", "공정 관리")
                    .item("/mes/master/item", "품목 관리"),
            )
            .group(
                MenuGroup::new("production", "생산관리")
                    .item("/mes/production/plan", "생산 계획")
                    .group(
                        MenuGroup::new("production-report", "생산실적")
                            .item("/mes/production/report/daily", "일일 실적")
                            .item("/mes/production/report/monthly", "월간 실적"),
                    ),
            )
            .group(
                MenuGroup::new("quality", "품질관리")
                    .item("/mes/quality/inspection", "검사 관리")
                    .item("/mes/quality/defect", "불량 관리"),
            );

        let config = ShellConfig::new(menu)
            .home_path("/mes/dashboard")
            .session(SessionInfo::new("김철수", "EMP-0042"))
            .on_navigate(|cx, path| {
                // No real router here: landing on a page IS the navigation
                Shell::sync_active_path(cx, path);
            })
            .on_logout(|cx| {
                cx.quit();
            });

        // Keep state between runs when a data directory exists
        let config = match FileBackend::for_app("gpui-navshell-demo") {
            Ok(backend) => config.backend(backend),
            Err(_) => config,
        };

        init_shell(cx, config);

        let bounds = Bounds::centered(None, size(px(1100.), px(700.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("MES Dashboard Shell Demo".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_, cx| cx.new(ShellDemoApp::new),
        )
        .unwrap();

        cx.activate(true);
    });
}

struct ShellDemoApp {
    sidebar: Entity<ShellSidebar>,
    tab_bar: Entity<ShellTabBar>,
}

impl ShellDemoApp {
    fn new(cx: &mut Context<'_, Self>) -> Self {
        Self {
            sidebar: cx.new(|_| ShellSidebar::new().title("MES Dashboard")),
            tab_bar: cx.new(|_| ShellTabBar::new()),
        }
    }
}

impl Render for ShellDemoApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        let (path, label) = {
            let shell = cx.shell();
            let path = shell.active_path().to_string();
            let label = shell.menu().label_for(&path).unwrap_or(&path).to_string();
            (path, label)
        };

        div()
            .flex()
            .size_full()
            .bg(rgb(0x1e1e1e))
            .text_color(rgb(0xffffff))
            .child(self.sidebar.clone())
            .child(
                div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .child(self.tab_bar.clone())
                    // Content pane: whatever page the shell says is active
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap_2()
                            .p_8()
                            .child(
                                div()
                                    .text_3xl()
                                    .font_weight(FontWeight::BOLD)
                                    .child(label),
                            )
                            .child(div().text_sm().text_color(rgb(0x888888)).child(path)),
                    ),
            )
    }
}
