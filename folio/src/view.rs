use iced::widget::{Space, column, container, row, stack};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::layout;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::content::view::{self as content_view, ContentProps};
use crate::widgets::header::view::{self as header_view, HeaderProps};
use crate::widgets::sidebar::model::SidebarViewModel;
use crate::widgets::sidebar::view::{self as sidebar_view, SidebarProps};

/// Render the page shell.
///
/// Desktop and mobile share one layer tree: the page (offset by the
/// desktop panel reserve), the backdrop slot and the panel on top. Only
/// sizes and the backdrop content change between classes, so the panel
/// keeps its widget state when the window crosses the breakpoint.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(app.theme_manager.current());
    let shell = app.widgets.shell.vm();
    let padding = layout::content_padding(shell.class);

    let header = header_view::view(HeaderProps {
        title: &app.config.title,
        padding,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::Header);

    let content = content_view::view(ContentProps {
        vm: app.widgets.content.vm(),
        copyright: app.config.copyright(),
        padding,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::Content);

    let page = container(column![header, content])
        .width(Length::Fixed(layout::content_width(
            shell.window_width,
            shell.class,
            shell.frame,
        )))
        .height(Length::Fill);

    let reserve = Space::new()
        .width(Length::Fixed(layout::sidebar_reserved_width(
            shell.class,
            shell.frame,
        )))
        .height(Length::Fill);

    let backdrop =
        sidebar_view::backdrop(shell.backdrop_visible).map(AppEvent::Sidebar);

    let panel = sidebar_view::panel(SidebarProps {
        vm: SidebarViewModel {
            class: shell.class,
            frame: shell.frame,
            author: &app.config.author,
            email: &app.config.email,
            social_links: &app.config.social_links,
            selected_category: app.widgets.content.selected(),
        },
        theme: theme_props,
    })
    .map(AppEvent::Sidebar);

    stack![row![reserve, page], backdrop, panel]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
