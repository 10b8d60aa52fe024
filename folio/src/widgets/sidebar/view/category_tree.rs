use iced::widget::{Column, text};
use iced::{Element, Length};

use crate::catalog::{CATALOG, CategoryGroup};
use crate::components::primitive::nav_item::{
    self, NavItemEvent, NavItemProps,
};
use crate::shared::ui::theme::{ThemeProps, with_opacity};
use crate::widgets::sidebar::event::SidebarEvent;

const GROUP_TITLE_FONT_SIZE: f32 = 11.0;
const GROUP_SPACING: f32 = 14.0;

/// Category groups in catalog order, highlighting the current selection.
pub(super) fn view<'a>(
    selected: &'a str,
    opacity: f32,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarEvent> {
    CATALOG
        .iter()
        .fold(Column::new(), |tree, group| {
            tree.push(group_view(group, selected, opacity, theme))
        })
        .spacing(GROUP_SPACING)
        .width(Length::Fill)
        .into()
}

fn group_view<'a>(
    group: &'static CategoryGroup,
    selected: &'a str,
    opacity: f32,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarEvent> {
    let palette = theme.theme.iced_palette();
    let title = text(group.title)
        .size(GROUP_TITLE_FONT_SIZE)
        .color(with_opacity(palette.dim_foreground, opacity));

    let items = group.categories.iter().map(|category| {
        let name = category.name;
        nav_item::view(NavItemProps {
            label: category.display_name,
            is_selected: category.name == selected,
            opacity,
            theme,
        })
        .map(move |NavItemEvent::Pressed| SidebarEvent::SelectCategory(name))
    });

    Column::new()
        .push(title)
        .extend(items)
        .spacing(2)
        .width(Length::Fill)
        .into()
}
