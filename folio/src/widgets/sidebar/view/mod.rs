mod category_tree;
mod control_buttons;
mod email_card;
mod social_links;

use iced::widget::{Space, column, container, mouse_area, scrollable};
use iced::{Color, Element, Length};

use super::event::SidebarEvent;
use super::model::SidebarViewModel;
use crate::shared::ui::theme::{ThemeProps, with_opacity};

const PANEL_PADDING: f32 = 12.0;
const SECTION_SPACING: f32 = 16.0;
const DIVIDER_HEIGHT: f32 = 1.0;
const BACKDROP_ALPHA: f32 = 0.7;

/// Props for the sidebar panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the sidebar panel at the width of the current frame.
///
/// Children are always built so a collapsed panel keeps its widget tree
/// and scroll position; the container clips them to the frame width.
pub(crate) fn panel(props: SidebarProps<'_>) -> Element<'_, SidebarEvent> {
    let vm = props.vm;
    let opacity = vm.frame.opacity;
    let palette = props.theme.theme.iced_palette();

    let divider = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(DIVIDER_HEIGHT))
        .style(move |_| container::Style {
            background: Some(with_opacity(palette.divider, opacity).into()),
            ..Default::default()
        });

    let tree = scrollable(category_tree::view(
        vm.selected_category,
        opacity,
        props.theme,
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    let content = column![
        control_buttons::view(vm.shows_close_control(), opacity, props.theme),
        email_card::view(vm.author, vm.email, opacity, props.theme),
        social_links::view(vm.social_links, opacity, props.theme),
        divider,
        tree,
    ]
    .spacing(SECTION_SPACING)
    .padding(PANEL_PADDING)
    .width(Length::Fill)
    .height(Length::Fill);

    container(content)
        .width(Length::Fixed(vm.frame.width.max(0.0)))
        .height(Length::Fill)
        .clip(true)
        .style(move |_| container::Style {
            background: Some(with_opacity(palette.sidebar, opacity).into()),
            text_color: Some(with_opacity(palette.sidebar_text, opacity)),
            ..Default::default()
        })
        .into()
}

/// Dimming layer behind an open overlay. Pressing it closes the sidebar.
///
/// A hidden backdrop is still an element so the layers above it keep
/// their position in the tree.
pub(crate) fn backdrop<'a>(visible: bool) -> Element<'a, SidebarEvent> {
    if !visible {
        return Space::new().into();
    }

    let scrim = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| container::Style {
            background: Some(
                Color {
                    a: BACKDROP_ALPHA,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..Default::default()
        });

    mouse_area(scrim)
        .on_press(SidebarEvent::ToggleSidebar)
        .into()
}
