use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length, alignment};

use super::event::HeaderEvent;
use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::theme::ThemeProps;

pub(crate) const HEADER_HEIGHT: f32 = 52.0;
const MENU_BUTTON_SIZE: f32 = 32.0;
const MENU_ICON_SIZE: f32 = 20.0;
const HEADER_SPACING: f32 = 12.0;
const SEPARATOR_HEIGHT: f32 = 1.0;

/// Props for rendering the page header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) padding: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the header bar with the sidebar toggle and the site title.
pub(crate) fn view(props: HeaderProps<'_>) -> Element<'_, HeaderEvent> {
    let palette = props.theme.theme.iced_palette();

    let menu = icon_button::view(IconButtonProps {
        icon: icons::MENU,
        theme: props.theme,
        size: MENU_BUTTON_SIZE,
        icon_size: MENU_ICON_SIZE,
        variant: IconButtonVariant::Standard,
        opacity: 1.0,
    })
    .map(|IconButtonEvent::Pressed| HeaderEvent::ToggleSidebar);

    let title = text(props.title)
        .size(props.fonts.ui.size * 1.2)
        .font(props.fonts.heading.font_type)
        .color(palette.foreground);

    let bar = row![menu, title, Space::new().width(Length::Fill)]
        .spacing(HEADER_SPACING)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    let bar = container(bar)
        .padding([0.0, props.padding])
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .style(move |_| container::Style {
            background: Some(palette.background.into()),
            ..Default::default()
        });

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(palette.divider.into()),
            ..Default::default()
        });

    column![bar, separator].width(Length::Fill).into()
}
