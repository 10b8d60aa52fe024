use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, text};
use iced::{Element, Length, alignment};

use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, with_opacity};

const NAV_ITEM_HEIGHT: f32 = 28.0;
const NAV_ITEM_FONT_SIZE: f32 = 13.0;
const NAV_ITEM_HORIZONTAL_PADDING: f32 = 12.0;
const NAV_ITEM_VERTICAL_PADDING: f32 = 2.0;

/// UI events emitted by a navigation row.
#[derive(Debug, Clone)]
pub(crate) enum NavItemEvent {
    Pressed,
}

/// Props for rendering a navigation row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavItemProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) is_selected: bool,
    pub(crate) opacity: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a selectable row used by the sidebar lists.
pub(crate) fn view<'a>(props: NavItemProps<'a>) -> Element<'a, NavItemEvent> {
    let palette = props.theme.theme.iced_palette();
    let is_selected = props.is_selected;
    let opacity = props.opacity;

    let label = text(props.label)
        .size(NAV_ITEM_FONT_SIZE)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center);

    button(label)
        .padding([NAV_ITEM_VERTICAL_PADDING, NAV_ITEM_HORIZONTAL_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(NAV_ITEM_HEIGHT))
        .style(move |_, status| {
            nav_button_style(palette, status, is_selected, opacity)
        })
        .on_press(NavItemEvent::Pressed)
        .into()
}

fn nav_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    is_selected: bool,
    opacity: f32,
) -> button::Style {
    let background = if is_selected {
        Some(with_opacity(palette.accent_soft, opacity).into())
    } else {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => {
                Some(with_opacity(palette.background, opacity).into())
            },
            _ => None,
        }
    };

    let text_color = if is_selected {
        palette.accent
    } else {
        palette.sidebar_text
    };

    button::Style {
        background,
        text_color: with_opacity(text_color, opacity),
        border: iced::Border {
            width: 0.0,
            radius: iced::border::Radius::new(4.0),
            ..Default::default()
        },
        ..Default::default()
    }
}
