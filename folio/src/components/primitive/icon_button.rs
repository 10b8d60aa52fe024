use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, svg};
use iced::{Border, Color, Element, Length, alignment};

use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, with_opacity};

const HOVER_RADIUS: f32 = 6.0;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// What hovering the control signals.
#[derive(Debug, Clone, Copy)]
pub(crate) enum IconButtonVariant {
    /// Navigation; hover uses the accent color.
    Standard,
    /// Dismissal; hover uses the danger color.
    Danger,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
    /// Fade of the surface the button sits on. A fully faded button
    /// ignores presses.
    pub(crate) opacity: f32,
}

/// Colors of one icon button at a given fade.
#[derive(Debug, Clone, Copy, PartialEq)]
struct IconColors {
    idle: Color,
    hovered: Color,
    hover_background: Color,
}

/// Render a square icon button used by the header and sidebar controls.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let colors = icon_colors(
        props.theme.theme.iced_palette(),
        props.variant,
        props.opacity,
    );

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                colors.hovered
            } else {
                colors.idle
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press_maybe(
            accepts_press(props.opacity).then_some(IconButtonEvent::Pressed),
        )
        .padding(0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let background = match status {
                ButtonStatus::Hovered | ButtonStatus::Pressed => {
                    Some(colors.hover_background.into())
                },
                _ => None,
            };

            button::Style {
                background,
                border: Border {
                    radius: HOVER_RADIUS.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        })
        .into()
}

fn icon_colors(
    palette: &IcedColorPalette,
    variant: IconButtonVariant,
    opacity: f32,
) -> IconColors {
    let hovered = match variant {
        IconButtonVariant::Standard => palette.accent,
        IconButtonVariant::Danger => palette.danger,
    };

    IconColors {
        idle: with_opacity(palette.sidebar_text, opacity),
        hovered: with_opacity(hovered, opacity),
        hover_background: with_opacity(palette.accent_soft, opacity),
    }
}

fn accepts_press(opacity: f32) -> bool {
    opacity > 0.0
}
