use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, column, row, svg, text};
use iced::{Border, Element, Length, alignment};

use crate::shared::ui::icons;
use crate::shared::ui::theme::{ThemeProps, with_opacity};
use crate::widgets::sidebar::event::SidebarEvent;

const CARD_PADDING: f32 = 10.0;
const CARD_RADIUS: f32 = 6.0;
const MAIL_ICON_SIZE: f32 = 16.0;
const AUTHOR_FONT_SIZE: f32 = 15.0;
const EMAIL_FONT_SIZE: f32 = 12.0;

/// Author name with the contact address; pressing copies the address.
pub(super) fn view<'a>(
    author: &'a str,
    email: &'a str,
    opacity: f32,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarEvent> {
    let palette = theme.theme.iced_palette();
    let text_color = with_opacity(palette.foreground, opacity);
    let dim_color = with_opacity(palette.dim_foreground, opacity);

    let mail_icon = svg::Svg::new(svg::Handle::from_memory(icons::MAIL))
        .width(Length::Fixed(MAIL_ICON_SIZE))
        .height(Length::Fixed(MAIL_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(dim_color),
        });

    let address_label = text(email).size(EMAIL_FONT_SIZE).color(dim_color);
    let address = row![mail_icon, address_label]
        .spacing(6)
        .align_y(alignment::Vertical::Center);

    let content = column![
        text(author).size(AUTHOR_FONT_SIZE).color(text_color),
        address,
    ]
    .spacing(4)
    .width(Length::Fill);

    button(content)
        .on_press(SidebarEvent::CopyEmail)
        .padding(CARD_PADDING)
        .width(Length::Fill)
        .style(move |_, status| {
            let background = match status {
                ButtonStatus::Hovered | ButtonStatus::Pressed => {
                    with_opacity(palette.accent_soft, opacity)
                },
                _ => with_opacity(palette.surface, opacity),
            };

            button::Style {
                background: Some(background.into()),
                border: Border {
                    color: with_opacity(palette.divider, opacity),
                    width: 1.0,
                    radius: CARD_RADIUS.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
