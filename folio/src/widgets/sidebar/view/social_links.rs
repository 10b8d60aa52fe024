use iced::widget::{Column, row, svg, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::nav_item::{
    self, NavItemEvent, NavItemProps,
};
use crate::config::SocialLink;
use crate::shared::ui::icons;
use crate::shared::ui::theme::{ThemeProps, with_opacity};
use crate::widgets::sidebar::event::SidebarEvent;

const LINK_ICON_SIZE: f32 = 14.0;
const SECTION_FONT_SIZE: f32 = 11.0;

pub(super) fn view<'a>(
    links: &'a [SocialLink],
    opacity: f32,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarEvent> {
    let palette = theme.theme.iced_palette();
    let dim_color = with_opacity(palette.dim_foreground, opacity);

    let heading = row![
        svg::Svg::new(svg::Handle::from_memory(icons::LINK))
            .width(Length::Fixed(LINK_ICON_SIZE))
            .height(Length::Fixed(LINK_ICON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(dim_color),
            }),
        text("Links").size(SECTION_FONT_SIZE).color(dim_color),
    ]
    .spacing(6)
    .align_y(alignment::Vertical::Center);

    let items = links.iter().map(|link| {
        let url = link.url.clone();
        nav_item::view(NavItemProps {
            label: &link.label,
            is_selected: false,
            opacity,
            theme,
        })
        .map(move |NavItemEvent::Pressed| SidebarEvent::OpenLink(url.clone()))
    });

    Column::new()
        .push(heading)
        .extend(items)
        .spacing(2)
        .width(Length::Fill)
        .into()
}
