use iced::widget::{Space, column, container, scrollable, text};
use iced::{Element, Length};

use super::event::ContentEvent;
use super::model::ContentViewModel;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const GROUP_FONT_SIZE: f32 = 12.0;
const FOOTER_FONT_SIZE: f32 = 12.0;
const SECTION_SPACING: f32 = 12.0;
const FOOTER_TOP_MARGIN: f32 = 48.0;

/// Props for rendering the page area.
#[derive(Debug, Clone)]
pub(crate) struct ContentProps<'a> {
    pub(crate) vm: ContentViewModel,
    pub(crate) copyright: String,
    pub(crate) padding: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the selected category page with the footer below it.
pub(crate) fn view(props: ContentProps<'_>) -> Element<'_, ContentEvent> {
    let palette = props.theme.theme.iced_palette();
    let vm = props.vm;

    let mut page = column![].spacing(SECTION_SPACING).width(Length::Fill);
    if !vm.group_title.is_empty() {
        page = page.push(
            text(vm.group_title)
                .size(GROUP_FONT_SIZE)
                .color(palette.dim_foreground),
        );
    }

    let page = page
        .push(
            text(vm.display_name)
                .size(props.fonts.heading.size)
                .font(props.fonts.heading.font_type)
                .color(palette.foreground),
        )
        .push(
            text(vm.description())
                .size(props.fonts.ui.size)
                .font(props.fonts.ui.font_type)
                .color(palette.foreground),
        );

    let footer = text(props.copyright)
        .size(FOOTER_FONT_SIZE)
        .color(palette.dim_foreground);

    let body = column![
        page,
        Space::new().height(Length::Fixed(FOOTER_TOP_MARGIN)),
        footer
    ]
    .width(Length::Fill)
    .padding(props.padding);

    container(scrollable(body).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.background.into()),
            ..Default::default()
        })
        .into()
}
