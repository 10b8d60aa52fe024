use iced::widget::{Space, row};
use iced::{Element, Length, alignment};

use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::shared::ui::icons;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::sidebar::event::SidebarEvent;

const CONTROL_SIZE: f32 = 32.0;
const CONTROL_ICON_SIZE: f32 = 18.0;

/// Home control on the left; close control on the right for overlays.
pub(super) fn view<'a>(
    show_close: bool,
    opacity: f32,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarEvent> {
    let home =
        control(icons::HOME, IconButtonVariant::Standard, opacity, theme)
            .map(|IconButtonEvent::Pressed| SidebarEvent::GoHome);

    // Same footprint either way so the row does not shift between classes.
    let close: Element<'a, SidebarEvent> = if show_close {
        control(icons::CLOSE, IconButtonVariant::Danger, opacity, theme)
            .map(|IconButtonEvent::Pressed| SidebarEvent::ToggleSidebar)
    } else {
        Space::new()
            .width(Length::Fixed(CONTROL_SIZE))
            .height(Length::Fixed(CONTROL_SIZE))
            .into()
    };

    row![home, Space::new().width(Length::Fill), close]
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn control<'a>(
    icon: &'static [u8],
    variant: IconButtonVariant,
    opacity: f32,
    theme: ThemeProps<'a>,
) -> Element<'a, IconButtonEvent> {
    icon_button::view(IconButtonProps {
        icon,
        theme,
        size: CONTROL_SIZE,
        icon_size: CONTROL_ICON_SIZE,
        variant,
        opacity,
    })
}
