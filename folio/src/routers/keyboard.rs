use iced::Task;
use iced::keyboard::{Event, Key, Modifiers};

use super::shell;
use crate::app::{App, AppEvent};

const TOGGLE_SIDEBAR_KEY: &str = "b";

/// Handle global keyboard shortcuts.
pub(crate) fn route(app: &mut App, event: Event) -> Task<AppEvent> {
    match event {
        Event::KeyPressed { key, modifiers, .. }
            if is_toggle_shortcut(&key, modifiers) =>
        {
            shell::toggle(app)
        },
        _ => Task::none(),
    }
}

/// `Ctrl+B`, or `Cmd+B` on macOS.
fn is_toggle_shortcut(key: &Key, modifiers: Modifiers) -> bool {
    modifiers.command()
        && matches!(
            key.as_ref(),
            Key::Character(c) if c.eq_ignore_ascii_case(TOGGLE_SIDEBAR_KEY)
        )
}
