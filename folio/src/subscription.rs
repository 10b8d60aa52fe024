use iced::{Subscription, window};

use super::{App, AppEvent};
use crate::widgets::shell::ShellEvent;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    let mut subs = vec![win_subs, key_subs];

    // Frame ticks settle queued layout events and drive the panel animation.
    if app.widgets.shell.needs_frames() {
        subs.push(
            window::frames().map(|now| AppEvent::Shell(ShellEvent::Frame(now))),
        );
    }

    Subscription::batch(subs)
}
