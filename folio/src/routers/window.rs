use iced::{Task, window};

use super::shell;
use crate::app::{App, AppEvent};
use crate::widgets::shell::ShellEvent;

/// Feed window size changes into the viewport classifier.
pub(crate) fn route(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            shell::route(app, ShellEvent::WindowResized { width: size.width })
        },
        _ => Task::none(),
    }
}
