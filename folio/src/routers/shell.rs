use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::shell::ShellEvent;

/// Route a shell event through the shell reducer.
pub(crate) fn route(app: &mut App, event: ShellEvent) -> Task<AppEvent> {
    app.widgets.shell.reduce(event).map(AppEvent::Shell)
}

/// Queue a sidebar toggle for the next frame.
pub(crate) fn toggle(app: &mut App) -> Task<AppEvent> {
    route(app, ShellEvent::ToggleSidebar)
}
