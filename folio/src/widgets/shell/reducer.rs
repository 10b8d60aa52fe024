use iced::Task;

use super::event::ShellEvent;
use super::state::ShellState;

/// Reduce a shell event into state updates.
///
/// Toggles and viewport crossings are only queued here; they take effect
/// together on the next [`ShellEvent::Frame`].
pub(super) fn reduce(
    state: &mut ShellState,
    event: ShellEvent,
) -> Task<ShellEvent> {
    match event {
        ShellEvent::ToggleSidebar => state.request_toggle(),
        ShellEvent::CloseOverlay => state.request_close_overlay(),
        ShellEvent::WindowResized { width } => state.observe_width(width),
        ShellEvent::Frame(now) => state.advance(now),
    }

    Task::none()
}
