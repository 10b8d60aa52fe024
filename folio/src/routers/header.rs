use iced::Task;

use super::shell;
use crate::app::{App, AppEvent};
use crate::widgets::header::HeaderEvent;

pub(crate) fn route(app: &mut App, event: HeaderEvent) -> Task<AppEvent> {
    match event {
        HeaderEvent::ToggleSidebar => shell::toggle(app),
    }
}
