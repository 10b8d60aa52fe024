use iced::Task;

use super::{content, shell};
use crate::app::{App, AppEvent};
use crate::catalog::DEFAULT_CATEGORY;
use crate::widgets::content::{ContentEvent, ContentIntent};
use crate::widgets::sidebar::SidebarEvent;

/// Route a sidebar event to the shell, the page or the desktop.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::ToggleSidebar => shell::toggle(app),
        SidebarEvent::GoHome => select(app, DEFAULT_CATEGORY),
        SidebarEvent::SelectCategory(name) => select(app, name),
        SidebarEvent::CopyEmail => {
            log::debug!("copying contact email to clipboard");
            iced::clipboard::write(app.config.email.clone())
        },
        SidebarEvent::OpenLink(url) => {
            open_link(&url);
            Task::none()
        },
    }
}

fn select(app: &mut App, name: &'static str) -> Task<AppEvent> {
    content::route(app, ContentEvent::Intent(ContentIntent::Select(name)))
}

fn open_link(url: &str) {
    if let Err(err) = open::that_detached(url) {
        log::warn!("failed to open link {url}: {err}");
    }
}
