use iced::Task;

use super::shell;
use crate::app::{App, AppEvent};
use crate::widgets::content::{ContentEffect, ContentEvent, ContentIntent};
use crate::widgets::shell::ShellEvent;

/// Route a content event: intents go to the reducer, effects fan out.
pub(crate) fn route(app: &mut App, event: ContentEvent) -> Task<AppEvent> {
    match event {
        ContentEvent::Intent(intent) => select(app, intent),
        ContentEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn select(app: &mut App, intent: ContentIntent) -> Task<AppEvent> {
    app.widgets.content.reduce(intent).map(AppEvent::Content)
}

fn route_effect(app: &mut App, effect: ContentEffect) -> Task<AppEvent> {
    match effect {
        // A mobile overlay covers the page that was just selected.
        ContentEffect::CategorySelected => {
            shell::route(app, ShellEvent::CloseOverlay)
        },
    }
}
