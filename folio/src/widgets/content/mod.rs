pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{ContentEffect, ContentEvent, ContentIntent};
use self::model::ContentViewModel;
use self::state::ContentState;

/// Page area showing the selected category.
pub(crate) struct ContentWidget {
    state: ContentState,
}

impl ContentWidget {
    /// Create the widget on the landing page.
    pub(crate) fn new() -> Self {
        Self {
            state: ContentState::default(),
        }
    }

    pub(crate) fn reduce(
        &mut self,
        intent: ContentIntent,
    ) -> Task<ContentEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    pub(crate) fn selected(&self) -> &'static str {
        self.state.selected()
    }

    pub(crate) fn vm(&self) -> ContentViewModel {
        ContentViewModel::for_category(self.state.selected())
    }
}
