pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;

use std::time::Instant;

use iced::Task;

pub(crate) use self::event::ShellEvent;
use self::model::ShellViewModel;
use self::state::ShellState;
use crate::config::LayoutConfig;

/// Page shell owning the sidebar open flag, the viewport class and the
/// panel animation.
pub(crate) struct ShellWidget {
    state: ShellState,
}

impl ShellWidget {
    /// Create the shell for a window of the given width. The flag is
    /// initialized from the viewport class before the first paint.
    pub(crate) fn new(
        config: &LayoutConfig,
        window_width: f32,
        now: Instant,
    ) -> Self {
        Self {
            state: ShellState::new(config, window_width, now),
        }
    }

    pub(crate) fn reduce(&mut self, event: ShellEvent) -> Task<ShellEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Whether frame ticks are still needed to settle or animate.
    pub(crate) fn needs_frames(&self) -> bool {
        self.state.needs_frames()
    }

    /// Produce the shell view model for rendering.
    pub(crate) fn vm(&self) -> ShellViewModel {
        ShellViewModel {
            class: self.state.class(),
            frame: self.state.frame(),
            backdrop_visible: self.state.backdrop_visible(),
            window_width: self.state.window_width(),
        }
    }
}
