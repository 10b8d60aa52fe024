use std::time::Instant;

use folio_layout::{
    LayoutController, LayoutEvent, PanelFrame, PanelTransition,
    ViewportClass, ViewportClassifier, backdrop_visible,
};

use crate::config::LayoutConfig;

/// Sidebar flag, viewport tracking and panel animation for the page shell.
#[derive(Debug)]
pub(super) struct ShellState {
    viewport: ViewportClassifier,
    controller: LayoutController,
    transition: PanelTransition,
    window_width: f32,
    close_overlay_requested: bool,
    last_frame: Instant,
}

impl ShellState {
    pub(super) fn new(
        config: &LayoutConfig,
        window_width: f32,
        now: Instant,
    ) -> Self {
        let viewport = ViewportClassifier::new(config.breakpoint, window_width);
        let controller = LayoutController::initialize(&viewport);
        let transition = PanelTransition::new(
            config.sidebar_width,
            config.transition(),
            controller.is_open(),
        );

        Self {
            viewport,
            controller,
            transition,
            window_width,
            close_overlay_requested: false,
            last_frame: now,
        }
    }

    #[cfg(test)]
    pub(super) fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    pub(super) fn class(&self) -> ViewportClass {
        self.controller.class()
    }

    pub(super) fn window_width(&self) -> f32 {
        self.window_width
    }

    #[cfg(test)]
    pub(super) fn panel_width(&self) -> f32 {
        self.transition.panel_width()
    }

    pub(super) fn frame(&self) -> PanelFrame {
        self.transition.frame_at(self.last_frame)
    }

    pub(super) fn backdrop_visible(&self) -> bool {
        backdrop_visible(self.controller.is_open(), self.controller.class())
    }

    /// Whether the shell still has work for upcoming frames.
    pub(super) fn needs_frames(&self) -> bool {
        self.controller.has_pending()
            || self.close_overlay_requested
            || self.transition.is_animating(self.last_frame)
    }

    pub(super) fn request_toggle(&mut self) {
        self.controller.enqueue(LayoutEvent::Toggled);
    }

    pub(super) fn request_close_overlay(&mut self) {
        self.close_overlay_requested = true;
    }

    pub(super) fn observe_width(&mut self, width: f32) {
        self.window_width = width;
        if let Some(class) = self.viewport.observe(width) {
            self.controller
                .enqueue(LayoutEvent::ViewportClassChanged(class));
        }
    }

    /// Settle queued layout events and retarget the panel animation.
    pub(super) fn advance(&mut self, now: Instant) {
        self.last_frame = now;
        self.controller.settle();

        if std::mem::take(&mut self.close_overlay_requested)
            && self.controller.class().is_mobile()
            && self.controller.is_open()
        {
            self.controller.toggle();
        }

        self.transition.set_target(self.controller.is_open(), now);
    }
}
