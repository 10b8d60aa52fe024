use crate::reducer::{LayoutEvent, initial_flag, reduce};
use crate::viewport::{ViewportClass, ViewportSignal};

/// Owner of the sidebar open flag.
///
/// The flag is derived from the viewport class at mount, reset on every
/// class crossing and flipped by user toggles in between. Nothing else
/// writes it.
#[derive(Debug, Clone)]
pub struct LayoutController {
    is_open: bool,
    class: ViewportClass,
    pending: Vec<LayoutEvent>,
}

impl LayoutController {
    /// Derive the initial flag from the signal. Call once per mount, before
    /// the first frame is drawn.
    pub fn initialize(signal: &impl ViewportSignal) -> Self {
        let class = signal.class();
        let is_open = initial_flag(class);
        log::debug!("layout mounted as {class:?}, sidebar open: {is_open}");

        Self {
            is_open,
            class,
            pending: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Last viewport class the controller reconciled against.
    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn toggle(&mut self) {
        self.dispatch(LayoutEvent::Toggled);
    }

    /// Reset the flag for the new class, discarding any earlier toggle.
    pub fn on_viewport_class_change(&mut self, is_mobile: bool) {
        self.dispatch(LayoutEvent::ViewportClassChanged(
            ViewportClass::from_is_mobile(is_mobile),
        ));
    }

    /// Apply a single event immediately.
    pub fn dispatch(&mut self, event: LayoutEvent) {
        if let LayoutEvent::ViewportClassChanged(class) = event {
            self.class = class;
        }
        self.is_open = reduce(self.is_open, event);
    }

    /// Queue an event for the current rendering pass.
    pub fn enqueue(&mut self, event: LayoutEvent) {
        self.pending.push(event);
    }

    /// Apply every queued event and return whether the flag changed.
    ///
    /// Toggles run in arrival order first; the last class change of the pass
    /// runs after them, so a breakpoint crossing always wins over a toggle
    /// issued in the same pass.
    pub fn settle(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }

        let before = self.is_open;
        let mut class_change = None;
        for event in std::mem::take(&mut self.pending) {
            match event {
                LayoutEvent::Toggled => self.dispatch(event),
                LayoutEvent::ViewportClassChanged(_) => {
                    class_change = Some(event)
                },
            }
        }

        if let Some(event) = class_change {
            self.dispatch(event);
        }

        log::debug!(
            "layout pass settled as {:?}, sidebar open: {}",
            self.class,
            self.is_open
        );
        before != self.is_open
    }
}
