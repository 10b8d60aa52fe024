use crate::viewport::ViewportClass;

/// Events that can change the sidebar open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    /// User asked to flip the sidebar (header button, backdrop, close button).
    Toggled,
    /// The viewport crossed the breakpoint into the given class.
    ViewportClassChanged(ViewportClass),
}

/// Initial open flag for a viewport class: open on desktop, closed on mobile.
pub fn initial_flag(class: ViewportClass) -> bool {
    !class.is_mobile()
}

/// Pure transition table for the sidebar open flag.
///
/// A class change overwrites the flag wholesale and drops whatever the user
/// chose in the previous class.
pub fn reduce(is_open: bool, event: LayoutEvent) -> bool {
    match event {
        LayoutEvent::Toggled => !is_open,
        LayoutEvent::ViewportClassChanged(class) => initial_flag(class),
    }
}
