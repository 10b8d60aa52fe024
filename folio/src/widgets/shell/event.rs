use std::time::Instant;

/// Events handled by the page shell that owns the sidebar open flag.
#[derive(Debug, Clone)]
pub(crate) enum ShellEvent {
    /// Flip the sidebar. Issued by the header button, the backdrop and the
    /// sidebar close control.
    ToggleSidebar,
    /// Close the sidebar if it is currently an open mobile overlay.
    CloseOverlay,
    WindowResized { width: f32 },
    /// Animation frame; queued layout events settle here.
    Frame(Instant),
}
