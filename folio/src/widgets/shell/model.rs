use folio_layout::{PanelFrame, ViewportClass};

/// Read-only snapshot of the page shell for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShellViewModel {
    pub(crate) class: ViewportClass,
    pub(crate) frame: PanelFrame,
    pub(crate) backdrop_visible: bool,
    pub(crate) window_width: f32,
}
