/// Events emitted by the page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HeaderEvent {
    ToggleSidebar,
}
