/// Events emitted by the sidebar panel and its backdrop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEvent {
    /// Close control or backdrop press.
    ToggleSidebar,
    GoHome,
    SelectCategory(&'static str),
    CopyEmail,
    OpenLink(String),
}
