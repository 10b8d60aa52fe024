use folio_layout::{PanelFrame, ViewportClass};

use crate::config::SocialLink;

/// Data the sidebar panel renders for one frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) class: ViewportClass,
    pub(crate) frame: PanelFrame,
    pub(crate) author: &'a str,
    pub(crate) email: &'a str,
    pub(crate) social_links: &'a [SocialLink],
    pub(crate) selected_category: &'a str,
}

impl SidebarViewModel<'_> {
    /// The close control is only offered while the panel is an overlay.
    pub(crate) fn shows_close_control(&self) -> bool {
        self.class.is_mobile()
    }
}
