pub(crate) mod content;
pub(crate) mod header;
pub(crate) mod keyboard;
pub(crate) mod shell;
pub(crate) mod sidebar;
pub(crate) mod window;
