pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod view;

pub(crate) use self::event::SidebarEvent;
