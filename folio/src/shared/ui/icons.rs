pub(crate) const MENU: &[u8] = include_bytes!("../../../assets/icons/menu.svg");
pub(crate) const CLOSE: &[u8] =
    include_bytes!("../../../assets/icons/close.svg");
pub(crate) const HOME: &[u8] = include_bytes!("../../../assets/icons/home.svg");
pub(crate) const MAIL: &[u8] = include_bytes!("../../../assets/icons/mail.svg");
pub(crate) const LINK: &[u8] = include_bytes!("../../../assets/icons/link.svg");
