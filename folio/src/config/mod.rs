mod errors;
mod model;
mod storage;

pub(crate) use model::{LayoutConfig, SiteConfig, SocialLink};
pub(crate) use storage::load_initial_site_config;
