mod home;
mod service;

pub use home::{HOME_VLOG_LIMIT, HomeQuery};
pub use service::SiteQueryService;
