pub mod advertisements;
pub mod articles;
pub mod authors;
pub mod categories;
pub mod comments;
pub mod newsletter;
pub mod site;
pub mod vlogs;
