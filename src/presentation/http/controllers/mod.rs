// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod articles;
pub mod authors;
pub mod categories;
pub mod comments;
pub mod newsletter;
pub mod site;
pub mod vlogs;

use serde::Deserialize;

/// `?page=` as sent; the paginator decides what a bad value means.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}
