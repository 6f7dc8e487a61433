// src/domain/mod.rs
pub mod advertisement;
pub mod article;
pub mod author;
pub mod category;
pub mod comment;
pub mod common;
pub mod errors;
pub mod newsletter;
pub mod pagination;
pub mod vlog;
