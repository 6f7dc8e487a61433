// src/domain/vlog/mod.rs
pub mod entity;
pub mod repository;
pub mod video;

pub use entity::{NewVlog, VideoUrl, Vlog, VlogFilter, VlogId, VlogRecord, VlogTitle, VlogUpdate};
pub use repository::VlogRepository;
