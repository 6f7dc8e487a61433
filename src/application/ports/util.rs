// src/application/ports/util.rs
pub use crate::domain::common::SlugGenerator;
