// src/domain/category/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{
    Category, CategoryEntry, CategoryId, CategoryName, CategoryRef, CategoryUpdate, NewCategory,
};
pub use repository::CategoryRepository;
