// src/domain/author/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    Author, AuthorEntry, AuthorProfile, AuthorRef, AuthorUpdate, NewAuthor, display_name,
};
pub use repository::AuthorRepository;
pub use value_objects::{AuthorId, Capability, PasswordHash, Role, Username};
