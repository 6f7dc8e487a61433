// src/domain/common/mod.rs
pub mod email;
pub mod network;
pub mod slug;

pub use email::EmailAddress;
pub use network::ClientAddress;
pub use slug::{Slug, SlugGenerator, SlugService};
