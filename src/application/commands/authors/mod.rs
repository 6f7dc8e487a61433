mod bootstrap;
mod create;
mod login;
mod password;
mod service;
mod update;

pub use create::CreateAuthorCommand;
pub use login::{LoginCommand, LoginResult};
pub use service::AuthorCommandService;
pub use update::{UpdateAuthorCommand, UpdateProfileCommand};
