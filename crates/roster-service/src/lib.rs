mod error;
mod export;
mod service;

pub use error::ServiceError;
pub use export::{read_users_from_json, write_users_to_json};
pub use service::UserService;
