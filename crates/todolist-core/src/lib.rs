pub mod auth;
pub mod category;
pub mod error;
pub mod status;
pub mod todo;
mod validate;

pub use category::Category;
pub use error::CoreError;
pub use status::Status;
pub use todo::{Todo, TodoFilter};
