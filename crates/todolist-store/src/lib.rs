//! Client-side state for the todo API.
//!
//! The containers in [`todos`] and [`categories`] mirror server responses;
//! [`Store`] wires them to a [`todolist_service::TodoService`] and a
//! [`Session`].

pub mod categories;
mod collection;
pub mod error;
pub mod lifecycle;
pub mod session;
pub mod statuses;
mod store;
pub mod todos;

pub use categories::{CategoriesState, CategoryAction};
pub use collection::{dedup_by_id, Keyed};
pub use error::{SessionError, StoreError};
pub use lifecycle::{ApiStatus, FetchMode};
pub use session::{Session, TokenStore};
pub use statuses::{fetch_statuses, StatusList};
pub use store::Store;
pub use todos::{TodoAction, TodosState};
