mod context;
mod http;
mod traits;

pub use context::RequestContext;
pub use http::HttpService;
pub use traits::{ServiceError, TodoService};
