use async_trait::async_trait;
use thiserror::Error;
use todolist_core::auth::{Credentials, Registration, TokenResponse};
use todolist_core::category::{Category, CreateCategory, UpdateCategory};
use todolist_core::status::{CreateStatus, Status, UpdateStatus};
use todolist_core::todo::{CreateTodo, Todo, UpdateTodo};
use todolist_core::CoreError;

use crate::RequestContext;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for ServiceError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidInput(msg) => ServiceError::InvalidInput(msg),
        }
    }
}

/// Operations exposed by the todo REST API.
///
/// The store programs against this trait.
/// `HttpService` is the production implementation; tests provide mocks.
#[async_trait]
pub trait TodoService: Send + Sync {
    // -- Auth (the context is normally anonymous) --
    async fn login(
        &self,
        ctx: &RequestContext,
        input: &Credentials,
    ) -> Result<TokenResponse, ServiceError>;
    async fn register(
        &self,
        ctx: &RequestContext,
        input: &Registration,
    ) -> Result<TokenResponse, ServiceError>;

    // -- Todos --
    async fn list_todos(&self, ctx: &RequestContext) -> Result<Vec<Todo>, ServiceError>;
    async fn create_todo(&self, ctx: &RequestContext, input: &CreateTodo)
        -> Result<Todo, ServiceError>;
    async fn update_todo(
        &self,
        ctx: &RequestContext,
        id: i64,
        update: &UpdateTodo,
    ) -> Result<Todo, ServiceError>;
    async fn delete_todo(&self, ctx: &RequestContext, id: i64) -> Result<(), ServiceError>;

    // -- Categories --
    async fn list_categories(&self, ctx: &RequestContext) -> Result<Vec<Category>, ServiceError>;
    async fn create_category(
        &self,
        ctx: &RequestContext,
        input: &CreateCategory,
    ) -> Result<Category, ServiceError>;
    async fn update_category(
        &self,
        ctx: &RequestContext,
        id: i64,
        update: &UpdateCategory,
    ) -> Result<Category, ServiceError>;
    async fn delete_category(&self, ctx: &RequestContext, id: i64) -> Result<(), ServiceError>;

    // -- Statuses --
    async fn list_statuses(
        &self,
        ctx: &RequestContext,
        category_id: i64,
    ) -> Result<Vec<Status>, ServiceError>;
    async fn create_status(
        &self,
        ctx: &RequestContext,
        input: &CreateStatus,
    ) -> Result<Status, ServiceError>;
    async fn update_status(
        &self,
        ctx: &RequestContext,
        id: i64,
        update: &UpdateStatus,
    ) -> Result<Status, ServiceError>;
    async fn delete_status(&self, ctx: &RequestContext, id: i64) -> Result<(), ServiceError>;
}
