use std::sync::Arc;

use todolist_core::auth::{Credentials, Registration};
use todolist_core::category::{CreateCategory, UpdateCategory};
use todolist_core::todo::{CreateTodo, UpdateTodo};
use todolist_core::{Category, Status, Todo, TodoFilter};
use todolist_service::{RequestContext, TodoService};
use tracing::{info, warn};

use crate::{
    fetch_statuses, ApiStatus, CategoriesState, CategoryAction, FetchMode, Session, StatusList,
    StoreError, TodoAction, TodosState,
};

/// Process-wide client state: the todo and category containers, the
/// session credential, and the service they synchronize with.
///
/// Fetch failures land in each container's `api_status`/`api_error`.
/// Every other intent reports failure only through its `Result` (and a log
/// line); the containers are left untouched.
pub struct Store {
    service: Arc<dyn TodoService>,
    session: Session,
    fetch_mode: FetchMode,
    todos: TodosState,
    categories: CategoriesState,
}

impl Store {
    pub fn new(service: Arc<dyn TodoService>, session: Session) -> Self {
        Self {
            service,
            session,
            fetch_mode: FetchMode::default(),
            todos: TodosState::default(),
            categories: CategoriesState::default(),
        }
    }

    pub fn with_fetch_mode(mut self, mode: FetchMode) -> Self {
        self.fetch_mode = mode;
        self
    }

    pub fn todos(&self) -> &TodosState {
        &self.todos
    }

    pub fn categories(&self) -> &CategoriesState {
        &self.categories
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn service(&self) -> &dyn TodoService {
        self.service.as_ref()
    }

    pub fn context(&self) -> &RequestContext {
        self.session.context()
    }

    // -- Session --

    /// Exchange credentials for a token and keep it for later requests.
    /// Collections are not loaded; call [`Store::start_session`] for that.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), StoreError> {
        let resp = self
            .service
            .login(&RequestContext::anonymous(), credentials)
            .await
            .map_err(|e| {
                warn!("login as {} failed: {e}", credentials.username);
                e
            })?;
        self.session.begin(resp.token)?;
        Ok(())
    }

    pub async fn register(&mut self, registration: &Registration) -> Result<(), StoreError> {
        let resp = self
            .service
            .register(&RequestContext::anonymous(), registration)
            .await
            .map_err(|e| {
                warn!("register as {} failed: {e}", registration.username);
                e
            })?;
        self.session.begin(resp.token)?;
        Ok(())
    }

    /// Load todos and categories once a credential exists. Does nothing
    /// when signed out or when todos were already requested.
    pub async fn start_session(&mut self) {
        if !self.session.is_authenticated() {
            info!("no session token, skipping initial load");
            return;
        }
        if self.todos.api_status != ApiStatus::Idle {
            return;
        }
        self.fetch_todos().await;
        self.fetch_categories().await;
    }

    /// Forget the credential and reset both containers. The containers are
    /// reset even if the saved token cannot be removed.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.todos.reduce(TodoAction::Logout);
        self.categories.reduce(CategoryAction::Logout);
        self.session.end()?;
        Ok(())
    }

    // -- Todos --

    pub async fn fetch_todos(&mut self) {
        self.todos.reduce(TodoAction::FetchPending);
        match self.service.list_todos(self.session.context()).await {
            Ok(todos) => {
                info!("fetched {} todos", todos.len());
                self.todos
                    .reduce(TodoAction::FetchFulfilled(todos, self.fetch_mode));
            }
            Err(e) => {
                warn!("fetch todos failed: {e}");
                self.todos.reduce(TodoAction::FetchRejected(e.to_string()));
            }
        }
    }

    pub async fn add_todo(
        &mut self,
        title: &str,
        category_id: i64,
        status_id: i64,
    ) -> Result<Todo, StoreError> {
        let input = CreateTodo::new(title, category_id, status_id)?;
        let todo = self
            .service
            .create_todo(self.session.context(), &input)
            .await
            .map_err(|e| {
                warn!("add todo failed: {e}");
                e
            })?;
        self.todos.reduce(TodoAction::Added(todo.clone()));
        Ok(todo)
    }

    pub async fn update_todo(
        &mut self,
        id: i64,
        title: &str,
        category_id: i64,
        status_id: i64,
    ) -> Result<Todo, StoreError> {
        let update = UpdateTodo::new(title, category_id, status_id)?;
        let todo = self
            .service
            .update_todo(self.session.context(), id, &update)
            .await
            .map_err(|e| {
                warn!("update todo {id} failed: {e}");
                e
            })?;
        self.todos.reduce(TodoAction::Updated(todo.clone()));
        Ok(todo)
    }

    pub async fn delete_todo(&mut self, id: i64) -> Result<(), StoreError> {
        self.service
            .delete_todo(self.session.context(), id)
            .await
            .map_err(|e| {
                warn!("delete todo {id} failed: {e}");
                e
            })?;
        self.todos.reduce(TodoAction::Deleted(id));
        Ok(())
    }

    pub fn set_filter(&mut self, category_id: Option<i64>, status_id: Option<i64>) {
        self.todos
            .reduce(TodoAction::SetFilter(TodoFilter::new(category_id, status_id)));
    }

    // -- Categories --

    pub async fn fetch_categories(&mut self) {
        self.categories.reduce(CategoryAction::FetchPending);
        match self.service.list_categories(self.session.context()).await {
            Ok(categories) => {
                info!("fetched {} categories", categories.len());
                self.categories
                    .reduce(CategoryAction::FetchFulfilled(categories, self.fetch_mode));
            }
            Err(e) => {
                warn!("fetch categories failed: {e}");
                self.categories
                    .reduce(CategoryAction::FetchRejected(e.to_string()));
            }
        }
    }

    pub async fn add_category(&mut self, title: &str) -> Result<Category, StoreError> {
        let input = CreateCategory::new(title)?;
        let category = self
            .service
            .create_category(self.session.context(), &input)
            .await
            .map_err(|e| {
                warn!("add category failed: {e}");
                e
            })?;
        self.categories.reduce(CategoryAction::Added(category.clone()));
        Ok(category)
    }

    pub async fn update_category(&mut self, id: i64, title: &str) -> Result<Category, StoreError> {
        let update = UpdateCategory::new(title)?;
        let category = self
            .service
            .update_category(self.session.context(), id, &update)
            .await
            .map_err(|e| {
                warn!("update category {id} failed: {e}");
                e
            })?;
        self.categories
            .reduce(CategoryAction::Updated(category.clone()));
        Ok(category)
    }

    pub async fn delete_category(&mut self, id: i64) -> Result<(), StoreError> {
        self.service
            .delete_category(self.session.context(), id)
            .await
            .map_err(|e| {
                warn!("delete category {id} failed: {e}");
                e
            })?;
        self.categories.reduce(CategoryAction::Deleted(id));
        Ok(())
    }

    // -- Statuses --

    /// Fresh status options for a category; nothing is kept in the store.
    pub async fn fetch_statuses(&self, category_id: i64) -> Result<Vec<Status>, StoreError> {
        Ok(fetch_statuses(self.service(), self.context(), category_id).await?)
    }

    /// Status list for editing one category. The category must be loaded.
    pub async fn status_list(&self, category_id: i64) -> Result<StatusList, StoreError> {
        if self.categories.find(category_id).is_none() {
            return Err(StoreError::NotFound(format!("category {category_id}")));
        }
        Ok(StatusList::load(self.service(), self.context(), category_id).await?)
    }
}
