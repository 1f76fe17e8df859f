use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, RequestBuilder, StatusCode};
use todolist_core::auth::{Credentials, Registration, TokenResponse};
use todolist_core::category::{Category, CreateCategory, UpdateCategory};
use todolist_core::status::{CreateStatus, Status, StatusQuery, UpdateStatus};
use todolist_core::todo::{CreateTodo, Todo, UpdateTodo};
use tracing::debug;

use crate::{RequestContext, ServiceError, TodoService};

/// Async HTTP client implementation of TodoService.
/// Connects to the todo REST API.
#[derive(Debug, Clone)]
pub struct HttpService {
    base_url: String,
    client: Client,
}

impl HttpService {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn with_auth(&self, builder: RequestBuilder, ctx: &RequestContext) -> RequestBuilder {
        match ctx.bearer() {
            Some(value) => builder.header(AUTHORIZATION, value),
            None => builder,
        }
    }

    /// Check if the server is reachable. Any HTTP answer counts, since the
    /// API has no dedicated health endpoint and `/todo` rejects anonymous calls.
    pub async fn health_check(&self) -> Result<(), ServiceError> {
        let resp = self
            .client
            .get(format!("{}/todo", self.base_url))
            .send()
            .await
            .map_err(|e| ServiceError::Network(format!("connection failed: {e}")))?;
        if resp.status().is_server_error() {
            Err(ServiceError::Internal(format!(
                "health check failed: {}",
                resp.status()
            )))
        } else {
            Ok(())
        }
    }

    fn get(&self, ctx: &RequestContext, path: &str) -> RequestBuilder {
        self.with_auth(self.client.get(format!("{}{path}", self.base_url)), ctx)
    }

    fn statuses_request(&self, ctx: &RequestContext, category_id: i64) -> RequestBuilder {
        self.get(ctx, "/status").query(&StatusQuery { category_id })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<T, ServiceError> {
        debug!("GET {path}");
        send_json(self.get(ctx, path)).await
    }

    async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        debug!("POST {path}");
        let builder = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body);
        let resp = self
            .with_auth(builder, ctx)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        handle_response(resp).await
    }

    async fn put_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        debug!("PUT {path}");
        let builder = self
            .client
            .put(format!("{}{path}", self.base_url))
            .json(body);
        let resp = self
            .with_auth(builder, ctx)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        handle_response(resp).await
    }

    /// The delete endpoints answer with an arbitrary body; callers only
    /// need to know it succeeded.
    async fn delete_req(&self, ctx: &RequestContext, path: &str) -> Result<(), ServiceError> {
        debug!("DELETE {path}");
        let builder = self.client.delete(format!("{}{path}", self.base_url));
        let resp = self
            .with_auth(builder, ctx)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(parse_error(resp).await)
        }
    }
}

async fn send_json<T: serde::de::DeserializeOwned>(
    builder: RequestBuilder,
) -> Result<T, ServiceError> {
    let resp = builder
        .send()
        .await
        .map_err(|e| ServiceError::Network(e.to_string()))?;
    handle_response(resp).await
}

async fn handle_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ServiceError> {
    let status = resp.status();
    if status.is_success() {
        resp.json::<T>()
            .await
            .map_err(|e| ServiceError::Internal(format!("json decode: {e}")))
    } else {
        Err(parse_error_with_status(status, resp).await)
    }
}

async fn parse_error(resp: reqwest::Response) -> ServiceError {
    let status = resp.status();
    parse_error_with_status(status, resp).await
}

async fn parse_error_with_status(status: StatusCode, resp: reqwest::Response) -> ServiceError {
    let body = resp.text().await.unwrap_or_default();
    let msg = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v["error"]
                .as_str()
                .or_else(|| v["message"].as_str())
                .map(String::from)
        })
        .unwrap_or(body);
    let msg = if msg.is_empty() {
        status.to_string()
    } else {
        msg
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceError::Unauthorized(msg),
        StatusCode::NOT_FOUND => ServiceError::NotFound(msg),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY | StatusCode::CONFLICT => {
            ServiceError::InvalidInput(msg)
        }
        _ => ServiceError::Internal(msg),
    }
}

#[async_trait]
impl TodoService for HttpService {
    async fn login(
        &self,
        ctx: &RequestContext,
        input: &Credentials,
    ) -> Result<TokenResponse, ServiceError> {
        self.post_json(ctx, "/auth/login", input).await
    }

    async fn register(
        &self,
        ctx: &RequestContext,
        input: &Registration,
    ) -> Result<TokenResponse, ServiceError> {
        self.post_json(ctx, "/auth/register", input).await
    }

    async fn list_todos(&self, ctx: &RequestContext) -> Result<Vec<Todo>, ServiceError> {
        self.get_json(ctx, "/todo").await
    }

    async fn create_todo(
        &self,
        ctx: &RequestContext,
        input: &CreateTodo,
    ) -> Result<Todo, ServiceError> {
        self.post_json(ctx, "/todo", input).await
    }

    async fn update_todo(
        &self,
        ctx: &RequestContext,
        id: i64,
        update: &UpdateTodo,
    ) -> Result<Todo, ServiceError> {
        self.put_json(ctx, &format!("/todo/{id}"), update).await
    }

    async fn delete_todo(&self, ctx: &RequestContext, id: i64) -> Result<(), ServiceError> {
        self.delete_req(ctx, &format!("/todo/{id}")).await
    }

    async fn list_categories(&self, ctx: &RequestContext) -> Result<Vec<Category>, ServiceError> {
        self.get_json(ctx, "/category").await
    }

    async fn create_category(
        &self,
        ctx: &RequestContext,
        input: &CreateCategory,
    ) -> Result<Category, ServiceError> {
        self.post_json(ctx, "/category", input).await
    }

    async fn update_category(
        &self,
        ctx: &RequestContext,
        id: i64,
        update: &UpdateCategory,
    ) -> Result<Category, ServiceError> {
        self.put_json(ctx, &format!("/category/{id}"), update).await
    }

    async fn delete_category(&self, ctx: &RequestContext, id: i64) -> Result<(), ServiceError> {
        self.delete_req(ctx, &format!("/category/{id}")).await
    }

    async fn list_statuses(
        &self,
        ctx: &RequestContext,
        category_id: i64,
    ) -> Result<Vec<Status>, ServiceError> {
        debug!("GET /status for category {category_id}");
        send_json(self.statuses_request(ctx, category_id)).await
    }

    async fn create_status(
        &self,
        ctx: &RequestContext,
        input: &CreateStatus,
    ) -> Result<Status, ServiceError> {
        self.post_json(ctx, "/status", input).await
    }

    async fn update_status(
        &self,
        ctx: &RequestContext,
        id: i64,
        update: &UpdateStatus,
    ) -> Result<Status, ServiceError> {
        self.put_json(ctx, &format!("/status/{id}"), update).await
    }

    async fn delete_status(&self, ctx: &RequestContext, id: i64) -> Result<(), ServiceError> {
        self.delete_req(ctx, &format!("/status/{id}")).await
    }
}
