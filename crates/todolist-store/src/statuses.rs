use todolist_core::status::{CreateStatus, Status, UpdateStatus};
use todolist_service::{RequestContext, ServiceError, TodoService};
use tracing::{debug, warn};

use crate::collection::{remove_by_id, replace_by_id};
use crate::StoreError;

/// Statuses of one category, straight from the server.
///
/// Nothing is cached: each call is a fresh request. Non-positive ids mean
/// "no category selected" and yield an empty list without a request.
pub async fn fetch_statuses(
    service: &dyn TodoService,
    ctx: &RequestContext,
    category_id: i64,
) -> Result<Vec<Status>, ServiceError> {
    if category_id <= 0 {
        debug!("no category selected, skipping status lookup");
        return Ok(Vec::new());
    }
    service.list_statuses(ctx, category_id).await
}

/// Transient status list owned by whoever is editing one category.
///
/// Lives outside the shared store and is dropped with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusList {
    category_id: i64,
    items: Vec<Status>,
}

impl StatusList {
    pub async fn load(
        service: &dyn TodoService,
        ctx: &RequestContext,
        category_id: i64,
    ) -> Result<Self, ServiceError> {
        let items = fetch_statuses(service, ctx, category_id).await?;
        Ok(Self { category_id, items })
    }

    pub fn category_id(&self) -> i64 {
        self.category_id
    }

    pub fn items(&self) -> &[Status] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Status> {
        self.items.iter().find(|s| s.id == id)
    }

    pub async fn add(
        &mut self,
        service: &dyn TodoService,
        ctx: &RequestContext,
        title: &str,
        color: &str,
    ) -> Result<Status, StoreError> {
        let input = CreateStatus::new(title, self.category_id, color)?;
        let status = service.create_status(ctx, &input).await.map_err(|e| {
            warn!("create status in category {} failed: {e}", self.category_id);
            e
        })?;
        self.items.push(status.clone());
        Ok(status)
    }

    pub async fn update(
        &mut self,
        service: &dyn TodoService,
        ctx: &RequestContext,
        id: i64,
        title: &str,
        color: &str,
    ) -> Result<Status, StoreError> {
        let update = UpdateStatus::new(title, self.category_id, color)?;
        let status = service.update_status(ctx, id, &update).await.map_err(|e| {
            warn!("update status {id} failed: {e}");
            e
        })?;
        if !replace_by_id(&mut self.items, status.clone()) {
            debug!("updated status {id} is not listed, ignoring");
        }
        Ok(status)
    }

    pub async fn delete(
        &mut self,
        service: &dyn TodoService,
        ctx: &RequestContext,
        id: i64,
    ) -> Result<(), StoreError> {
        service.delete_status(ctx, id).await.map_err(|e| {
            warn!("delete status {id} failed: {e}");
            e
        })?;
        if !remove_by_id(&mut self.items, id) {
            debug!("deleted status {id} is not listed, ignoring");
        }
        Ok(())
    }
}
