use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::{positive_id, required};
use crate::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub category_id: i64,
    pub status_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /todo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    pub category_id: i64,
    pub status_id: i64,
}

impl CreateTodo {
    pub fn new(title: &str, category_id: i64, status_id: i64) -> Result<Self, CoreError> {
        Ok(Self {
            title: required("title", title)?,
            category_id: positive_id("categoryId", category_id)?,
            status_id: positive_id("statusId", status_id)?,
        })
    }
}

/// Body of `PUT /todo/:id`. The API expects every field, not a patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub title: String,
    pub category_id: i64,
    pub status_id: i64,
}

impl UpdateTodo {
    pub fn new(title: &str, category_id: i64, status_id: i64) -> Result<Self, CoreError> {
        let CreateTodo {
            title,
            category_id,
            status_id,
        } = CreateTodo::new(title, category_id, status_id)?;
        Ok(Self {
            title,
            category_id,
            status_id,
        })
    }
}

/// Client-side narrowing of the todo list. Never sent to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoFilter {
    pub category_id: Option<i64>,
    pub status_id: Option<i64>,
}

impl TodoFilter {
    pub fn new(category_id: Option<i64>, status_id: Option<i64>) -> Self {
        Self {
            category_id,
            status_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category_id.is_none() && self.status_id.is_none()
    }

    /// Every field that is set must equal the todo's value.
    pub fn matches(&self, todo: &Todo) -> bool {
        self.category_id.map_or(true, |c| c == todo.category_id)
            && self.status_id.map_or(true, |s| s == todo.status_id)
    }
}
