use todolist_core::Category;
use tracing::debug;

use crate::collection::{merge_fetched, remove_by_id, replace_by_id};
use crate::{ApiStatus, FetchMode};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoriesState {
    pub data: Vec<Category>,
    pub api_status: ApiStatus,
    pub api_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryAction {
    FetchPending,
    FetchFulfilled(Vec<Category>, FetchMode),
    FetchRejected(String),
    Added(Category),
    Updated(Category),
    Deleted(i64),
    Logout,
}

impl CategoriesState {
    pub fn reduce(&mut self, action: CategoryAction) {
        match action {
            CategoryAction::FetchPending => {
                self.api_status = ApiStatus::Loading;
                self.api_error = None;
            }
            CategoryAction::FetchFulfilled(categories, mode) => {
                self.api_status = ApiStatus::Succeeded;
                merge_fetched(&mut self.data, categories, mode);
            }
            CategoryAction::FetchRejected(message) => {
                self.api_status = ApiStatus::Failed;
                self.api_error = Some(message);
            }
            CategoryAction::Added(category) => self.data.push(category),
            CategoryAction::Updated(category) => {
                let id = category.id;
                if !replace_by_id(&mut self.data, category) {
                    debug!("updated category {id} is not cached, ignoring");
                }
            }
            CategoryAction::Deleted(id) => {
                if !remove_by_id(&mut self.data, id) {
                    debug!("deleted category {id} is not cached, ignoring");
                }
            }
            CategoryAction::Logout => *self = Self::default(),
        }
    }

    pub fn find(&self, id: i64) -> Option<&Category> {
        self.data.iter().find(|c| c.id == id)
    }

    /// Title for display next to a todo; `None` for unknown ids.
    pub fn title_of(&self, id: i64) -> Option<&str> {
        self.find(id).map(|c| c.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn category(id: i64, title: &str) -> Category {
        let now = Utc::now();
        Category {
            id,
            user_id: 1,
            title: title.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn add_update_delete() {
        let mut state = CategoriesState::default();
        state.reduce(CategoryAction::Added(category(1, "Work")));
        state.reduce(CategoryAction::Added(category(2, "Home")));
        state.reduce(CategoryAction::Updated(category(1, "Job")));
        assert_eq!(state.title_of(1), Some("Job"));
        assert_eq!(state.data[0].id, 1);

        state.reduce(CategoryAction::Deleted(1));
        assert_eq!(state.find(1), None);
        assert_eq!(state.data.len(), 1);

        state.reduce(CategoryAction::Deleted(42));
        assert_eq!(state.data.len(), 1);
    }

    #[test]
    fn fetch_append_duplicates_raw_data() {
        let mut state = CategoriesState::default();
        for _ in 0..2 {
            state.reduce(CategoryAction::FetchPending);
            state.reduce(CategoryAction::FetchFulfilled(
                vec![category(1, "Work")],
                FetchMode::Append,
            ));
        }
        assert_eq!(state.data.len(), 2);
        assert_eq!(state.api_status, ApiStatus::Succeeded);
    }

    #[test]
    fn fetch_failure_and_logout() {
        let mut state = CategoriesState::default();
        state.reduce(CategoryAction::FetchPending);
        state.reduce(CategoryAction::FetchRejected("offline".into()));
        assert_eq!(state.api_status, ApiStatus::Failed);
        assert_eq!(state.api_error.as_deref(), Some("offline"));

        state.reduce(CategoryAction::Logout);
        assert_eq!(state, CategoriesState::default());
    }
}
