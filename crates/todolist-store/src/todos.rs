use todolist_core::{Todo, TodoFilter};
use tracing::debug;

use crate::collection::{dedup_by_id, merge_fetched, remove_by_id, replace_by_id};
use crate::{ApiStatus, FetchMode};

/// Cached todo collection plus the active client-side filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodosState {
    pub data: Vec<Todo>,
    pub filter: TodoFilter,
    pub api_status: ApiStatus,
    pub api_error: Option<String>,
}

/// Everything that can change a [`TodosState`].
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    FetchPending,
    FetchFulfilled(Vec<Todo>, FetchMode),
    FetchRejected(String),
    /// Canonical record returned by a create request.
    Added(Todo),
    /// Canonical record returned by an update request.
    Updated(Todo),
    Deleted(i64),
    SetFilter(TodoFilter),
    Logout,
}

impl TodosState {
    pub fn reduce(&mut self, action: TodoAction) {
        match action {
            TodoAction::FetchPending => {
                self.api_status = ApiStatus::Loading;
                self.api_error = None;
            }
            TodoAction::FetchFulfilled(todos, mode) => {
                self.api_status = ApiStatus::Succeeded;
                merge_fetched(&mut self.data, todos, mode);
            }
            TodoAction::FetchRejected(message) => {
                self.api_status = ApiStatus::Failed;
                self.api_error = Some(message);
            }
            TodoAction::Added(todo) => self.data.push(todo),
            TodoAction::Updated(todo) => {
                let id = todo.id;
                if !replace_by_id(&mut self.data, todo) {
                    debug!("updated todo {id} is not cached, ignoring");
                }
            }
            TodoAction::Deleted(id) => {
                if !remove_by_id(&mut self.data, id) {
                    debug!("deleted todo {id} is not cached, ignoring");
                }
            }
            TodoAction::SetFilter(filter) => self.filter = filter,
            TodoAction::Logout => *self = Self::default(),
        }
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.data.iter().find(|t| t.id == id)
    }

    /// What a view renders: filtered, one entry per id.
    ///
    /// In [`FetchMode::Append`] a delete removes only the first copy of the
    /// id, so a duplicate left by an earlier fetch shows up here again.
    pub fn visible(&self) -> Vec<&Todo> {
        dedup_by_id(self.data.iter().filter(|t| self.filter.matches(t)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn todo(id: i64, title: &str, category_id: i64, status_id: i64) -> Todo {
        let now = Utc::now();
        Todo {
            id,
            user_id: 1,
            title: title.into(),
            category_id,
            status_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn loaded(todos: Vec<Todo>) -> TodosState {
        let mut state = TodosState::default();
        state.reduce(TodoAction::FetchPending);
        state.reduce(TodoAction::FetchFulfilled(todos, FetchMode::Replace));
        state
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = TodosState::default();
        assert_eq!(state.api_status, ApiStatus::Idle);
        assert!(state.data.is_empty());
        assert!(state.filter.is_empty());
        assert_eq!(state.api_error, None);
    }

    #[test]
    fn fetch_lifecycle() {
        let mut state = TodosState::default();
        state.reduce(TodoAction::FetchPending);
        assert_eq!(state.api_status, ApiStatus::Loading);
        state.reduce(TodoAction::FetchFulfilled(
            vec![todo(1, "A", 1, 1)],
            FetchMode::Replace,
        ));
        assert_eq!(state.api_status, ApiStatus::Succeeded);
        assert_eq!(state.data.len(), 1);
    }

    #[test]
    fn fetch_rejected_records_error() {
        let mut state = TodosState::default();
        state.reduce(TodoAction::FetchPending);
        state.reduce(TodoAction::FetchRejected("boom".into()));
        assert_eq!(state.api_status, ApiStatus::Failed);
        assert_eq!(state.api_error.as_deref(), Some("boom"));

        // A new attempt clears the stale message
        state.reduce(TodoAction::FetchPending);
        assert_eq!(state.api_status, ApiStatus::Loading);
        assert_eq!(state.api_error, None);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut state = loaded(vec![todo(1, "A", 1, 1), todo(2, "B", 1, 1)]);
        state.reduce(TodoAction::Updated(todo(1, "A2", 1, 2)));
        assert_eq!(state.data[0].title, "A2");
        assert_eq!(state.data[0].status_id, 2);
        assert_eq!(state.data[1].title, "B");
    }

    #[test]
    fn update_of_uncached_id_changes_nothing() {
        let mut state = loaded(vec![todo(1, "A", 1, 1)]);
        let before = state.clone();
        state.reduce(TodoAction::Updated(todo(5, "ghost", 1, 1)));
        assert_eq!(state, before);
    }

    #[test]
    fn delete_preserves_order_of_rest() {
        let mut state = loaded(vec![todo(1, "A", 1, 1), todo(2, "B", 1, 1), todo(3, "C", 1, 1)]);
        state.reduce(TodoAction::Deleted(2));
        let ids: Vec<_> = state.data.iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn visible_applies_filter_and_dedups() {
        let mut state = TodosState::default();
        state.reduce(TodoAction::FetchFulfilled(
            vec![todo(1, "A", 1, 1), todo(2, "B", 1, 2)],
            FetchMode::Append,
        ));
        state.reduce(TodoAction::FetchFulfilled(
            vec![todo(1, "A", 1, 1), todo(2, "B", 1, 2)],
            FetchMode::Append,
        ));
        assert_eq!(state.data.len(), 4);
        assert_eq!(state.visible().len(), 2);

        state.reduce(TodoAction::SetFilter(TodoFilter::new(Some(1), Some(2))));
        let ids: Vec<_> = state.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, [2]);
    }

    #[test]
    fn append_mode_delete_leaves_later_duplicate() {
        let mut state = TodosState::default();
        for _ in 0..2 {
            state.reduce(TodoAction::FetchFulfilled(
                vec![todo(1, "A", 1, 1)],
                FetchMode::Append,
            ));
        }
        state.reduce(TodoAction::Deleted(1));
        assert_eq!(state.data.len(), 1);
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn logout_resets_everything() {
        let mut state = loaded(vec![todo(1, "A", 1, 1)]);
        state.reduce(TodoAction::SetFilter(TodoFilter::new(Some(1), None)));
        state.reduce(TodoAction::Logout);
        assert_eq!(state, TodosState::default());
    }
}
