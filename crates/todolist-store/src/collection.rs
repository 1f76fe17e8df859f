use std::collections::HashSet;

use todolist_core::{Category, Status, Todo};

use crate::FetchMode;

/// Records identified by a server-assigned id.
pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for Todo {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Category {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Status {
    fn key(&self) -> i64 {
        self.id
    }
}

pub(crate) fn merge_fetched<T>(data: &mut Vec<T>, fetched: Vec<T>, mode: FetchMode) {
    match mode {
        FetchMode::Replace => *data = fetched,
        FetchMode::Append => data.extend(fetched),
    }
}

/// Replace the first record with the same id, keeping its position.
/// Returns false when no record matches.
pub(crate) fn replace_by_id<T: Keyed>(data: &mut [T], item: T) -> bool {
    match data.iter().position(|d| d.key() == item.key()) {
        Some(index) => {
            data[index] = item;
            true
        }
        None => false,
    }
}

/// Remove the first record with `id`, keeping the order of the rest.
pub(crate) fn remove_by_id<T: Keyed>(data: &mut Vec<T>, id: i64) -> bool {
    match data.iter().position(|d| d.key() == id) {
        Some(index) => {
            data.remove(index);
            true
        }
        None => false,
    }
}

/// First occurrence of each id, in collection order.
pub fn dedup_by_id<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: Keyed + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(id: i64, title: &str) -> Status {
        Status {
            id,
            title: title.into(),
            category_id: 1,
            color: "red".into(),
        }
    }

    #[test]
    fn replace_keeps_position() {
        let mut data = vec![status(1, "a"), status(2, "b"), status(3, "c")];
        assert!(replace_by_id(&mut data, status(2, "B")));
        let titles: Vec<_> = data.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["a", "B", "c"]);
    }

    #[test]
    fn replace_unknown_is_noop() {
        let mut data = vec![status(1, "a")];
        assert!(!replace_by_id(&mut data, status(9, "z")));
        assert_eq!(data, vec![status(1, "a")]);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut data = vec![status(1, "a"), status(2, "b")];
        assert!(!remove_by_id(&mut data, 7));
        assert_eq!(data.len(), 2);
        assert!(remove_by_id(&mut data, 1));
        assert_eq!(data, vec![status(2, "b")]);
    }

    #[test]
    fn append_then_dedup() {
        let mut data = vec![status(1, "a")];
        merge_fetched(&mut data, vec![status(1, "a"), status(2, "b")], FetchMode::Append);
        assert_eq!(data.len(), 3);
        let ids: Vec<_> = dedup_by_id(&data).iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn replace_mode_discards_cache() {
        let mut data = vec![status(1, "a"), status(5, "e")];
        merge_fetched(&mut data, vec![status(2, "b")], FetchMode::Replace);
        assert_eq!(data, vec![status(2, "b")]);
    }
}
