use std::fmt;

/// Outcome of a container's most recent fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl ApiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::Idle => "idle",
            ApiStatus::Loading => "loading",
            ApiStatus::Succeeded => "succeeded",
            ApiStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a successful fetch is merged into the cached collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// The fetched list becomes the collection.
    #[default]
    Replace,
    /// The fetched list is appended to whatever is cached, so repeated
    /// fetches leave duplicates in the raw collection. Views deduplicate,
    /// but a delete removes only the first copy of an id; a later copy
    /// becomes visible again until the next replacing fetch.
    Append,
}

impl FetchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchMode::Replace => "replace",
            FetchMode::Append => "append",
        }
    }
}
