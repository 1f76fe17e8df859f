use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::required;
use crate::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCategory {
    pub title: String,
}

impl CreateCategory {
    pub fn new(title: &str) -> Result<Self, CoreError> {
        Ok(Self {
            title: required("title", title)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCategory {
    pub title: String,
}

impl UpdateCategory {
    pub fn new(title: &str) -> Result<Self, CoreError> {
        Ok(Self {
            title: required("title", title)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{
            "id": 1,
            "userId": 2,
            "title": "Work",
            "createdAt": "2022-03-01T10:00:00Z",
            "updatedAt": "2022-03-01T10:00:00Z"
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.title, "Work");
        assert_eq!(category.user_id, 2);
    }

    #[test]
    fn blank_title_rejected() {
        assert!(CreateCategory::new("").is_err());
        assert!(UpdateCategory::new("  ").is_err());
        assert_eq!(CreateCategory::new(" Home ").unwrap().title, "Home");
    }
}
