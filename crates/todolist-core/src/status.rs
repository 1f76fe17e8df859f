use serde::{Deserialize, Serialize};

use crate::validate::{positive_id, required};
use crate::CoreError;

const MAX_COLOR_LEN: usize = 6;

/// A progress label scoped to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: i64,
    pub title: String,
    pub category_id: i64,
    pub color: String,
}

/// Body of `POST /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStatus {
    pub title: String,
    pub category_id: i64,
    pub color: String,
}

impl CreateStatus {
    pub fn new(title: &str, category_id: i64, color: &str) -> Result<Self, CoreError> {
        Ok(Self {
            title: required("title", title)?,
            category_id: positive_id("categoryId", category_id)?,
            color: color_name(color)?,
        })
    }
}

/// Body of `PUT /status/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub title: String,
    pub category_id: i64,
    pub color: String,
}

impl UpdateStatus {
    pub fn new(title: &str, category_id: i64, color: &str) -> Result<Self, CoreError> {
        let CreateStatus {
            title,
            category_id,
            color,
        } = CreateStatus::new(title, category_id, color)?;
        Ok(Self {
            title,
            category_id,
            color,
        })
    }
}

/// Query of `GET /status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    pub category_id: i64,
}

/// Colors are plain CSS color names such as `red` or `yellow`.
fn color_name(color: &str) -> Result<String, CoreError> {
    let color = required("color", color)?;
    if !color.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::InvalidInput(format!(
            "color must contain only letters: {color}"
        )));
    }
    if color.len() > MAX_COLOR_LEN {
        return Err(CoreError::InvalidInput(format!(
            "color must be at most {MAX_COLOR_LEN} letters: {color}"
        )));
    }
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_color_names() {
        let body = CreateStatus::new("Doing", 3, "yellow").unwrap();
        assert_eq!(body.color, "yellow");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "title": "Doing", "categoryId": 3, "color": "yellow" })
        );
    }

    #[test]
    fn rejects_hex_and_long_colors() {
        assert!(CreateStatus::new("Doing", 3, "#ff0000").is_err());
        assert!(CreateStatus::new("Doing", 3, "magenta").is_err());
        assert!(UpdateStatus::new("Doing", 3, "").is_err());
    }

    #[test]
    fn requires_category() {
        assert!(CreateStatus::new("Doing", 0, "red").is_err());
    }
}
