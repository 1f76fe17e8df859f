use crate::CoreError;

/// Trimmed copy of `value`, or an error naming `field` when it is blank.
pub(crate) fn required(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Selects in the UI use 0 for "nothing chosen", so ids must be positive.
pub(crate) fn positive_id(field: &str, id: i64) -> Result<i64, CoreError> {
    if id <= 0 {
        return Err(CoreError::InvalidInput(format!("{field} must be selected")));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims() {
        assert_eq!(required("title", "  hi ").unwrap(), "hi");
    }

    #[test]
    fn required_rejects_whitespace() {
        let err = required("title", " \t").unwrap_err();
        assert_eq!(err, CoreError::InvalidInput("title is required".into()));
    }

    #[test]
    fn positive_id_rejects_zero() {
        assert!(positive_id("categoryId", 0).is_err());
        assert!(positive_id("categoryId", -4).is_err());
        assert_eq!(positive_id("categoryId", 7).unwrap(), 7);
    }
}
