use std::fmt;

/// Per-request credentials.
///
/// Every `TodoService` call takes one of these instead of reading a shared
/// default header, so a logout only affects requests built after it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    token: Option<String>,
}

impl RequestContext {
    /// Context for the unauthenticated auth endpoints.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header, if any.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_header() {
        let ctx = RequestContext::anonymous();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.bearer(), None);
    }

    #[test]
    fn bearer_header_format() {
        let ctx = RequestContext::with_token("abc");
        assert_eq!(ctx.bearer().as_deref(), Some("Bearer abc"));
        assert_eq!(ctx.token(), Some("abc"));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let ctx = RequestContext::with_token("s3cr3t");
        assert!(!format!("{ctx:?}").contains("s3cr3t"));
    }
}
