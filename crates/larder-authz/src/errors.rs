use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("invalid permission: {0}")]
    InvalidPermission(String),
    #[error("invalid role: {0}")]
    InvalidRole(String),
}

pub type AuthzResult<T> = Result<T, AuthzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_variants() {
        let errors = vec![
            AuthzError::InvalidPermission("bad".to_string()),
            AuthzError::InvalidRole("bad".to_string()),
        ];

        for error in errors {
            let rendered = error.to_string();
            assert!(rendered.ends_with("bad"));
        }
    }
}
