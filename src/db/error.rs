/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Validation failures raised by mutations and dangling references.
/// Every variant is user visible.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("That email is already taken.")]
    EmailTaken(String),

    #[error("User not found")]
    UserNotFound(String),

    #[error("Post not found")]
    PostNotFound(String),

    #[error("Could not allocate a unique id")]
    IdExhausted(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Conflict,
    NotFound,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::EmailTaken(_) | StoreError::IdExhausted(_) => ErrorKind::Conflict,
            StoreError::UserNotFound(_) | StoreError::PostNotFound(_) => ErrorKind::NotFound,
        }
    }

    /// Machine readable code surfaced in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::NotFound => "NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_codes() {
        let taken = StoreError::EmailTaken("a@b.c".into());
        assert_eq!(taken.kind(), ErrorKind::Conflict);
        assert_eq!(taken.code(), "CONFLICT");
        assert_eq!(taken.to_string(), "That email is already taken.");

        let missing = StoreError::PostNotFound("99".into());
        assert_eq!(missing.kind(), ErrorKind::NotFound);
        assert_eq!(missing.code(), "NOT_FOUND");
        assert_eq!(missing.to_string(), "Post not found");
    }
}
