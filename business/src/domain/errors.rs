/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// The payload carries the driver message so callers can log it; it is never
/// meant to reach an API consumer.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.connection: {0}")]
    Connection(String),
    #[error("repository.database_error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        RepositoryError::Connection(message.into())
    }
    pub fn database_error(message: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(message.into())
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, RepositoryError::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_flag_connection_errors() {
        assert!(RepositoryError::connection("failed to connect to db").is_connection());
        assert!(!RepositoryError::database_error("syntax error").is_connection());
    }

    #[test]
    fn should_prefix_display_with_code() {
        let err = RepositoryError::database_error("relation does not exist");
        assert_eq!(
            err.to_string(),
            "repository.database_error: relation does not exist"
        );
    }
}
