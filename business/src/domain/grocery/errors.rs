#[derive(Debug, thiserror::Error)]
pub enum GroceryError {
    #[error("grocery.invalid_uuid")]
    InvalidUuid,
    #[error("grocery.invalid_type")]
    InvalidType,
    #[error("grocery.invalid_deleted_flag: {0}")]
    InvalidDeletedFlag(String),
    #[error("grocery.count_failed")]
    CountFailed(#[source] crate::domain::errors::RepositoryError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl GroceryError {
    /// Validation errors are the caller's fault; everything else is storage.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GroceryError::InvalidUuid
                | GroceryError::InvalidType
                | GroceryError::InvalidDeletedFlag(_)
        )
    }
}
