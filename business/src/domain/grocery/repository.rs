use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Grocery;
use super::value_objects::GroceryFilter;

/// Storage port for groceries.
///
/// Update methods return the number of affected rows; an unknown id yields 0,
/// not an error.
#[async_trait]
pub trait GroceryRepository: Send + Sync {
    async fn insert(&self, grocery: &Grocery) -> Result<Grocery, RepositoryError>;
    async fn find_page(
        &self,
        filter: GroceryFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Grocery>, RepositoryError>;
    async fn count(&self, filter: GroceryFilter) -> Result<i64, RepositoryError>;
    async fn update_name(&self, id: Uuid, name: Option<String>) -> Result<u64, RepositoryError>;
    async fn set_bought_at(
        &self,
        id: Uuid,
        bought_at: Option<DateTime<Utc>>,
    ) -> Result<u64, RepositoryError>;
    async fn set_deleted_at(
        &self,
        id: Uuid,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Result<u64, RepositoryError>;
}
