use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::GroceryError;
use super::model::Grocery;
use super::page::GroceryPage;
use super::pagination::PageRequest;
use super::value_objects::GroceryFilter;

#[derive(Debug, Clone)]
pub struct CreateGroceryParams {
    /// Raw name as received; empty means "no name".
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ListGroceriesParams {
    pub filter: GroceryFilter,
    pub page: PageRequest,
}

#[derive(Debug, Clone)]
pub struct UpdateGroceryParams {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct MarkBoughtParams {
    pub id: Uuid,
    /// Missing or zero reverts the item to to-buy.
    pub bought_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ToDeleteParams {
    pub id: Uuid,
    /// Missing or zero stamps the current server time.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Every operation the service offers on groceries. Ids are already parsed;
/// malformed input never gets this far.
#[async_trait]
pub trait GroceryQueryFacade: Send + Sync {
    async fn create(&self, params: CreateGroceryParams) -> Result<Grocery, GroceryError>;
    async fn list(&self, params: ListGroceriesParams) -> Result<GroceryPage, GroceryError>;
    async fn count(&self, filter: GroceryFilter) -> Result<i64, GroceryError>;
    async fn update(&self, params: UpdateGroceryParams) -> Result<(), GroceryError>;
    async fn mark_bought(&self, params: MarkBoughtParams) -> Result<(), GroceryError>;
    async fn to_delete(&self, params: ToDeleteParams) -> Result<(), GroceryError>;
    async fn to_restore(&self, id: Uuid) -> Result<(), GroceryError>;
}
