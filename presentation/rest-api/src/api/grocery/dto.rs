use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::grocery::model::Grocery;
use business::domain::grocery::page::GroceryPage;

#[derive(Debug, Clone, Object)]
pub struct CreateGroceryRequest {
    /// Item name; empty or missing stores no name
    #[oai(default)]
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateGroceryRequest {
    /// New item name; empty or missing clears it
    #[oai(default)]
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct BuyGroceryRequest {
    /// When the item was bought; omit to move it back to the to-buy list
    #[oai(skip_serializing_if_is_none)]
    pub bought_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Object)]
pub struct DeleteGroceryRequest {
    /// When the item was deleted; defaults to the server time
    #[oai(skip_serializing_if_is_none)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Object)]
pub struct GroceryResponse {
    /// Grocery unique identifier
    pub id: Uuid,
    /// Item name, absent when none was given
    pub name: Option<String>,
    /// Set when the item has been bought
    pub bought_at: Option<DateTime<Utc>>,
    /// Set when the item has been deleted
    pub deleted_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Grocery> for GroceryResponse {
    fn from(item: Grocery) -> Self {
        Self {
            id: item.id,
            name: item.name,
            bought_at: item.bought_at,
            deleted_at: item.deleted_at,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PageMetadata {
    /// Rows matching the filters, across all pages
    pub total_count: i64,
    /// Requested page size
    pub results_per_page: i64,
    /// Requested page number
    pub page: i64,
    /// Last page holding results
    pub max_page: i64,
}

#[derive(Debug, Clone, Object)]
pub struct GroceryListResponse {
    pub results: Vec<GroceryResponse>,
    pub metadata: PageMetadata,
}

impl From<GroceryPage> for GroceryListResponse {
    fn from(page: GroceryPage) -> Self {
        let metadata = PageMetadata {
            total_count: page.total_count,
            results_per_page: page.results_per_page(),
            page: page.page(),
            max_page: page.max_page(),
        };
        Self {
            results: page.items.into_iter().map(Into::into).collect(),
            metadata,
        }
    }
}
