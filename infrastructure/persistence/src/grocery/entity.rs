use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::grocery::model::Grocery;

#[derive(Debug, FromRow)]
pub struct GroceryEntity {
    pub id: Uuid,
    pub name: Option<String>,
    pub bought_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GroceryEntity {
    pub fn into_domain(self) -> Grocery {
        Grocery::from_repository(
            self.id,
            self.name,
            self.bought_at,
            self.deleted_at,
            self.created_at,
            self.updated_at,
        )
    }
}
