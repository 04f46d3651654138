use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single grocery list entry.
///
/// Bought and deleted states are derived from the nullness of their
/// timestamps; there are no separate flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Grocery {
    pub id: Uuid,
    pub name: Option<String>,
    pub bought_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Grocery {
    /// Builds a fresh to-buy, active item. `name` must already be normalized.
    pub fn new(name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            bought_at: None,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: Option<String>,
        bought_at: Option<DateTime<Utc>>,
        deleted_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            bought_at,
            deleted_at,
            created_at,
            updated_at,
        }
    }

    pub fn is_bought(&self) -> bool {
        self.bought_at.is_some()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
