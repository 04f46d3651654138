use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::grocery::model::Grocery;
use business::domain::grocery::repository::GroceryRepository;
use business::domain::grocery::value_objects::GroceryFilter;

use super::entity::GroceryEntity;
use crate::db::map_sqlx_error;

const COLUMNS: &str = "id, name, bought_at, deleted_at, created_at, updated_at";
/// Binds `$1` to the bought flag and `$2` to the deleted flag.
const FILTER_CLAUSE: &str = "(bought_at IS NOT NULL) = $1 AND (deleted_at IS NOT NULL) = $2";
const ORDER_CLAUSE: &str = "created_at DESC, id DESC";

fn find_page_sql() -> String {
    format!(
        "SELECT {COLUMNS} FROM groceries WHERE {FILTER_CLAUSE} ORDER BY {ORDER_CLAUSE} LIMIT $3 OFFSET $4"
    )
}

fn count_sql() -> String {
    format!("SELECT COUNT(*) FROM groceries WHERE {FILTER_CLAUSE}")
}

pub struct GroceryRepositoryPostgres {
    pool: PgPool,
}

impl GroceryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroceryRepository for GroceryRepositoryPostgres {
    async fn insert(&self, grocery: &Grocery) -> Result<Grocery, RepositoryError> {
        let entity = sqlx::query_as::<_, GroceryEntity>(&format!(
            "INSERT INTO groceries (id, name, bought_at, deleted_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}"
        ))
        .bind(grocery.id)
        .bind(&grocery.name)
        .bind(grocery.bought_at)
        .bind(grocery.deleted_at)
        .bind(grocery.created_at)
        .bind(grocery.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn find_page(
        &self,
        filter: GroceryFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Grocery>, RepositoryError> {
        let entities = sqlx::query_as::<_, GroceryEntity>(&find_page_sql())
            .bind(filter.bought)
            .bind(filter.deleted)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count(&self, filter: GroceryFilter) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>(&count_sql())
            .bind(filter.bought)
            .bind(filter.deleted)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn update_name(&self, id: Uuid, name: Option<String>) -> Result<u64, RepositoryError> {
        let result =
            sqlx::query("UPDATE groceries SET name = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(name)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn set_bought_at(
        &self,
        id: Uuid,
        bought_at: Option<DateTime<Utc>>,
    ) -> Result<u64, RepositoryError> {
        let result =
            sqlx::query("UPDATE groceries SET bought_at = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(bought_at)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn set_deleted_at(
        &self,
        id: Uuid,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Result<u64, RepositoryError> {
        let result =
            sqlx::query("UPDATE groceries SET deleted_at = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(deleted_at)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
