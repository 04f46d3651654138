use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::grocery::errors::GroceryError;
use crate::domain::grocery::facade::{
    CreateGroceryParams, GroceryQueryFacade, ListGroceriesParams, MarkBoughtParams,
    ToDeleteParams, UpdateGroceryParams,
};
use crate::domain::grocery::model::Grocery;
use crate::domain::grocery::nullable::{nullable_text, nullable_timestamp};
use crate::domain::grocery::page::GroceryPage;
use crate::domain::grocery::repository::GroceryRepository;
use crate::domain::grocery::value_objects::GroceryFilter;
use crate::domain::logger::Logger;

const CREATE_LABEL: &str = "create_grocery";
const LIST_LABEL: &str = "get_groceries";
const COUNT_LABEL: &str = "count_groceries";
const UPDATE_LABEL: &str = "update_grocery";
const TO_BUY_LABEL: &str = "to_buy_grocery";
const TO_DELETE_LABEL: &str = "to_delete_grocery";
const TO_RESTORE_LABEL: &str = "to_restore_grocery";

pub struct GroceryQueryFacadeImpl {
    pub repository: Arc<dyn GroceryRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GroceryQueryFacadeImpl {
    fn log_failure(&self, label: &str, err: &RepositoryError) {
        self.logger.error(label, &err.to_string());
    }

    fn report_affected(&self, label: &str, id: Uuid, rows: u64) {
        if rows == 0 {
            // Unknown ids are not an error; leave a trace for whoever asks why
            // nothing changed.
            self.logger
                .warn(&format!("{}: no grocery matched id {}", label, id));
        } else {
            self.logger.info(&format!("{}: grocery {} updated", label, id));
        }
    }
}

#[async_trait]
impl GroceryQueryFacade for GroceryQueryFacadeImpl {
    async fn create(&self, params: CreateGroceryParams) -> Result<Grocery, GroceryError> {
        let grocery = Grocery::new(nullable_text(&params.name));
        self.logger
            .info(&format!("Creating grocery: {}", grocery.id));

        let created = self
            .repository
            .insert(&grocery)
            .await
            .inspect_err(|e| self.log_failure(CREATE_LABEL, e))?;

        self.logger
            .info(&format!("Grocery created: {}", created.id));
        Ok(created)
    }

    async fn list(&self, params: ListGroceriesParams) -> Result<GroceryPage, GroceryError> {
        let ListGroceriesParams { filter, page } = params;
        self.logger.info(&format!(
            "Getting groceries: bought={} deleted={} page={} limit={}",
            filter.bought, filter.deleted, page.page, page.limit
        ));

        let items = self
            .repository
            .find_page(filter, page.limit, page.offset)
            .await
            .inspect_err(|e| self.log_failure(LIST_LABEL, e))?;
        let total_count = self.count(filter).await?;

        self.logger.info(&format!(
            "Retrieved {} of {} groceries",
            items.len(),
            total_count
        ));
        Ok(GroceryPage::new(items, total_count, page))
    }

    async fn count(&self, filter: GroceryFilter) -> Result<i64, GroceryError> {
        self.repository.count(filter).await.map_err(|e| {
            self.log_failure(COUNT_LABEL, &e);
            GroceryError::CountFailed(e)
        })
    }

    async fn update(&self, params: UpdateGroceryParams) -> Result<(), GroceryError> {
        self.logger
            .info(&format!("Updating grocery: {}", params.id));

        let rows = self
            .repository
            .update_name(params.id, nullable_text(&params.name))
            .await
            .inspect_err(|e| self.log_failure(UPDATE_LABEL, e))?;

        self.report_affected(UPDATE_LABEL, params.id, rows);
        Ok(())
    }

    async fn mark_bought(&self, params: MarkBoughtParams) -> Result<(), GroceryError> {
        let bought_at = nullable_timestamp(params.bought_at);
        self.logger.info(&format!(
            "Setting bought status of grocery {}: {}",
            params.id,
            if bought_at.is_some() { "bought" } else { "to-buy" }
        ));

        let rows = self
            .repository
            .set_bought_at(params.id, bought_at)
            .await
            .inspect_err(|e| self.log_failure(TO_BUY_LABEL, e))?;

        self.report_affected(TO_BUY_LABEL, params.id, rows);
        Ok(())
    }

    async fn to_delete(&self, params: ToDeleteParams) -> Result<(), GroceryError> {
        let deleted_at = nullable_timestamp(params.deleted_at).unwrap_or_else(Utc::now);
        self.logger
            .info(&format!("Deleting grocery: {}", params.id));

        let rows = self
            .repository
            .set_deleted_at(params.id, Some(deleted_at))
            .await
            .inspect_err(|e| self.log_failure(TO_DELETE_LABEL, e))?;

        self.report_affected(TO_DELETE_LABEL, params.id, rows);
        Ok(())
    }

    async fn to_restore(&self, id: Uuid) -> Result<(), GroceryError> {
        self.logger.info(&format!("Restoring grocery: {}", id));

        let rows = self
            .repository
            .set_deleted_at(id, None)
            .await
            .inspect_err(|e| self.log_failure(TO_RESTORE_LABEL, e))?;

        self.report_affected(TO_RESTORE_LABEL, id, rows);
        Ok(())
    }
}
