use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use business::application::grocery::facade::GroceryQueryFacadeImpl;
use business::domain::errors::RepositoryError;
use business::domain::grocery::facade::{
    CreateGroceryParams, GroceryQueryFacade, ListGroceriesParams, MarkBoughtParams,
    ToDeleteParams, UpdateGroceryParams,
};
use business::domain::grocery::model::Grocery;
use business::domain::grocery::pagination::PageRequest;
use business::domain::grocery::repository::GroceryRepository;
use business::domain::grocery::value_objects::GroceryFilter;
use business::domain::logger::Logger;

/// Keeps rows in insertion order and mimics the SQL predicates.
#[derive(Default)]
struct InMemoryGroceryRepository {
    rows: Mutex<Vec<Grocery>>,
}

impl InMemoryGroceryRepository {
    fn get(&self, id: Uuid) -> Option<Grocery> {
        self.rows.lock().unwrap().iter().find(|g| g.id == id).cloned()
    }

    fn matching(&self, filter: GroceryFilter) -> Vec<Grocery> {
        // Newest first, like the SQL adapter.
        self.rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|g| g.is_bought() == filter.bought && g.is_deleted() == filter.deleted)
            .cloned()
            .collect()
    }

    fn modify(&self, id: Uuid, change: impl FnOnce(&mut Grocery)) -> u64 {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|g| g.id == id) {
            Some(row) => {
                change(row);
                row.updated_at = Utc::now();
                1
            }
            None => 0,
        }
    }
}

#[async_trait]
impl GroceryRepository for InMemoryGroceryRepository {
    async fn insert(&self, grocery: &Grocery) -> Result<Grocery, RepositoryError> {
        self.rows.lock().unwrap().push(grocery.clone());
        Ok(grocery.clone())
    }

    async fn find_page(
        &self,
        filter: GroceryFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Grocery>, RepositoryError> {
        if limit < 0 || offset < 0 {
            return Err(RepositoryError::database_error("negative LIMIT or OFFSET"));
        }
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: GroceryFilter) -> Result<i64, RepositoryError> {
        Ok(self.matching(filter).len() as i64)
    }

    async fn update_name(&self, id: Uuid, name: Option<String>) -> Result<u64, RepositoryError> {
        Ok(self.modify(id, |g| g.name = name))
    }

    async fn set_bought_at(
        &self,
        id: Uuid,
        bought_at: Option<DateTime<Utc>>,
    ) -> Result<u64, RepositoryError> {
        Ok(self.modify(id, |g| g.bought_at = bought_at))
    }

    async fn set_deleted_at(
        &self,
        id: Uuid,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Result<u64, RepositoryError> {
        Ok(self.modify(id, |g| g.deleted_at = deleted_at))
    }
}

struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _label: &str, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

fn setup() -> (Arc<InMemoryGroceryRepository>, GroceryQueryFacadeImpl) {
    let repository = Arc::new(InMemoryGroceryRepository::default());
    let facade = GroceryQueryFacadeImpl {
        repository: repository.clone(),
        logger: Arc::new(SilentLogger),
    };
    (repository, facade)
}

async fn create(facade: &GroceryQueryFacadeImpl, name: &str) -> Grocery {
    facade
        .create(CreateGroceryParams {
            name: name.to_string(),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn should_read_back_created_name() {
    let (repository, facade) = setup();

    let created = create(&facade, "Tomatoes").await;

    let stored = repository.get(created.id).unwrap();
    assert_eq!(stored.name.as_deref(), Some("Tomatoes"));
}

#[tokio::test]
async fn should_read_back_empty_name_as_no_value() {
    let (repository, facade) = setup();

    let created = create(&facade, "").await;

    let stored = repository.get(created.id).unwrap();
    assert!(stored.name.is_none());
}

#[tokio::test]
async fn should_toggle_between_bought_and_to_buy() {
    let (repository, facade) = setup();
    let created = create(&facade, "Coffee").await;

    facade
        .mark_bought(MarkBoughtParams {
            id: created.id,
            bought_at: Some(Utc::now() + Duration::hours(2)),
        })
        .await
        .unwrap();
    assert!(repository.get(created.id).unwrap().is_bought());

    facade
        .mark_bought(MarkBoughtParams {
            id: created.id,
            bought_at: None,
        })
        .await
        .unwrap();
    assert!(!repository.get(created.id).unwrap().is_bought());
}

#[tokio::test]
async fn should_restore_without_touching_name_or_bought_at() {
    let (repository, facade) = setup();
    let created = create(&facade, "Rice").await;
    let bought_at = Utc::now();
    facade
        .mark_bought(MarkBoughtParams {
            id: created.id,
            bought_at: Some(bought_at),
        })
        .await
        .unwrap();

    facade
        .to_delete(ToDeleteParams {
            id: created.id,
            deleted_at: None,
        })
        .await
        .unwrap();
    assert!(repository.get(created.id).unwrap().is_deleted());

    facade.to_restore(created.id).await.unwrap();

    let restored = repository.get(created.id).unwrap();
    assert!(restored.deleted_at.is_none());
    assert_eq!(restored.name.as_deref(), Some("Rice"));
    assert_eq!(restored.bought_at, Some(bought_at));
}

#[tokio::test]
async fn should_rename_only_the_name() {
    let (repository, facade) = setup();
    let created = create(&facade, "Milk").await;

    facade
        .update(UpdateGroceryParams {
            id: created.id,
            name: "Oat Milk".to_string(),
        })
        .await
        .unwrap();

    let updated = repository.get(created.id).unwrap();
    assert_eq!(updated.name.as_deref(), Some("Oat Milk"));
    assert_eq!(updated.id, created.id);
    assert!(updated.bought_at.is_none());
}

#[tokio::test]
async fn should_succeed_for_unknown_id() {
    let (_, facade) = setup();

    let result = facade.to_restore(Uuid::new_v4()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn should_list_only_bought_active_items_with_full_count() {
    let (_, facade) = setup();
    let mut bought_active = Vec::new();
    for i in 0..5 {
        let item = create(&facade, &format!("bought-{i}")).await;
        facade
            .mark_bought(MarkBoughtParams {
                id: item.id,
                bought_at: Some(Utc::now()),
            })
            .await
            .unwrap();
        bought_active.push(item.id);
    }
    create(&facade, "to-buy").await;
    let deleted = create(&facade, "bought-deleted").await;
    facade
        .mark_bought(MarkBoughtParams {
            id: deleted.id,
            bought_at: Some(Utc::now()),
        })
        .await
        .unwrap();
    facade
        .to_delete(ToDeleteParams {
            id: deleted.id,
            deleted_at: None,
        })
        .await
        .unwrap();

    let filter = GroceryFilter::resolve(Some("bought"), Some("false")).unwrap();
    let page = facade
        .list(ListGroceriesParams {
            filter,
            page: PageRequest::resolve(Some("2"), Some("2")),
        })
        .await
        .unwrap();

    assert_eq!(page.total_count, 5);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.max_page(), 3);
    for item in &page.items {
        assert!(item.is_bought());
        assert!(!item.is_deleted());
        assert!(bought_active.contains(&item.id));
    }
}

#[tokio::test]
async fn should_surface_negative_offset_as_storage_error() {
    let (_, facade) = setup();

    let result = facade
        .list(ListGroceriesParams {
            filter: GroceryFilter::resolve(Some("to-buy"), Some("false")).unwrap(),
            page: PageRequest::resolve(Some("0"), None),
        })
        .await;

    assert!(result.is_err());
}
