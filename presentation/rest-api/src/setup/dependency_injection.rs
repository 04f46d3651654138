use std::sync::Arc;

use logger::TracingLogger;
use persistence::grocery::repository::GroceryRepositoryPostgres;

use business::application::grocery::facade::GroceryQueryFacadeImpl;
use business::domain::grocery::facade::GroceryQueryFacade;

use crate::api::grocery::routes::GroceryApi;
use crate::api::health::routes::HealthApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub grocery_api: GroceryApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let grocery_repository = Arc::new(GroceryRepositoryPostgres::new(pool.clone()));

        let grocery_facade: Arc<dyn GroceryQueryFacade> = Arc::new(GroceryQueryFacadeImpl {
            repository: grocery_repository,
            logger,
        });

        Self {
            health_api: HealthApi::new(pool),
            grocery_api: GroceryApi::new(grocery_facade),
        }
    }
}
