use super::model::Grocery;
use super::pagination::PageRequest;

/// One page of a filtered listing plus the size of the whole result set.
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryPage {
    pub items: Vec<Grocery>,
    pub total_count: i64,
    pub request: PageRequest,
}

impl GroceryPage {
    pub fn new(items: Vec<Grocery>, total_count: i64, request: PageRequest) -> Self {
        Self {
            items,
            total_count,
            request,
        }
    }

    pub fn page(&self) -> i64 {
        self.request.page
    }

    pub fn results_per_page(&self) -> i64 {
        self.request.limit
    }

    pub fn max_page(&self) -> i64 {
        self.request.max_page(self.total_count)
    }
}
