use std::sync::Arc;

use crate::domain::a001_sales_order::repository::Dataset;

/// Router state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
