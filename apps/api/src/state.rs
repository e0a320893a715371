use std::sync::Arc;

use crate::store::{AnswerSource, AssessmentStore, CatalogSource, PgStore, UserStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub assessments: Arc<dyn AssessmentStore>,
    /// Catalog and answer seams feeding the recommendation service.
    pub catalog: Arc<dyn CatalogSource>,
    pub answers: Arc<dyn AnswerSource>,
}

impl AppState {
    /// Wires every store seam to the same PostgreSQL-backed store.
    pub fn from_pg(store: PgStore) -> Self {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            assessments: store.clone(),
            catalog: store.clone(),
            answers: store,
        }
    }
}
