use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::recommendation::service::{recommend, RecommendationResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub user_id: Option<String>,
}

/// GET /recommend-career?user_id=...
///
/// Never fails: catalog and answer lookup problems degrade to the fallback
/// catalog and the unscored ordering.
pub async fn handle_recommend_career(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> Json<RecommendationResponse> {
    let response = recommend(
        state.catalog.as_ref(),
        state.answers.as_ref(),
        params.user_id.as_deref(),
    )
    .await;
    Json(response)
}
