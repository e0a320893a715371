//! Request-level recommendation flow: catalog fallback policy, answer
//! lookup, and the unpersonalised ordering used for guests.

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::recommendation::fallback::fallback_catalog;
use crate::recommendation::models::{AnswerSet, CareerProfile, ScoredProfile};
use crate::recommendation::scoring::score_and_rank;
use crate::store::{AnswerSource, CatalogSource};

/// Echoed as `user_id` when the request carries no user.
pub const GUEST_USER: &str = "guest";

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub user_id: String,
    pub recommendations: Vec<ScoredProfile>,
}

/// Loads the stored catalog, substituting the built-in one when the store is
/// empty or fails.
pub async fn load_catalog(source: &dyn CatalogSource) -> Vec<CareerProfile> {
    match source.fetch_catalog().await {
        Ok(catalog) if catalog.is_empty() => {
            debug!("Stored catalog is empty, using fallback catalog");
            fallback_catalog()
        }
        Ok(catalog) => {
            debug!("Fetched {} career paths", catalog.len());
            catalog
        }
        Err(e) => {
            error!("Failed to fetch career catalog: {e:#}. Using fallback catalog");
            fallback_catalog()
        }
    }
}

/// Latest answers for `user_id`. A missing user, a user without an
/// assessment and a failed lookup all produce an empty set.
pub async fn load_answers(source: &dyn AnswerSource, user_id: Option<&str>) -> AnswerSet {
    let Some(user_id) = user_id else {
        return AnswerSet::new();
    };

    match source.fetch_latest_answers(user_id).await {
        Ok(Some(answers)) => answers,
        Ok(None) => {
            debug!("No assessment found for user {user_id}");
            AnswerSet::new()
        }
        Err(e) => {
            warn!("Could not fetch assessment for user {user_id}: {e:#}");
            AnswerSet::new()
        }
    }
}

/// Unscored catalog ordered by salary, highest first. Equal salaries keep
/// catalog order.
pub fn rank_by_salary(catalog: &[CareerProfile]) -> Vec<ScoredProfile> {
    let mut general = score_and_rank(catalog, &AnswerSet::new());
    general.sort_by(|a, b| {
        b.profile
            .average_salary_usd
            .cmp(&a.profile.average_salary_usd)
    });
    general
}

pub async fn recommend(
    catalog_source: &dyn CatalogSource,
    answer_source: &dyn AnswerSource,
    user_id: Option<&str>,
) -> RecommendationResponse {
    let user_id = user_id.map(str::trim).filter(|id| !id.is_empty());

    let catalog = load_catalog(catalog_source).await;
    let answers = load_answers(answer_source, user_id).await;

    let recommendations = if answers.is_empty() {
        debug!("No answers to score, returning general career paths");
        rank_by_salary(&catalog)
    } else {
        debug!(
            "Scoring {} career paths for user {}",
            catalog.len(),
            user_id.unwrap_or(GUEST_USER)
        );
        score_and_rank(&catalog, &answers)
    };

    RecommendationResponse {
        user_id: user_id.unwrap_or(GUEST_USER).to_string(),
        recommendations,
    }
}
