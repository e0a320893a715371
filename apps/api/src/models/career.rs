use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::recommendation::models::CareerProfile;

/// A stored catalog row. Array columns are nullable so hand-edited rows
/// with missing data still load.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerPathRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub skills_needed: Option<Vec<String>>,
    pub average_salary_usd: i64,
    pub interests: Option<Vec<String>>,
    pub work_environment: Option<Vec<String>>,
    pub impact_areas: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl From<CareerPathRow> for CareerProfile {
    fn from(row: CareerPathRow) -> Self {
        CareerProfile {
            id: row.id,
            name: row.name,
            description: row.description,
            skills_needed: row.skills_needed.unwrap_or_default(),
            average_salary_usd: u64::try_from(row.average_salary_usd).unwrap_or(0),
            interests: row.interests.unwrap_or_default(),
            work_environment: row.work_environment.unwrap_or_default(),
            impact_areas: row.impact_areas,
        }
    }
}
