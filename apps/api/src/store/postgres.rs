use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::AssessmentRow;
use crate::models::career::CareerPathRow;
use crate::models::user::{NewUser, UserRow};
use crate::recommendation::models::{AnswerSet, CareerProfile};
use crate::store::{AnswerSource, AssessmentStore, CatalogSource, UserStore};

/// PostgreSQL-backed implementation of every store trait.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogSource for PgStore {
    async fn fetch_catalog(&self) -> anyhow::Result<Vec<CareerProfile>> {
        let rows = sqlx::query_as::<_, CareerPathRow>(
            "SELECT * FROM career_paths ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to load career_paths")?;

        Ok(rows.into_iter().map(CareerProfile::from).collect())
    }
}

#[async_trait]
impl AnswerSource for PgStore {
    async fn fetch_latest_answers(&self, user_id: &str) -> anyhow::Result<Option<AnswerSet>> {
        let latest: Option<AssessmentRow> = sqlx::query_as(
            r#"
            SELECT * FROM assessments
            WHERE user_id = $1
            ORDER BY submitted_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("failed to load latest assessment for user {user_id}"))?;

        Ok(latest.map(|row| AnswerSet::from_json_lenient(&row.answers)))
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1 LIMIT 1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn insert_user(&self, user: NewUser) -> Result<(), AppError> {
        let result = sqlx::query(
            "INSERT INTO users (user_id, email, password_hash) VALUES ($1, $2, $3)",
        )
        .bind(user.user_id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                info!("Registered user {}", user.user_id);
                Ok(())
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl AssessmentStore for PgStore {
    async fn insert_assessment(&self, user_id: &str, answers: &AnswerSet) -> Result<(), AppError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO assessments (id, user_id, answers) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(user_id)
            .bind(answers.to_json())
            .execute(&self.pool)
            .await?;

        info!("Stored assessment {id} for user {user_id}");
        Ok(())
    }
}
