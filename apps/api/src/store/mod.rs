//! Storage seams. Handlers and the recommendation service only see these
//! traits; `PgStore` is the production implementation.

pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::user::{NewUser, UserRow};
use crate::recommendation::models::{AnswerSet, CareerProfile};

pub use postgres::PgStore;

/// Source of the career catalog. May legitimately return an empty list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> anyhow::Result<Vec<CareerProfile>>;
}

/// Source of a user's most recent assessment answers.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// `Ok(None)` when the user has never submitted an assessment.
    async fn fetch_latest_answers(&self, user_id: &str) -> anyhow::Result<Option<AnswerSet>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError>;

    /// Fails with `AppError::Conflict` when the email is already registered.
    async fn insert_user(&self, user: NewUser) -> Result<(), AppError>;
}

#[async_trait]
pub trait AssessmentStore: Send + Sync {
    async fn insert_assessment(&self, user_id: &str, answers: &AnswerSet) -> Result<(), AppError>;
}
