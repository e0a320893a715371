use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::recommendation::models::AnswerSet;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    /// Kept loose so mistyped answers surface as missing questions.
    #[serde(default)]
    pub answers: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SubmitAssessmentResponse {
    pub message: String,
}

/// Checks the request carries a user and an answer for every question.
pub fn validate_submission(req: SubmitAssessmentRequest) -> Result<(String, AnswerSet), AppError> {
    let user_id = req.user_id.filter(|id| !id.trim().is_empty());
    let answers = req
        .answers
        .map(|a| AnswerSet::from_json_lenient(&a))
        .filter(|a| !a.is_empty());
    let (Some(user_id), Some(answers)) = (user_id, answers) else {
        return Err(AppError::Validation(
            "User ID and answers are required".to_string(),
        ));
    };

    let unanswered = answers.unanswered();
    if !unanswered.is_empty() {
        return Err(AppError::Validation(format!(
            "All assessment questions must be answered (missing: {})",
            unanswered.join(", ")
        )));
    }

    Ok((user_id, answers))
}

/// POST /submit-assessment
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    payload: Result<Json<SubmitAssessmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitAssessmentResponse>), AppError> {
    let Json(req) = payload?;
    let (user_id, answers) = validate_submission(req)?;

    state.assessments.insert_assessment(&user_id, &answers).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitAssessmentResponse {
            message: "Assessment submitted successfully".to_string(),
        }),
    ))
}
