pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::accounts::handlers as accounts;
use crate::assessment::handlers as assessment;
use crate::errors::AppError;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/register", post(accounts::handle_register))
        .route("/login", post(accounts::handle_login))
        // Assessment + recommendations
        .route(
            "/submit-assessment",
            post(assessment::handle_submit_assessment),
        )
        .route(
            "/recommend-career",
            get(recommendation::handle_recommend_career),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use chrono::Utc;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::models::user::{NewUser, UserRow};
    use crate::recommendation::models::{AnswerSet, CareerProfile};
    use crate::store::{AnswerSource, AssessmentStore, CatalogSource, UserStore};

    #[derive(Default)]
    struct MemoryStore {
        users: Mutex<Vec<UserRow>>,
        assessments: Mutex<Vec<(String, AnswerSet)>>,
        catalog: Vec<CareerProfile>,
    }

    #[async_trait]
    impl UserStore for MemoryStore {
        async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.email == email).cloned())
        }

        async fn insert_user(&self, user: NewUser) -> Result<(), AppError> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email == user.email) {
                return Err(AppError::Conflict("duplicate".to_string()));
            }
            users.push(UserRow {
                user_id: user.user_id,
                email: user.email,
                password_hash: user.password_hash,
                created_at: Utc::now(),
            });
            Ok(())
        }
    }

    #[async_trait]
    impl AssessmentStore for MemoryStore {
        async fn insert_assessment(
            &self,
            user_id: &str,
            answers: &AnswerSet,
        ) -> Result<(), AppError> {
            self.assessments
                .lock()
                .unwrap()
                .push((user_id.to_string(), answers.clone()));
            Ok(())
        }
    }

    #[async_trait]
    impl CatalogSource for MemoryStore {
        async fn fetch_catalog(&self) -> anyhow::Result<Vec<CareerProfile>> {
            Ok(self.catalog.clone())
        }
    }

    #[async_trait]
    impl AnswerSource for MemoryStore {
        async fn fetch_latest_answers(&self, user_id: &str) -> anyhow::Result<Option<AnswerSet>> {
            let assessments = self.assessments.lock().unwrap();
            Ok(assessments
                .iter()
                .rev()
                .find(|(id, _)| id == user_id)
                .map(|(_, answers)| answers.clone()))
        }
    }

    fn test_app() -> Router {
        let store = Arc::new(MemoryStore::default());
        build_router(AppState {
            users: store.clone(),
            assessments: store.clone(),
            catalog: store.clone(),
            answers: store,
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_home_and_health() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Career Guidance Backend API is running!");

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = send(&test_app(), Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let app = test_app();
        let creds = json!({"email": "ada@example.com", "password": "engine42"});

        let (status, registered) = send(&app, Method::POST, "/register", Some(creds.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(registered["message"], "User registered successfully");

        let (status, _) = send(&app, Method::POST, "/register", Some(creds.clone())).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, logged_in) = send(&app, Method::POST, "/login", Some(creds)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(logged_in["user_id"], registered["user_id"]);
    }

    #[tokio::test]
    async fn test_login_failures_are_401() {
        let app = test_app();
        let creds = json!({"email": "ada@example.com", "password": "engine42"});
        send(&app, Method::POST, "/register", Some(creds)).await;

        let wrong = json!({"email": "ada@example.com", "password": "engine43"});
        let (status, body) = send(&app, Method::POST, "/login", Some(wrong)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["message"], "Invalid email or password");

        let unknown = json!({"email": "bob@example.com", "password": "engine42"});
        let (status, _) = send(&app, Method::POST, "/login", Some(unknown)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_register_validation() {
        let app = test_app();
        for body in [
            json!({"email": "ada@example.com"}),
            json!({"email": "not-an-email", "password": "engine42"}),
            json!({"email": "ada@example.com", "password": "short"}),
        ] {
            let (status, response) = send(&app, Method::POST, "/register", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_incomplete_assessment_rejected() {
        let body = json!({"user_id": "u1", "answers": {"q1": "Math", "q2": "Science"}});
        let (status, _) = send(&test_app(), Method::POST, "/submit-assessment", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_mistyped_assessment_answers_are_validation_errors() {
        let body = json!({
            "user_id": "u1",
            "answers": {"q1": 1, "q2": "Science", "q3": "Dynamic", "q4": "No", "q5": "Structured", "q6": "X"}
        });
        let (status, response) =
            send(&test_app(), Method::POST, "/submit-assessment", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
        assert!(response["error"]["message"]
            .as_str()
            .unwrap()
            .contains("missing: q1"));
    }

    #[tokio::test]
    async fn test_whitespace_answer_is_accepted() {
        let body = json!({
            "user_id": "u1",
            "answers": {"q1": " ", "q2": "Science", "q3": "Dynamic", "q4": "No", "q5": "Structured", "q6": "X"}
        });
        let (status, _) = send(&test_app(), Method::POST, "/submit-assessment", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_malformed_bodies_are_validation_errors() {
        let app = test_app();
        let cases = [
            ("/register", Some(json!({"email": 5, "password": "engine42"}))),
            ("/login", Some(json!({"email": "ada@example.com", "password": false}))),
            ("/submit-assessment", Some(json!({"user_id": 7, "answers": {}}))),
            ("/register", None),
        ];
        for (uri, body) in cases {
            let (status, response) = send(&app, Method::POST, uri, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(response["error"]["code"], "VALIDATION_ERROR", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_guest_recommendations_use_fallback_by_salary() {
        let (status, body) = send(&test_app(), Method::GET, "/recommend-career", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_id"], "guest");

        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 15);
        assert_eq!(recs[0]["id"], "cp2");
        assert_eq!(recs[0]["score"], 0);
    }

    #[tokio::test]
    async fn test_submitted_assessment_personalises_recommendations() {
        let app = test_app();
        let answers = json!({
            "q1": "Arts",
            "q2": "Creative",
            "q3": "Dynamic",
            "q4": "No",
            "q5": "Hands-on",
            "q6": "Express creativity and design"
        });
        let (status, body) = send(
            &app,
            Method::POST,
            "/submit-assessment",
            Some(json!({"user_id": "u1", "answers": answers})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Assessment submitted successfully");

        let (status, body) = send(&app, Method::GET, "/recommend-career?user_id=u1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_id"], "u1");

        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 15);
        // UI/UX Designer: 3 + 3 + 2 + 1 + 3 + 5
        assert_eq!(recs[0]["id"], "cp3");
        assert_eq!(recs[0]["score"], 17);
        assert!(recs.iter().all(|r| r["score"].as_u64().unwrap() >= 1));
    }
}
