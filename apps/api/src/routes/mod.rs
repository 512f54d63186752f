pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::errors::AppError;
use crate::wizard::handlers as wizard;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/evaluate", post(ats::handle_evaluate))
        .route("/api/v1/cv/demo", get(ats::handle_demo))
        // Wizard API
        .route("/api/v1/wizard/steps", get(wizard::handle_list_steps))
        .route("/api/v1/wizard/navigate", post(wizard::handle_navigate))
        .fallback(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = build_router()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_evaluate_empty_cv() {
        let (status, body) = send(Method::POST, "/api/v1/ats/evaluate", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["band"], "poor");
        assert_eq!(body["counts"]["error"], 2);
        assert_eq!(body["counts"]["warning"], 9);
        assert_eq!(body["tips"][0]["id"], "personal-name");
        assert_eq!(body["tips"][0]["messageKey"], "ats.noName");
        assert_eq!(body["tips"][0]["targetSection"], "personal");
        assert_eq!(body["tips"][0]["targetStep"], 0);
    }

    #[tokio::test]
    async fn test_evaluate_routes_languages_to_courses_step() {
        let (_, body) = send(Method::POST, "/api/v1/ats/evaluate", Some(json!({}))).await;
        let tips = body["tips"].as_array().unwrap();
        let languages = tips
            .iter()
            .find(|t| t["id"] == "languages-missing")
            .unwrap();
        assert_eq!(languages["targetStep"], 4);
    }

    #[tokio::test]
    async fn test_evaluate_export_envelope() {
        let payload = json!({
            "version": "1.0",
            "exportedAt": "2024-05-01T10:00:00Z",
            "cv": {
                "personal": {
                    "name": "Anna", "email": "a@b.com", "phone": "123",
                    "location": "Kraków", "photo": "data:image/png;base64,AAAA"
                },
                "education": [{ "school": "UW" }],
                "experience": [
                    { "startDate": "2020", "endDate": "2022", "duties": ["a"] },
                    { "startDate": "2022", "endDate": "obecnie", "duties": ["b"] }
                ],
                "skills": { "hard": ["Rust", "Go", "SQL", "Git", "Linux"], "soft": ["Calm"] },
                "courses": ["AWS"],
                "languages": [{ "name": "English", "level": "C1" }]
            },
            "selectedTemplate": "minimal",
            "language": "en"
        });
        let (status, body) = send(Method::POST, "/api/v1/ats/evaluate", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 100);
        assert_eq!(body["band"], "good");
        assert_eq!(body["counts"]["warning"], 0);
        let tips = body["tips"].as_array().unwrap();
        assert!(tips.iter().all(|t| t.get("targetStep").is_none()));
    }

    #[tokio::test]
    async fn test_evaluate_envelope_with_loose_timestamp_keeps_cv() {
        let payload = json!({
            "version": "1.0",
            "exportedAt": "2024-05-01 10:00",
            "cv": { "personal": { "name": "Anna", "email": "a@b.com" } }
        });
        let (status, body) = send(Method::POST, "/api/v1/ats/evaluate", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        // name and email present: 100 - 10 - 5 - 5 - 15 - 10 - 10 - 5 - 5 - 5
        assert_eq!(body["score"], 30);
        assert_eq!(body["counts"]["error"], 0);
    }

    #[tokio::test]
    async fn test_evaluate_rejects_malformed_envelope() {
        let payload = json!({
            "cv": { "personal": { "name": "Anna" } },
            "selectedTemplate": "neon"
        });
        let (status, _) = send(Method::POST, "/api/v1/ats/evaluate", Some(payload)).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_evaluate_summary_lists_ids_once() {
        let (_, body) = send(Method::POST, "/api/v1/ats/evaluate", Some(json!({}))).await;
        assert_eq!(
            body["summary"]["errors"],
            json!(["personal-name", "personal-email"])
        );
        assert_eq!(body["summary"]["successes"], json!([]));
    }

    #[tokio::test]
    async fn test_evaluate_rejects_non_object() {
        let (status, _) = send(Method::POST, "/api/v1/ats/evaluate", Some(json!(42))).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_demo_scores_ninety_five() {
        let (status, demo) = send(Method::GET, "/api/v1/cv/demo", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(demo["version"], "1.0");
        // Demo has everything but a photo.
        let (_, body) = send(Method::POST, "/api/v1/ats/evaluate", Some(demo)).await;
        assert_eq!(body["score"], 95);
        assert_eq!(body["counts"]["warning"], 1);
    }

    #[tokio::test]
    async fn test_wizard_steps() {
        let (status, body) = send(Method::GET, "/api/v1/wizard/steps", None).await;
        assert_eq!(status, StatusCode::OK);
        let steps = body.as_array().unwrap();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[4]["key"], "courses");
    }

    #[tokio::test]
    async fn test_wizard_next_from_last_finishes() {
        let req = json!({ "current": 5, "action": "next" });
        let (status, body) = send(Method::POST, "/api/v1/wizard/navigate", Some(req)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["finished"], true);
        assert_eq!(body["step"], "template");
        assert_eq!(body["isLast"], true);
    }

    #[tokio::test]
    async fn test_wizard_section_jump() {
        let req = json!({ "current": 0, "action": { "section": "languages" } });
        let (_, body) = send(Method::POST, "/api/v1/wizard/navigate", Some(req)).await;
        assert_eq!(body["index"], 4);
        assert_eq!(body["finished"], false);
    }

    #[tokio::test]
    async fn test_wizard_go_to_out_of_range() {
        let req = json!({ "current": 1, "action": { "goTo": 9 } });
        let (status, body) = send(Method::POST, "/api/v1/wizard/navigate", Some(req)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = send(Method::GET, "/api/v1/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
