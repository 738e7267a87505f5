pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate extraction
        .route(
            "/api/v1/candidates/extract",
            post(extraction::handle_extract),
        )
        .route("/api/v1/candidates/upload", post(extraction::handle_upload))
        // Matching
        .route("/api/v1/matches/score", post(matching::handle_score))
        .route("/api/v1/matches/rank", post(matching::handle_rank))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config::from_lookup(|_| None).unwrap();
        build_router(AppState::from_config(config).unwrap())
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn opening_json() -> Value {
        json!({
            "id": "JOB_001",
            "title": "Data Scientist Senior",
            "required_skills": ["python", "machine learning", "sql"],
            "min_experience_years": 5.0,
            "location": "paris",
            "remote_allowed": true
        })
    }

    #[tokio::test]
    async fn test_health_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_extract_builds_candidate() {
        let (status, body) = post_json(
            app(),
            "/api/v1/candidates/extract",
            json!({
                "id": "CAND_3",
                "text": "Lead Data Engineer. 10 ans d'expérience. Java, Python, SQL, AWS. Basé à Lyon."
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "CAND_3");
        assert_eq!(body["experience_years"], 10.0);
        assert_eq!(body["location"], "lyon");
        assert_eq!(body["skills"], json!(["aws", "java", "python", "sql"]));
    }

    #[tokio::test]
    async fn test_score_endpoint_perfect_match() {
        let (status, body) = post_json(
            app(),
            "/api/v1/matches/score",
            json!({
                "candidate": {
                    "id": "C1",
                    "name": "Alice",
                    "skills": ["Python", "SQL", "Machine Learning"],
                    "experience_years": 6.0,
                    "location": "paris"
                },
                "opening": opening_json()
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 100.0);
        assert_eq!(body["explanation"], "Score: 100.00/100. Excellent match.");
    }

    #[tokio::test]
    async fn test_rank_endpoint_orders_and_truncates() {
        let (status, body) = post_json(
            app(),
            "/api/v1/matches/rank",
            json!({
                "opening": opening_json(),
                "candidates": [
                    {"id": "JUNIOR", "skills": ["python"], "experience_years": 2.0},
                    {"id": "SENIOR", "skills": ["python", "sql", "machine learning"], "experience_years": 8.0}
                ],
                "top_k": 1
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["opening_id"], "JOB_001");
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["candidate_id"], "SENIOR");
    }

    #[tokio::test]
    async fn test_rank_negative_top_k_is_empty() {
        let (status, body) = post_json(
            app(),
            "/api/v1/matches/rank",
            json!({
                "opening": opening_json(),
                "candidates": [{"id": "A", "experience_years": 1.0}],
                "top_k": -3
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["results"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_experience_is_invalid_record() {
        let (status, body) = post_json(
            app(),
            "/api/v1/matches/rank",
            json!({
                "opening": opening_json(),
                "candidates": [{"id": "BAD", "experience_years": -1.0}]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_RECORD");
    }

    #[tokio::test]
    async fn test_incomplete_weights_is_invalid_configuration() {
        let (status, body) = post_json(
            app(),
            "/api/v1/matches/score",
            json!({
                "candidate": {"id": "C1", "experience_years": 1.0},
                "opening": opening_json(),
                "weights": {"skills": 0.5, "experience": 0.5}
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_CONFIGURATION");
    }

    #[tokio::test]
    async fn test_upload_partial_success() {
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"cv.txt\"\r\nContent-Type: text/plain\r\n\r\nPython et SQL, 4 years, remote\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"cv.docx\"\r\nContent-Type: application/octet-stream\r\n\r\nPK\r\n\
             --{b}--\r\n",
            b = boundary
        );

        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/candidates/upload")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["candidates"].as_array().unwrap().len(), 1);
        assert_eq!(body["candidates"][0]["location"], "remote");
        assert_eq!(body["rejected"][0]["file_name"], "cv.docx");
    }
}
