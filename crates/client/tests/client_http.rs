//! Client tests against a real in-process HTTP server.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use sitegen_client::{ApiClient, ClientError};
use std::sync::{Arc, Mutex};

type Recorded = Arc<Mutex<Vec<Value>>>;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn generation_body() -> Value {
    json!({
        "plan": "plan",
        "copywriting": "copy",
        "code": "code",
        "final_code": "final",
        "improvements": ["one"],
        "summary": "done"
    })
}

#[tokio::test]
async fn generate_issues_exactly_one_post_with_prompt_body() {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/api/v1/ai/generate",
            post(|State(recorded): State<Recorded>, Json(body): Json<Value>| async move {
                recorded.lock().unwrap().push(body);
                Json(generation_body())
            }),
        )
        .with_state(recorded.clone());

    let base_url = serve(app).await;
    let client = ApiClient::new(base_url).unwrap();

    let response = client.generate_website("make a blog").await.unwrap();
    assert_eq!(response.plan, "plan");
    assert_eq!(response.improvements, vec!["one"]);

    let seen = recorded.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], json!({"prompt": "make a blog"}));
}

#[tokio::test]
async fn health_check_returns_decoded_json_unchanged() {
    let app = Router::new().route(
        "/api/v1/ai/health",
        get(|| async { Json(json!({"status": "ok", "service": "ai"})) }),
    );

    let base_url = serve(app).await;
    let client = ApiClient::new(base_url).unwrap();

    let status = client.health_check().await.unwrap();
    assert_eq!(status.status, "ok");
    assert_eq!(status.service, "ai");
}

#[tokio::test]
async fn non_2xx_response_becomes_http_error_with_status_and_body() {
    let app = Router::new().route(
        "/api/v1/ai/generate",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "generation blew up") }),
    );

    let base_url = serve(app).await;
    let client = ApiClient::new(base_url).unwrap();

    let err = client.generate_website("make a blog").await.unwrap_err();
    match err {
        ClientError::Http { status, body } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "generation blew up");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_is_a_network_error() {
    // Grab a free port, then close the listener so nothing is on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{addr}")).unwrap();
    let err = client.health_check().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let app = Router::new().route("/api/v1/ai/health", get(|| async { "not json" }));

    let base_url = serve(app).await;
    let client = ApiClient::new(base_url).unwrap();

    let err = client.health_check().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}
