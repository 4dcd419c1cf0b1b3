use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use sift_core::{TermFreq, TermFreqIndex};
use sift_server::build_app;
use tower::ServiceExt;

fn tiny_index() -> TermFreqIndex {
    let mut index = TermFreqIndex::new();
    let a: TermFreq = [("alpha".to_string(), 2), ("beta".to_string(), 1)]
        .into_iter()
        .collect();
    let b: TermFreq = [("beta".to_string(), 1), ("gamma".to_string(), 1)]
        .into_iter()
        .collect();
    index.insert("gl4/a.xhtml".into(), a);
    index.insert("gl4/b.xhtml".into(), b);
    index
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let app = build_app(tiny_index()).unwrap();
    let resp = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn search_returns_ranked_results() {
    let (status, json) = get("/api/search?q=alpha").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["msg"], "Close match in 1 files");

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["document"], "gl4/a.xhtml");
    assert!(data[0]["score"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn ubiquitous_term_matches_no_files() {
    let (status, json) = get("/api/search?q=beta").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["msg"], "Close match in 0 files");
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn missing_query_param_is_a_client_error() {
    let (status, json) = get("/api/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["msg"], "q query param is required");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn empty_query_param_is_a_client_error() {
    let (status, _) = get("/api/search?q=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let app = build_app(tiny_index()).unwrap();
    let resp = app
        .oneshot(
            Request::post("/api/search?q=alpha")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["msg"], "invalid request method");
}

#[tokio::test]
async fn health_is_served() {
    let app = build_app(tiny_index()).unwrap();
    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn an_empty_index_is_refused_at_startup() {
    assert!(build_app(TermFreqIndex::new()).is_err());
}
