//! `HttpSearchClient` against a real HTTP server on an ephemeral port.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use livesearch::{HttpSearchClient, LiveSearchError, SearchBackend, SearchQuery};
use reqwest::Url;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
struct SearchParams {
    q: String,
}

/// Echoes the decoded query back as the name of a single user.
async fn echo(Query(params): Query<SearchParams>) -> Json<Value> {
    Json(json!([{
        "name": params.q,
        "email": "echo@example.com",
        "_id": "65f0c1",
        "age": 36,
        "__v": 0
    }]))
}

async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}

async fn client_for(router: Router) -> HttpSearchClient {
    HttpSearchClient::new(&serve(router).await).unwrap()
}

#[tokio::test]
async fn query_arrives_decoded_and_users_are_parsed() {
    let client = client_for(Router::new().route("/api/search", get(echo))).await;

    let users = client.search(&SearchQuery::from_raw(" a b&c=d ü ")).await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "a b&c=d ü");
    assert_eq!(users[0].edit_path(), "/edit/65f0c1");
}

#[tokio::test]
async fn empty_array_is_an_empty_result() {
    let client = client_for(Router::new().route("/api/search", get(|| async { Json(json!([])) }))).await;

    let users = client.search(&SearchQuery::from_raw("zz")).await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn null_body_is_an_empty_result() {
    let client = client_for(Router::new().route("/api/search", get(|| async { Json(Value::Null) }))).await;

    let users = client.search(&SearchQuery::from_raw("zz")).await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn server_error_is_a_failed_search() {
    let router = Router::new().route(
        "/api/search",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
    );
    let client = client_for(router).await;

    match client.search(&SearchQuery::from_raw("ab")).await {
        Err(LiveSearchError::SearchFailed { query, source }) => {
            assert_eq!(query, "ab");
            assert_eq!(source.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        }
        other => panic!("expected SearchFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_failed_search() {
    let router = Router::new().route("/api/search", get(|| async { "<html>oops</html>" }));
    let client = client_for(router).await;

    let err = client.search(&SearchQuery::from_raw("ab")).await.unwrap_err();
    assert!(matches!(err, LiveSearchError::SearchFailed { .. }));
}

#[tokio::test]
async fn wrong_shape_is_a_failed_search() {
    let router = Router::new().route(
        "/api/search",
        get(|| async { Json(json!({ "error": "Invalid query" })) }),
    );
    let client = client_for(router).await;

    assert!(client.search(&SearchQuery::from_raw("ab")).await.is_err());
}

#[tokio::test]
async fn unreachable_server_is_a_failed_search() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpSearchClient::new(&Url::parse(&format!("http://{addr}")).unwrap()).unwrap();
    let err = client.search(&SearchQuery::from_raw("ab")).await.unwrap_err();
    assert!(matches!(err, LiveSearchError::SearchFailed { .. }));
}
