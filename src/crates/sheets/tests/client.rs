// Integration tests for the Sheets client against an in-process fake endpoint

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use sheets::{SheetsClient, SheetsConfig, SheetsError, ValuesSource};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

const VALUES_ROUTE: &str = "/v4/spreadsheets/:id/values/:range";

/// Requests seen by the fake endpoint: (sheet id, range, key)
#[derive(Clone, Default)]
struct Seen {
    requests: Arc<Mutex<Vec<(String, String, Option<String>)>>>,
}

/// Serve `router` on an ephemeral port and return its base URL
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str) -> SheetsClient {
    let config = SheetsConfig::new("test-key", "sheet-123", "dashboard!A1:E24").with_base_url(base_url);
    SheetsClient::new(config).unwrap()
}

async fn club_values(
    Path((id, range)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    State(seen): State<Seen>,
) -> Json<Value> {
    seen.requests
        .lock()
        .unwrap()
        .push((id, range.clone(), query.get("key").cloned()));

    Json(json!({
        "range": range,
        "majorDimension": "ROWS",
        "values": [
            ["Club_name", "จำนวนที่รับ", "Club_regis", "Club_remain"],
            ["Art", "30", "28", "2"],
            ["Band", "40", "12", "28"],
            ["Chess", "20"]
        ]
    }))
}

#[tokio::test]
async fn test_fetch_table_success() {
    let seen = Seen::default();
    let router = Router::new()
        .route(VALUES_ROUTE, get(club_values))
        .with_state(seen.clone());
    let base_url = serve(router).await;

    let table = client(&base_url).fetch_table().await.unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.headers()[1], "จำนวนที่รับ");

    let art = &table.records()[0];
    assert_eq!(art.get("Club_name"), Some("Art"));
    assert_eq!(art.number("จำนวนที่รับ"), 30);
    assert_eq!(art.number("Club_regis"), 28);

    let chess = &table.records()[2];
    assert!(chess.is_absent("Club_regis"));
    assert_eq!(chess.number("Club_regis"), 0);

    let requests = seen.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "sheet-123");
    assert_eq!(requests[0].1, "dashboard!A1:E24");
    assert_eq!(requests[0].2.as_deref(), Some("test-key"));
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let router = Router::new().route(
        VALUES_ROUTE,
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "backend unavailable") }),
    );
    let base_url = serve(router).await;

    let err = client(&base_url).fetch_table().await.unwrap_err();

    match &err {
        SheetsError::Status { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "backend unavailable");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_forbidden_is_auth_error() {
    let router = Router::new().route(
        VALUES_ROUTE,
        get(|| async { (StatusCode::FORBIDDEN, "API key not valid") }),
    );
    let base_url = serve(router).await;

    let err = client(&base_url).fetch_table().await.unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_body_without_values_is_empty_range() {
    let router = Router::new().route(
        VALUES_ROUTE,
        get(|| async { Json(json!({"range": "dashboard!A1:E24", "majorDimension": "ROWS"})) }),
    );
    let base_url = serve(router).await;

    let err = client(&base_url).fetch_table().await.unwrap_err();
    assert!(matches!(err, SheetsError::EmptyRange(ref range) if range == "dashboard!A1:E24"));
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let router = Router::new().route(VALUES_ROUTE, get(|| async { "<html>oops</html>" }));
    let base_url = serve(router).await;

    let err = client(&base_url).fetch_table().await.unwrap_err();
    assert!(matches!(err, SheetsError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr)).fetch_table().await.unwrap_err();
    assert!(matches!(err, SheetsError::Http(_)));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_transport_error_does_not_leak_api_key() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr)).fetch_table().await.unwrap_err();
    let text = err.to_string();
    assert!(!text.contains("test-key"), "key leaked: {text}");
    assert!(!format!("{:?}", err).contains("test-key"));
}

#[tokio::test]
async fn test_client_as_values_source() {
    let router = Router::new()
        .route(VALUES_ROUTE, get(club_values))
        .with_state(Seen::default());
    let base_url = serve(router).await;

    let source: Arc<dyn ValuesSource> = Arc::new(client(&base_url));
    assert_eq!(source.describe(), "sheet sheet-123 range dashboard!A1:E24");

    let table = source.fetch_table().await.unwrap();
    assert_eq!(table.len(), 3);
}
