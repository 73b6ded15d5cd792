use axum::http::StatusCode;
use serde_json::Value;

use crate::test_utils::TestContext;

#[test_log::test(tokio::test)]
async fn test_health_reports_database_up() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
}

#[test_log::test(tokio::test)]
async fn test_health_reports_closed_pool() {
    let ctx = TestContext::new().await;
    ctx.pool.close().await;

    let response = ctx.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["database"], "down");
}

#[test_log::test(tokio::test)]
async fn test_version() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/version").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["version"], env!("CARGO_PKG_VERSION"));
}
