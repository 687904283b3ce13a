#![allow(dead_code)]

use axum::http::StatusCode;
use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::{json, Value};
use std::path::Path;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture server");
    let addr = listener.local_addr().expect("fixture server address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fixture server");
    });
    format!("http://{}", addr)
}

/// GET route answering with a fixed JSON body
pub fn json_route(body: Value) -> MethodRouter {
    get(move || {
        let body = body.clone();
        async move { Json(body) }
    })
}

/// GET route answering with a bare status and text body
pub fn status_route(status: StatusCode, body: &'static str) -> MethodRouter {
    get(move || async move { (status, body) })
}

/// Router covering the fixture endpoints used across the suite
pub fn fixture_router() -> Router {
    Router::new()
        .route("/small", json_route(json!([{"a": 1}, {"a": 2}])))
        .route("/nested", json_route(nested_users(11)))
        .route("/tagged", json_route(tagged_users(11)))
        .route("/mixed", json_route(mixed_items()))
        .route("/object", json_route(json!({"count": 500, "items": {"x": 1}})))
        .route("/boom", status_route(StatusCode::INTERNAL_SERVER_ERROR, "boom"))
        .route("/missing", status_route(StatusCode::NOT_FOUND, "nope"))
        .route("/html", status_route(StatusCode::OK, "<html>not json</html>"))
}

/// `n` records shaped `{id: i, nested: {x: i}}`
pub fn nested_users(n: usize) -> Value {
    Value::Array((1..=n).map(|i| json!({"id": i, "nested": {"x": i}})).collect())
}

/// `n` records where only the first one carries `tags`
pub fn tagged_users(n: usize) -> Value {
    Value::Array(
        (1..=n)
            .map(|i| {
                if i == 1 {
                    json!({"id": i, "tags": ["a", "b"]})
                } else {
                    json!({"id": i})
                }
            })
            .collect(),
    )
}

/// Twelve items covering every cell kind: nested bool and null, an empty
/// string, bare scalars, an array item, then plain `{z: i}` records
pub fn mixed_items() -> Value {
    let mut items = vec![
        json!({"z": 1, "a": {"y": true, "b": null}}),
        json!({"e": ""}),
        json!(2),
        Value::Null,
        json!([1, {"k": 2}]),
    ];
    items.extend((6..=12).map(|i| json!({"z": i})));
    Value::Array(items)
}

/// All cells of the named worksheet, header row first
pub fn read_sheet(path: &Path, sheet: &str) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("open written workbook");
    let range = workbook.worksheet_range(sheet).expect("worksheet present");
    range.rows().map(|row| row.to_vec()).collect()
}

pub fn header(rows: &[Vec<Data>]) -> Vec<String> {
    rows[0].iter().map(|cell| cell.to_string()).collect()
}
