//! Shared helpers for router integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use advert_axum::{AxumContext, ServerConfig, create_router};
use advert_db::TestDb;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory database.
pub async fn test_app() -> Router {
    test_app_with(&ServerConfig::default()).await
}

pub async fn test_app_with(config: &ServerConfig) -> Router {
    let db = TestDb::new().await.unwrap();
    let ctx = AxumContext::new(Arc::new(db.advert_service()));
    create_router(ctx, config)
}

/// A decoded response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({e}): {:?}", self.text()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body: body.to_vec(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// Create an advert and return its ID.
pub async fn create_advert(app: &Router, name: &str, price: i64, urls: &[&str]) -> i64 {
    let body = serde_json::json!({
        "name": name,
        "description": format!("{name} for sale"),
        "price": price,
        "photo_urls": urls,
    });
    let resp = post(app, "/adverts", &body.to_string()).await;
    assert_eq!(resp.status, StatusCode::CREATED, "{}", resp.text());
    resp.json()["data"][0]["id"].as_i64().unwrap()
}
