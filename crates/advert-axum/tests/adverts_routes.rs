//! End-to-end tests for the `/adverts` routes over an in-memory database.

mod common;

use axum::http::{Method, StatusCode, header};
use serde_json::json;

use advert_axum::{JSON_CONTENT_TYPE, ServerConfig};
use common::{create_advert, delete, get, post, put, send, test_app, test_app_with};

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = test_app().await;
    let resp = get(&app, "/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.text(), "OK");
}

#[tokio::test]
async fn create_returns_new_id() {
    let app = test_app().await;
    let resp = post(
        &app,
        "/adverts",
        r#"{"name":"car","description":"asd","price":40,"photo_urls":["u1","u2"]}"#,
    )
    .await;

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(
        resp.headers.get(header::CONTENT_TYPE).unwrap(),
        JSON_CONTENT_TYPE
    );
    assert_eq!(resp.json(), json!({"data": [{"id": 1}]}));
}

#[tokio::test]
async fn create_with_taken_name_conflicts() {
    let app = test_app().await;
    create_advert(&app, "car", 40, &["u1"]).await;

    let resp = post(
        &app,
        "/adverts",
        r#"{"name":"car","description":"other","price":10,"photo_urls":["u9"]}"#,
    )
    .await;

    assert_eq!(resp.status, StatusCode::CONFLICT);
    assert_eq!(
        resp.json(),
        json!({"error": "item with name 'car' already exists"})
    );
}

#[tokio::test]
async fn get_with_fields_returns_full_record() {
    let app = test_app().await;
    create_advert(&app, "bike", 15, &["b1"]).await;
    let id = create_advert(&app, "car", 40, &["u1", "u2", "u3"]).await;
    assert_eq!(id, 2);

    let resp = get(&app, "/adverts/2?fields=true").await;
    assert_eq!(resp.status, StatusCode::OK);

    let data = &resp.json()["data"];
    assert_eq!(data["id"], 2);
    assert_eq!(data["name"], "car");
    assert_eq!(data["description"], "car for sale");
    assert_eq!(data["price"], 40);
    assert_eq!(data["main_photo_url"], "u1");
    assert_eq!(data["photo_urls"], json!(["u1", "u2", "u3"]));
    assert!(data["created_at"].as_str().is_some_and(|s| s.len() == 19));
}

#[tokio::test]
async fn get_without_fields_returns_brief_record() {
    let app = test_app().await;
    let id = create_advert(&app, "car", 40, &["u1", "u2"]).await;

    let resp = get(&app, &format!("/adverts/{id}")).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.json(),
        json!({"data": {"name": "car", "price": 40, "main_photo_url": "u1"}})
    );
}

#[tokio::test]
async fn update_missing_advert_is_not_found() {
    let app = test_app().await;
    let resp = put(&app, "/adverts/5", r#"{"name":"x"}"#).await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json(), json!({"error": "no content found with id: 5"}));
}

#[tokio::test]
async fn update_with_name_only_keeps_other_fields() {
    let app = test_app().await;
    let id = create_advert(&app, "car", 40, &["u1", "u2"]).await;

    let resp = put(&app, &format!("/adverts/{id}"), r#"{"name":"truck"}"#).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({}));

    let data = get(&app, &format!("/adverts/{id}?fields=true")).await.json()["data"].clone();
    assert_eq!(data["name"], "truck");
    assert_eq!(data["description"], "car for sale");
    assert_eq!(data["price"], 40);
    assert_eq!(data["photo_urls"], json!(["u1", "u2"]));
}

#[tokio::test]
async fn update_replaces_photo_urls() {
    let app = test_app().await;
    let id = create_advert(&app, "car", 40, &["u1", "u2"]).await;

    let resp = put(&app, &format!("/adverts/{id}"), r#"{"photo_urls":["n1"]}"#).await;
    assert_eq!(resp.status, StatusCode::OK);

    let data = get(&app, &format!("/adverts/{id}?fields=true")).await.json()["data"].clone();
    assert_eq!(data["main_photo_url"], "n1");
    assert_eq!(data["photo_urls"], json!(["n1"]));
}

#[tokio::test]
async fn update_with_malformed_body_is_bad_request() {
    let app = test_app().await;
    let id = create_advert(&app, "car", 40, &["u1"]).await;

    let resp = put(&app, &format!("/adverts/{id}"), "{bad").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json(),
        json!({"error": "Bad Request", "detail": "format not correct"})
    );
}

#[tokio::test]
async fn failed_update_leaves_advert_unchanged() {
    let app = test_app().await;
    let id = create_advert(&app, "car", 40, &["u1", "u2"]).await;

    let resp = put(
        &app,
        &format!("/adverts/{id}"),
        r#"{"price":99,"photo_urls":["x","x"]}"#,
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["error"], "Bad Request");

    let data = get(&app, &format!("/adverts/{id}?fields=true")).await.json()["data"].clone();
    assert_eq!(data["price"], 40);
    assert_eq!(data["main_photo_url"], "u1");
    assert_eq!(data["photo_urls"], json!(["u1", "u2"]));
}

#[tokio::test]
async fn update_to_taken_name_conflicts() {
    let app = test_app().await;
    create_advert(&app, "car", 40, &["u1"]).await;
    let id = create_advert(&app, "bike", 15, &["b1"]).await;

    let resp = put(&app, &format!("/adverts/{id}"), r#"{"name":"car"}"#).await;
    assert_eq!(resp.status, StatusCode::CONFLICT);
    assert_eq!(
        resp.json(),
        json!({"error": "item with name 'car' already exists"})
    );
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = test_app().await;
    let id = create_advert(&app, "car", 40, &["u1"]).await;

    let resp = delete(&app, &format!("/adverts/{id}")).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({}));

    let resp = get(&app, &format!("/adverts/{id}")).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(
        resp.json(),
        json!({"error": format!("no content found with id: {id}")})
    );

    let resp = delete(&app, &format!("/adverts/{id}")).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_on_empty_store_is_empty_object() {
    let app = test_app().await;
    let resp = get(&app, "/adverts").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({}));
}

#[tokio::test]
async fn list_returns_summaries_with_meta() {
    let app = test_app().await;
    create_advert(&app, "car", 40, &["u1", "u2"]).await;

    let resp = get(&app, "/adverts").await;
    assert_eq!(resp.status, StatusCode::OK);

    let body = resp.json();
    assert_eq!(body["meta"], json!({"max_page": 1}));
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["name"], "car");
    assert_eq!(items[0]["main_photo_url"], "u1");
    assert!(items[0].get("photo_urls").is_none());
}

#[tokio::test]
async fn list_sorts_and_pages_by_price() {
    let app = test_app().await;
    create_advert(&app, "mid", 20, &["m"]).await;
    create_advert(&app, "cheap", 5, &["c"]).await;
    create_advert(&app, "dear", 90, &["d"]).await;

    let resp = get(&app, "/adverts?sort_by=price&order_by=desc&limit=2").await;
    let body = resp.json();
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["dear", "mid"]);
    assert_eq!(body["meta"], json!({"max_page": 2}));

    let resp = get(&app, "/adverts?sort_by=price&limit=2&offset=2").await;
    let body = resp.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "dear");

    let resp = get(&app, "/adverts?offset=10").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({"data": [], "meta": {"max_page": 1}}));
}

#[tokio::test]
async fn repeated_query_key_uses_first_value() {
    let app = test_app().await;
    create_advert(&app, "car", 40, &["u1"]).await;
    create_advert(&app, "bike", 15, &["b1"]).await;

    let resp = get(&app, "/adverts?limit=1&limit=2&sort_by=price&sort_by=bogus").await;
    assert_eq!(resp.status, StatusCode::OK);

    let body = resp.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "bike");
    assert_eq!(body["meta"], json!({"max_page": 2}));
}

#[tokio::test]
async fn invalid_query_is_bad_request() {
    let app = test_app().await;

    let resp = get(&app, "/adverts?limit=abc").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json(),
        json!({
            "error": "queries have wrong value",
            "detail": "'limit=' query value should be positive number"
        })
    );

    let resp = get(&app, "/adverts?sort_by=name").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json()["detail"],
        "'sort_by=' query value should be either 'created_at' or 'price'"
    );

    let resp = get(&app, "/adverts/1?fields=yes").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json()["detail"],
        "'fields=' query value should be 'true'"
    );
}

#[tokio::test]
async fn invalid_body_is_rejected() {
    let app = test_app().await;

    let resp = post(&app, "/adverts", "{not json").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json(),
        json!({"error": "Bad Request", "detail": "format not correct"})
    );

    let resp = post(&app, "/adverts", "{}").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json(),
        json!({"error": "request has empty fields", "detail": "name is required"})
    );

    let resp = post(
        &app,
        "/adverts",
        r#"{"name":"car","description":"asd","price":40,"photo_urls":["1","2","3","4"]}"#,
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json(),
        json!({
            "error": "Request Entity Too Large",
            "detail": "photo_urls quantity exceeded"
        })
    );

    let resp = get(&app, "/adverts").await;
    assert_eq!(resp.json(), json!({}));
}

#[tokio::test]
async fn duplicate_photo_urls_are_rejected_without_partial_write() {
    let app = test_app().await;
    let resp = post(
        &app,
        "/adverts",
        r#"{"name":"car","description":"asd","price":40,"photo_urls":["u1","u1"]}"#,
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json()["error"], "Bad Request");

    let resp = get(&app, "/adverts").await;
    assert_eq!(resp.json(), json!({}));
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let config = ServerConfig {
        max_body_size: 1024,
        ..Default::default()
    };
    let app = test_app_with(&config).await;

    let body = json!({
        "name": "car",
        "description": "x".repeat(4096),
        "price": 40,
        "photo_urls": ["u1"],
    })
    .to_string();
    let resp = post(&app, "/adverts", &body).await;
    assert_eq!(resp.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(resp.json(), json!({"error": "Payload Too Large"}));
}

#[tokio::test]
async fn unknown_paths_and_bad_ids_are_not_found() {
    let app = test_app().await;
    let not_found = json!({"error": "Not Found"});

    for (method, uri) in [
        (Method::GET, "/nope"),
        (Method::GET, "/adverts/abc"),
        (Method::GET, "/adverts/0"),
        (Method::PUT, "/adverts/-1"),
        (Method::DELETE, "/adverts/1.5"),
        (Method::POST, "/adverts/abc"),
        (Method::GET, "/adverts/1/photos"),
    ] {
        let resp = send(&app, method.clone(), uri, None).await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(resp.json(), not_found, "{method} {uri}");
    }
}

#[tokio::test]
async fn unsupported_methods_are_not_allowed() {
    let app = test_app().await;

    for (method, uri) in [
        (Method::PATCH, "/adverts"),
        (Method::DELETE, "/adverts"),
        (Method::POST, "/adverts/1"),
        (Method::PATCH, "/adverts/1"),
    ] {
        let resp = send(&app, method.clone(), uri, None).await;
        assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(
            resp.json(),
            json!({"error": "Method Not Allowed"}),
            "{method} {uri}"
        );
    }
}
