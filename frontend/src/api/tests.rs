#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

fn product_payload() -> SubmissionPayload {
    SubmissionPayload {
        fields: vec![
            ("name".into(), PayloadValue::Text("Apple".into())),
            ("price".into(), PayloadValue::Float(2.5)),
            ("quantity".into(), PayloadValue::Integer(10)),
            ("categorie".into(), PayloadValue::Integer(1)),
            ("producer".into(), PayloadValue::Integer(2)),
        ],
        file: None,
    }
}

#[tokio::test]
async fn get_total_returns_raw_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/total/product");
            then.status(200).json_body(json!({ "total": 42 }));
        })
        .await;

    let body = api_client(&server).get_total("/total/product").await.unwrap();
    assert_eq!(body, json!({ "total": 42 }));
}

#[tokio::test]
async fn get_total_maps_server_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/total/order");
            then.status(500).body("boom");
        })
        .await;

    let err = api_client(&server)
        .get_total("/total/order")
        .await
        .unwrap_err();
    assert_eq!(err.code, "HTTP_500");
}

#[tokio::test]
async fn option_lists_parse_and_default_null_to_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/producers");
            then.status(200)
                .json_body(json!([{ "id": 1, "name": "Ferme Dupont" }]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/categories");
            then.status(200).json_body(json!(null));
        })
        .await;

    let client = api_client(&server);
    let producers = client.list_producers().await.unwrap();
    assert_eq!(producers.len(), 1);
    assert_eq!(producers[0].name, "Ferme Dupont");
    assert!(client.list_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn option_list_with_unexpected_shape_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/categories");
            then.status(200).json_body(json!({ "items": [] }));
        })
        .await;

    let err = api_client(&server).list_categories().await.unwrap_err();
    assert_eq!(err.code, "UNKNOWN");
}

#[tokio::test]
async fn create_product_posts_multipart_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/products/add")
                .header_exists("content-type")
                .body_contains("name=\"name\"")
                .body_contains("Apple")
                .body_contains("name=\"price\"")
                .body_contains("2.5");
            then.status(201).json_body(json!({ "id": 7, "name": "Apple" }));
        })
        .await;

    let created = api_client(&server)
        .create_product(product_payload())
        .await
        .unwrap();
    assert_eq!(created["id"], 7);
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn create_product_attaches_image_part() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/products/add")
                .body_contains("name=\"image\"")
                .body_contains("filename=\"apple.png\"");
            then.status(201).body("");
        })
        .await;

    let mut payload = product_payload();
    payload.file = Some((
        "image".into(),
        FileUpload {
            file_name: "apple.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        },
    ));
    let created = api_client(&server).create_product(payload).await.unwrap();
    assert_eq!(created, serde_json::Value::Null);
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn create_product_treats_plain_ok_as_unexpected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/products/add");
            then.status(200).json_body(json!({ "id": 7 }));
        })
        .await;

    let err = api_client(&server)
        .create_product(product_payload())
        .await
        .unwrap_err();
    assert_eq!(err.code, "HTTP_200");
    assert!(err.field_errors().is_none());
}

#[tokio::test]
async fn create_product_surfaces_field_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/products/add");
            then.status(422)
                .json_body(json!({ "errors": { "price": ["must be positive"] } }));
        })
        .await;

    let err = api_client(&server)
        .create_product(product_payload())
        .await
        .unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
    let errors = err.field_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["price"], vec!["must be positive".to_string()]);
}

#[tokio::test]
async fn transport_failure_is_request_failed() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:1");
    let err = client.get_total("/total/user").await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}
