use b3_storefront::auth::{StaticCookies, XSRF_COOKIE};
use b3_storefront::request::{MultipartForm, RequestType};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use crate::common::{builder, B2B_TOKEN};

#[tokio::test]
async fn get_appends_query_and_sends_auth_token() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/orders"))
        .and(query_param("first", "20"))
        .and(query_param("q", "red shoes"))
        .and(header("authToken", B2B_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [1, 2]})))
        .expect(1)
        .mount(&api)
        .await;

    let dispatcher = builder(&api, &storefront).build().unwrap();
    let body: serde_json::Value = dispatcher
        .get_with_query(
            "/api/v2/orders",
            RequestType::B2BRest,
            &[("first", "20"), ("q", "red shoes")],
        )
        .await
        .unwrap();

    assert_eq!(body, json!({"data": [1, 2]}));
}

#[tokio::test]
async fn post_and_put_send_json_bodies() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;
    let payload = json!({"companyName": "Acme"});

    Mock::given(method("POST"))
        .and(path("/api/v2/companies"))
        .and(header("content-type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&api)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/companies/9"))
        .and(header("content-type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&api)
        .await;

    let dispatcher = builder(&api, &storefront).build().unwrap();
    let created: serde_json::Value = dispatcher
        .post("/api/v2/companies", RequestType::B2BRest, &payload)
        .await
        .unwrap();
    let updated: serde_json::Value = dispatcher
        .put("/api/v2/companies/9", RequestType::B2BRest, &payload)
        .await
        .unwrap();

    assert_eq!(created["id"], 9);
    assert_eq!(updated["id"], 9);
}

#[tokio::test]
async fn delete_sends_no_body() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/addresses/3"))
        .and(header("content-type", "application/json"))
        .respond_with(|req: &Request| {
            assert!(req.body.is_empty(), "DELETE must not carry a body");
            ResponseTemplate::new(204)
        })
        .expect(1)
        .mount(&api)
        .await;

    let dispatcher = builder(&api, &storefront).build().unwrap();
    let body: serde_json::Value = dispatcher
        .delete("/api/v2/addresses/3", RequestType::B2BRest)
        .await
        .unwrap();

    assert!(body.is_null());
}

#[tokio::test]
async fn storefront_rest_sends_csrf_header_only() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/storefront/carts"))
        .and(header("x-xsrf-token", "csrf-123"))
        .respond_with(|req: &Request| {
            assert!(!req.headers.contains_key("authToken"));
            ResponseTemplate::new(200).set_body_json(json!([]))
        })
        .expect(1)
        .mount(&storefront)
        .await;

    let dispatcher = builder(&api, &storefront)
        .cookies(StaticCookies::new().with(XSRF_COOKIE, "csrf-123"))
        .build()
        .unwrap();

    // Storefront REST URLs are used as given.
    let url = format!("{}/api/storefront/carts", storefront.uri());
    let carts: Vec<serde_json::Value> = dispatcher.get(&url, RequestType::BCRest).await.unwrap();

    assert!(carts.is_empty());
}

#[tokio::test]
async fn file_upload_is_multipart() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/media/upload"))
        .and(header("authToken", B2B_TOKEN))
        .and(header_exists("content-type"))
        .respond_with(|req: &Request| {
            let content_type = req.headers.get("content-type").unwrap().to_str().unwrap();
            assert!(content_type.starts_with("multipart/form-data; boundary="));
            let body = String::from_utf8_lossy(&req.body);
            assert!(body.contains("name=\"mediaFile\"; filename=\"quote.pdf\""));
            assert!(body.contains("%PDF-1.4"));
            ResponseTemplate::new(200).set_body_json(json!({"code": 200}))
        })
        .expect(1)
        .mount(&api)
        .await;

    let dispatcher = builder(&api, &storefront).build().unwrap();
    let form = MultipartForm::new()
        .text("fileType", "quote")
        .file("mediaFile", "quote.pdf", b"%PDF-1.4".to_vec());
    let body: serde_json::Value = dispatcher
        .file_upload("/api/v2/media/upload", form)
        .await
        .unwrap();

    assert_eq!(body["code"], 200);
}

#[tokio::test]
async fn http_error_surfaces_status() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/companies/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Company not found"))
        .expect(1)
        .mount(&api)
        .await;

    let dispatcher = builder(&api, &storefront).build().unwrap();
    let err = dispatcher
        .get::<serde_json::Value>("/api/v2/companies/404", RequestType::B2BRest)
        .await
        .unwrap_err();

    let transport = err.transport_error().expect("transport error");
    assert_eq!(transport.status(), Some(404));
    assert!(err.to_string().contains("Company not found"));
}
