use std::sync::Arc;
use std::time::Duration;

use b3_storefront::auth::AlternateHostConfig;
use b3_storefront::request::{
    ErrorKind, GraphqlOptions, GraphqlRequest, SessionExpiryPolicy, LOGIN_ROUTE,
};
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use crate::common::{
    builder, session, MemoryNavigator, Notifications, SharedNotifier, B2B_TOKEN, BC_TOKEN,
    CHANNEL_ID, STORE_HASH,
};

fn query() -> GraphqlRequest {
    GraphqlRequest::new("{ quotes { totalCount } }")
}

fn errors(message: &str, code: i64) -> serde_json::Value {
    json!({"data": null, "errors": [{"message": message, "extensions": {"code": code}}]})
}

#[tokio::test]
async fn b2b_graphql_returns_typed_data() {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Quotes {
        total_count: u32,
    }
    #[derive(Deserialize)]
    struct Data {
        quotes: Quotes,
    }

    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", format!("Bearer {B2B_TOKEN}").as_str()))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"query": "{ quotes { totalCount } }"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"quotes": {"totalCount": 4}}})),
        )
        .expect(1)
        .mount(&api)
        .await;

    let dispatcher = builder(&api, &storefront).build().unwrap();
    let data: Data = dispatcher
        .graphql_b2b(&query(), &GraphqlOptions::new())
        .await
        .unwrap();

    assert_eq!(data.quotes.total_count, 4);
}

#[tokio::test]
async fn bc_graphql_unwraps_data() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", format!("Bearer {BC_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"foo": 1}})))
        .expect(1)
        .mount(&storefront)
        .await;

    let dispatcher = builder(&api, &storefront).build().unwrap();
    let data: serde_json::Value = dispatcher.graphql_bc(&query()).await.unwrap();

    assert_eq!(data, json!({"foo": 1}));
}

#[tokio::test]
async fn proxy_without_token_identifies_store() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/proxy/bc-storefront/graphql"))
        .and(header("Store-Hash", STORE_HASH))
        .and(header("BC-Channel-Id", CHANNEL_ID))
        .respond_with(|req: &Request| {
            assert!(!req.headers.contains_key("authorization"));
            ResponseTemplate::new(200).set_body_json(json!({"data": {"site": {}}}))
        })
        .expect(1)
        .mount(&api)
        .await;

    let dispatcher = builder(&api, &storefront)
        .session(session(""))
        .build()
        .unwrap();
    let data: serde_json::Value = dispatcher.graphql_bc_proxy(&query()).await.unwrap();

    assert_eq!(data, json!({"site": {}}));
}

#[tokio::test]
async fn proxy_with_token_uses_bearer() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/proxy/bc-storefront/graphql"))
        .and(header("authorization", format!("Bearer {B2B_TOKEN}").as_str()))
        .respond_with(|req: &Request| {
            assert!(!req.headers.contains_key("Store-Hash"));
            ResponseTemplate::new(200).set_body_json(json!({"data": {}}))
        })
        .expect(1)
        .mount(&api)
        .await;

    let dispatcher = builder(&api, &storefront).build().unwrap();
    let _: serde_json::Value = dispatcher.graphql_bc_proxy(&query()).await.unwrap();
}

#[tokio::test]
async fn graphql_error_notifies_once() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(errors("bad", 1)))
        .mount(&api)
        .await;

    let notifications = Arc::new(Notifications::default());
    let dispatcher = builder(&api, &storefront)
        .notifier(SharedNotifier(notifications.clone()))
        .build()
        .unwrap();

    let err = dispatcher
        .graphql_b2b::<serde_json::Value>(&query(), &GraphqlOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "bad");
    assert_eq!(notifications.messages(), vec!["bad".to_string()]);

    let err = dispatcher
        .graphql_b2b::<serde_json::Value>(&query(), &GraphqlOptions::new().suppress_error_notification())
        .await
        .unwrap_err();
    assert_eq!(err.graphql_message(), Some("bad"));
    assert_eq!(notifications.messages().len(), 1);
}

#[tokio::test]
async fn session_expired_redirects_and_fails() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(errors("Token expired", 40101)))
        .expect(1)
        .mount(&storefront)
        .await;

    let notifications = Arc::new(Notifications::default());
    let navigator = MemoryNavigator::at("#/quotes");
    let dispatcher = builder(&api, &storefront)
        .notifier(SharedNotifier(notifications.clone()))
        .navigator(navigator.clone())
        .build()
        .unwrap();

    let err = dispatcher
        .graphql_bc::<serde_json::Value>(&query())
        .await
        .unwrap_err();

    assert!(err.is_session_expired());
    assert_eq!(navigator.hash(), LOGIN_ROUTE);
    assert_eq!(notifications.messages(), vec!["Token expired".to_string()]);
}

#[tokio::test]
async fn session_expired_stall_never_settles() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(errors("Token expired", 40101)))
        .expect(1)
        .mount(&api)
        .await;

    let navigator = MemoryNavigator::at("#/orders");
    let dispatcher = builder(&api, &storefront)
        .navigator(navigator.clone())
        .session_expiry(SessionExpiryPolicy::Stall)
        .build()
        .unwrap();

    let request = query();
    let options = GraphqlOptions::new();
    let outcome = tokio::time::timeout(
        Duration::from_millis(300),
        dispatcher.graphql_b2b::<serde_json::Value>(&request, &options),
    )
    .await;

    assert!(outcome.is_err(), "call should not settle");
    assert_eq!(navigator.hash(), LOGIN_ROUTE);
}

#[tokio::test]
async fn alternate_host_routes_with_secret_headers() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;
    let alternate = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/b2b/graphql"))
        .and(header("a1-secret-key", "s3cret"))
        .and(header("bcCustomerId", "42"))
        .and(header("authorization", format!("Bearer {B2B_TOKEN}").as_str()))
        .and(body_json(json!({
            "query": "{ quotes { totalCount } }",
            "bundleUrl": format!("{}/graphql", api.uri()),
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": true}})))
        .expect(1)
        .mount(&alternate)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&api)
        .await;

    let dispatcher = builder(&api, &storefront)
        .alternate_host(AlternateHostConfig::new("s3cret", alternate.uri(), "42"))
        .build()
        .unwrap();
    let data: serde_json::Value = dispatcher
        .graphql_b2b(&query(), &GraphqlOptions::new().alternate_host("/b2b/graphql"))
        .await
        .unwrap();

    assert_eq!(data, json!({"ok": true}));
}

#[tokio::test]
async fn alternate_host_missing_value_sends_nothing() {
    let api = MockServer::start().await;
    let storefront = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(0)
        .mount(&api)
        .await;

    let config = AlternateHostConfig {
        customer_id: None,
        ..AlternateHostConfig::new("s3cret", api.uri(), "42")
    };
    let dispatcher = builder(&api, &storefront)
        .alternate_host(config)
        .build()
        .unwrap();

    let err = dispatcher
        .graphql_b2b::<serde_json::Value>(&query(), &GraphqlOptions::new().alternate_host("/graphql"))
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Config(_)));
    assert_eq!(err.missing_config_value(), Some("customerID"));
}
