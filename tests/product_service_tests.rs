//! Integration tests for the product listing operations.
//!
//! These tests run the real HTTP transport against a local mock server and
//! verify the requests sent, the records decoded and the errors surfaced.

use std::time::Duration;

use shopify_buy::{
    ApiKey, AppId, BuyClient, BuyConfig, BuyError, CompareAtPrice, HostUrl, HttpError,
    ProductService, ShopDomain,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTINGS_PATH: &str = "/api/apps/8/product_listings.json";
const TAGS_PATH: &str = "/api/apps/8/product_listings/tags.json";

/// Creates a client whose requests go to `base_url`.
fn create_test_client(base_url: &str) -> BuyClient {
    create_test_client_with_timeout(base_url, None)
}

fn create_test_client_with_timeout(base_url: &str, timeout: Option<Duration>) -> BuyClient {
    let mut builder = BuyConfig::builder()
        .api_key(ApiKey::new("buy-key").unwrap())
        .app_id(AppId::new("8").unwrap())
        .shop_domain(ShopDomain::new("test-shop").unwrap())
        .api_host(HostUrl::new(base_url).unwrap());
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    BuyClient::new(&builder.build().unwrap()).unwrap()
}

/// Returns the raw query string of the only request the server received.
async fn single_request_query(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0].url.query().map(ToString::to_string)
}

// ============================================================================
// List products
// ============================================================================

#[tokio::test]
async fn test_get_products_sends_authenticated_paged_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTINGS_PATH))
        .and(query_param("page", "2"))
        .and(query_param("limit", "25"))
        .and(header("Authorization", "Basic YnV5LWtleQ=="))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"product_listings":[
                {"product_id":1,"title":"Red Shirt","handle":"red-shirt",
                 "variants":[{"id":11,"price":"19.99","compare_at_price":"24.99"}]},
                {"product_id":2,"title":"Blue Shirt","handle":"blue-shirt","variants":[]}
            ]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let products = client.get_products(2, 25).await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].handle, "red-shirt");
    assert_eq!(products[1].handle, "blue-shirt");
    assert_eq!(products[0].variants[0].price, "19.99");
    assert_eq!(
        products[0].variants[0].compare_at_price,
        Some(CompareAtPrice::Text("24.99".to_string()))
    );

    assert_eq!(
        single_request_query(&server).await.as_deref(),
        Some("page=2&limit=25")
    );
}

#[tokio::test]
async fn test_get_products_tolerates_nulls_and_keeps_number_literals() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTINGS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"product_listings":[
                {"product_id":1,"handle":"red-shirt","vendor":null,
                 "variants":[{"id":11,"price":"19.99","formatted_price":null,"compare_at_price":25.00}]},
                {"product_id":2,"handle":"blue-shirt","vendor":"Acme"}
            ]}"#,
        ))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let products = client.get_products(1, 10).await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].vendor, "");
    assert_eq!(products[1].vendor, "Acme");

    let variant = &products[0].variants[0];
    assert_eq!(variant.formatted_price, "");
    assert_eq!(
        variant.compare_at_price,
        Some(CompareAtPrice::Number("25.00".to_string()))
    );
    assert_eq!(variant.compare_at_price.as_ref().unwrap().to_string(), "25.00");
}

#[tokio::test]
async fn test_get_products_empty_page_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTINGS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"product_listings":[]}"#))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let products = client.get_products(99, 50).await.unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_get_products_forwards_out_of_range_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTINGS_PATH))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(r#"{"errors":{"limit":["must be <= 250"]}}"#),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let error = client.get_products(0, 1000).await.unwrap_err();

    assert_eq!(
        single_request_query(&server).await.as_deref(),
        Some("page=0&limit=1000")
    );
    assert_eq!(error.status(), Some(422));
    assert!(error.to_string().contains("must be <= 250"));
}

// ============================================================================
// Get product by handle
// ============================================================================

#[tokio::test]
async fn test_get_product_by_handle_uses_listings_endpoint_with_handle_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTINGS_PATH))
        .and(query_param("handle", "red-shirt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"product_listings":[{"product_id":1,"handle":"red-shirt"}]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let products = client.get_product_by_handle("red-shirt").await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product_id, 1);
    assert_eq!(
        single_request_query(&server).await.as_deref(),
        Some("handle=red-shirt")
    );
}

#[tokio::test]
async fn test_get_product_by_unknown_handle_returns_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTINGS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"product_listings":[]}"#))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let products = client.get_product_by_handle("no-such-thing").await.unwrap();

    assert!(products.is_empty());
}

// ============================================================================
// List product tags
// ============================================================================

#[tokio::test]
async fn test_get_product_tags_decodes_tags() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TAGS_PATH))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"tags":[{"id":1,"title":"sale"}]}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let tags = client.get_product_tags(1, 10).await.unwrap();

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].id, 1);
    assert_eq!(tags[0].title, "sale");
    assert_eq!(
        single_request_query(&server).await.as_deref(),
        Some("page=1&limit=10")
    );
}

// ============================================================================
// Error propagation
// ============================================================================

#[tokio::test]
async fn test_server_error_fails_every_operation_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTINGS_PATH))
        .respond_with(
            ResponseTemplate::new(500)
                .insert_header("x-request-id", "req-500")
                .set_body_string(r#"{"errors":"Internal Server Error"}"#),
        )
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(TAGS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());

    let error = client.get_products(1, 10).await.unwrap_err();
    assert_eq!(error.status(), Some(500));
    assert_eq!(error.request_id(), Some("req-500"));
    assert!(matches!(error, BuyError::Http(HttpError::Response(_))));

    let error = client.get_product_by_handle("red-shirt").await.unwrap_err();
    assert_eq!(error.status(), Some(500));

    let error = client.get_product_tags(1, 10).await.unwrap_err();
    assert_eq!(error.status(), Some(500));

    // One request per call, nothing retried.
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_missing_envelope_field_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTINGS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"products":[]}"#))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let error = client.get_products(1, 10).await.unwrap_err();

    assert!(matches!(
        error,
        BuyError::Decode {
            field: "product_listings",
            ..
        }
    ));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TAGS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let error = client.get_product_tags(1, 10).await.unwrap_err();

    assert!(matches!(error, BuyError::Decode { field: "tags", .. }));
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Nothing listens on port 1.
    let client = create_test_client("http://127.0.0.1:1");

    let error = client.get_products(1, 10).await.unwrap_err();

    assert!(matches!(error, BuyError::Http(HttpError::Network(_))));
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn test_configured_timeout_is_enforced_by_transport() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LISTINGS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"product_listings":[]}"#)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client =
        create_test_client_with_timeout(&server.uri(), Some(Duration::from_millis(100)));
    let error = client.get_products(1, 10).await.unwrap_err();

    match error {
        BuyError::Http(HttpError::Network(e)) => assert!(e.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}
