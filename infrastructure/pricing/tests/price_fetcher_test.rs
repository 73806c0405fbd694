use std::time::Duration;

use business::domain::price::errors::PriceError;
use business::domain::price::services::PriceFetcherService;
use pricing::client::PricingClient;
use pricing::price_fetcher::PriceFetcherHttp;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(base_url: &str) -> PriceFetcherHttp {
    PriceFetcherHttp::new(PricingClient::new(base_url, Duration::from_secs(5)).unwrap())
}

fn record_body() -> serde_json::Value {
    json!({
        "regularprice": 10.0,
        "origintax": 16,
        "commercialPrice": 9.5,
        "functionalPrice": null,
        "finalFullFunctionalPrice": 9.5,
        "ivaFunctionalAmount": null,
        "finalFullPriceCommercial": null,
        "finalFullPricePromotionCommercial": 9.0,
        "finalFullPricePromotionFunctional": 8.8
    })
}

#[tokio::test]
async fn should_fetch_record_by_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verify-product/by-code-product/012345678905"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_body()))
        .expect(1)
        .mount(&server)
        .await;

    let record = fetcher_for(&server.uri())
        .fetch_price_by_code("012345678905")
        .await
        .unwrap();

    assert_eq!(record.regular_price, 10.0);
    assert_eq!(record.origin_tax, 16.0);
    assert_eq!(record.commercial_price, 9.5);
    assert_eq!(record.functional_price, None);
    assert_eq!(record.final_full_price_commercial, None);
    assert_eq!(record.final_full_price_promotion_commercial, 9.0);
}

#[tokio::test]
async fn should_reject_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verify-product/by-code-product/000"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = fetcher_for(&server.uri()).fetch_price_by_code("000").await;

    assert_eq!(result.unwrap_err(), PriceError::UnexpectedStatus(404));
}

#[tokio::test]
async fn should_reject_body_that_is_not_a_price_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verify-product/by-code-product/123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"regularprice": 10.0})),
        )
        .mount(&server)
        .await;

    let result = fetcher_for(&server.uri()).fetch_price_by_code("123").await;

    assert!(matches!(result, Err(PriceError::MalformedResponse(_))));
}

#[tokio::test]
async fn should_reject_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = fetcher_for(&server.uri()).fetch_price_by_code("123").await;

    assert!(matches!(result, Err(PriceError::MalformedResponse(_))));
}

#[tokio::test]
async fn should_report_transport_error_when_service_is_down() {
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let result = fetcher_for(&uri).fetch_price_by_code("123").await;

    let err = result.unwrap_err();
    assert!(matches!(err, PriceError::Transport(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn should_escape_code_in_request_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verify-product/by-code-product/AB%2FC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_body()))
        .expect(1)
        .mount(&server)
        .await;

    let result = fetcher_for(&server.uri()).fetch_price_by_code("AB/C").await;

    assert!(result.is_ok(), "fetch should succeed: {:?}", result.err());
}

#[tokio::test]
async fn should_time_out_with_configured_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verify-product/by-code-product/555"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(record_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    let client = PricingClient::new(&server.uri(), Duration::from_millis(100)).unwrap();

    let err = PriceFetcherHttp::new(client)
        .fetch_price_by_code("555")
        .await
        .unwrap_err();

    assert!(matches!(err, PriceError::Transport(_)));
}
