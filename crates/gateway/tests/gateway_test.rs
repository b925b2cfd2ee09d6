//! Integration tests for the gateway over real HTTP (mockito server).
//!
//! Each test points one client at a local mock server and checks the outcome mapping:
//! payload on 2xx JSON, BadStatus on non-2xx, MalformedBody on bad JSON, Network on
//! connection failure and timeout.

use std::sync::Arc;
use std::time::Duration;

use gateway::{ExternalError, ExternalErrorKind, Gateway, GatewayConfig, HttpFetch, ReqwestFetcher};
use mockito::Matcher;

fn config_for(server_url: &str) -> GatewayConfig {
    GatewayConfig {
        timeout: Duration::from_millis(300),
        weather_url: format!("{}/timeline", server_url),
        weather_api_key: "weather-key".to_string(),
        rates_url: format!("{}/v6", server_url),
        rates_api_key: "rates-key".to_string(),
        joke_url: format!("{}/joke/Any?safe-mode", server_url),
        activity_url: format!("{}/bored/api/activity", server_url),
        fact_url: format!("{}/random.json", server_url),
        cat_url: format!("{}/v1/images/search", server_url),
        pokemon_url: format!("{}/api/v2/pokemon", server_url),
    }
}

fn gateway_for(server_url: &str) -> Gateway {
    Gateway::from_config(&config_for(server_url)).expect("Failed to build gateway")
}

/// **Test: Weather request carries key and units; body is decoded.**
///
/// **Setup:** Mock `/timeline/Moscow` expecting `key` and `unitGroup=metric`.
///
/// **Expected:** Forecast with the mocked values; mock hit exactly once.
#[tokio::test]
async fn test_weather_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/timeline/Moscow")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), "weather-key".into()),
            Matcher::UrlEncoded("unitGroup".into(), "metric".into()),
            Matcher::UrlEncoded("lang".into(), "ru".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"resolvedAddress":"Москва","days":[{"temp":20.5,"conditions":"Clear","description":"Ясно","humidity":40,"windspeed":5.5}]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let forecast = gateway_for(&server.url())
        .weather
        .forecast("Moscow")
        .await
        .expect("forecast should succeed");

    assert_eq!(forecast.location, "Москва");
    assert_eq!(forecast.temp, 20.5);
    assert_eq!(forecast.humidity, 40.0);
    mock.assert_async().await;
}

/// **Test: Non-2xx status maps to BadStatus carrying the code.**
#[tokio::test]
async fn test_weather_bad_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex("^/timeline/.*".to_string()))
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("No account found")
        .expect(1)
        .create_async()
        .await;

    let err = gateway_for(&server.url())
        .weather
        .forecast("Atlantis")
        .await
        .unwrap_err();

    assert_eq!(err, ExternalError::BadStatus(401));
    assert_eq!(err.kind(), ExternalErrorKind::BadStatus);
    mock.assert_async().await;
}

/// **Test: 200 with a non-JSON body maps to MalformedBody.**
#[tokio::test]
async fn test_rates_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v6/rates-key/latest/USD")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .expect(1)
        .create_async()
        .await;

    let err = gateway_for(&server.url()).rates.latest().await.unwrap_err();

    assert_eq!(err.kind(), ExternalErrorKind::MalformedBody);
    mock.assert_async().await;
}

/// **Test: Joke endpoint keeps its fixed query string.**
#[tokio::test]
async fn test_joke_keeps_fixed_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/joke/Any")
        .match_query(Matcher::Regex("safe-mode".to_string()))
        .with_status(200)
        .with_body(r#"{"type":"single","joke":"Ha."}"#)
        .create_async()
        .await;

    let joke = gateway_for(&server.url()).fun.joke().await.unwrap();

    assert_eq!(joke.text(), "Ha.");
    mock.assert_async().await;
}

/// **Test: Unknown Pokémon surfaces as BadStatus(404).**
#[tokio::test]
async fn test_pokemon_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/pokemon/agumon")
        .with_status(404)
        .with_body("Not Found")
        .expect(1)
        .create_async()
        .await;

    let err = gateway_for(&server.url())
        .pokemon
        .lookup("Agumon")
        .await
        .unwrap_err();

    assert_eq!(err, ExternalError::BadStatus(404));
    mock.assert_async().await;
}

/// **Test: Connection refused maps to Network.**
#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let fetcher = ReqwestFetcher::new(Duration::from_secs(2)).unwrap();

    let err = fetcher.fetch("http://127.0.0.1:1/", &[]).await.unwrap_err();

    assert_eq!(err.kind(), ExternalErrorKind::Network);
}

/// **Test: A response slower than the timeout maps to Network.**
///
/// **Setup:** Mock whose body is written after 1s; client timeout is 300ms.
///
/// **Expected:** Network error, not a partial payload.
#[tokio::test]
async fn test_timeout_is_network_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/random.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_secs(1));
            w.write_all(br#"{"text":"late"}"#)
        })
        .create_async()
        .await;

    let gateway = gateway_for(&server.url());
    let err = gateway.fun.fact().await.unwrap_err();

    assert_eq!(err.kind(), ExternalErrorKind::Network);
}

/// **Test: Gateway::new accepts any HttpFetch implementation.**
#[tokio::test]
async fn test_gateway_over_custom_fetcher() {
    struct Canned;

    #[async_trait::async_trait]
    impl HttpFetch for Canned {
        async fn fetch(
            &self,
            _url: &str,
            _query: &[(String, String)],
        ) -> Result<gateway::FetchResponse, ExternalError> {
            Ok(gateway::FetchResponse::new(
                200,
                r#"[{"url":"https://cdn.test/cat.jpg"}]"#,
            ))
        }
    }

    let gateway = Gateway::new(Arc::new(Canned), &GatewayConfig::default());
    let cat = gateway.fun.cat().await.unwrap();

    assert_eq!(cat.url, "https://cdn.test/cat.jpg");
}
