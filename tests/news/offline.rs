use finboard::news::{self, UNKNOWN_DATE};
use finboard::{BoardError, NewsBuilder};
use httpmock::{Method::GET, MockServer};

use crate::common;

#[tokio::test]
async fn offline_news_uses_recorded_fixture() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "finance")
            .query_param("apiKey", "test-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_finance.json"));
    });

    let client = common::client_builder_for(&server)
        .news_api_key("test-key")
        .build()
        .unwrap();

    let articles = NewsBuilder::new(&client).fetch().await.unwrap();
    mock.assert();

    assert_eq!(articles.len(), 5);
    assert_eq!(
        articles[0].display_title(),
        "Markets rally as rate cut hopes build"
    );
    // placeholders appear only through the display accessors
    assert_eq!(articles[3].title, None);
    assert_eq!(articles[3].display_title(), "Untitled");
    assert_eq!(articles[1].display_description(), "No description");
    assert_eq!(articles[3].link(), "#");
}

#[tokio::test]
async fn fetched_articles_group_by_date_with_unknown_last() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_finance.json"));
    });

    let client = common::client_builder_for(&server)
        .news_api_key("test-key")
        .build()
        .unwrap();

    let articles = NewsBuilder::new(&client).fetch().await.unwrap();
    let total = articles.len();
    let groups = news::group_by_date(articles);

    let dates: Vec<_> = groups.iter().map(|g| g.date.as_str()).collect();
    assert_eq!(dates, ["2024-01-02", "2024-01-01", "2023-12-29", UNKNOWN_DATE]);

    // both 2024-01-02 articles, in source order
    let jan2: Vec<_> = groups[0]
        .articles
        .iter()
        .map(|a| a.display_title())
        .collect();
    assert_eq!(
        jan2,
        [
            "Markets rally as rate cut hopes build",
            "Oil prices steady after volatile week"
        ]
    );

    let grouped: usize = groups.iter().map(|g| g.articles.len()).sum();
    assert_eq!(grouped, total);
}

#[tokio::test]
async fn provider_error_envelope_is_a_data_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(401)
            .header("content-type", "application/json")
            .body(
                r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#,
            );
    });

    let client = common::client_builder_for(&server)
        .news_api_key("bad-key")
        .build()
        .unwrap();

    let err = NewsBuilder::new(&client).fetch().await.unwrap_err();
    match err {
        BoardError::Data(msg) => {
            assert!(msg.contains("apiKeyInvalid"), "unexpected message: {msg}");
        }
        other => panic!("expected Data error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_api_key_fails_before_any_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).body("{}");
    });

    // Ensure the environment fallback cannot mask the missing key.
    unsafe { std::env::remove_var(finboard::core::client::NEWS_API_KEY_ENV) };

    let client = common::client_builder_for(&server).build().unwrap();
    let err = NewsBuilder::new(&client).fetch().await.unwrap_err();

    assert!(matches!(err, BoardError::MissingApiKey));
    mock.assert_hits(0);
}

#[tokio::test]
async fn page_size_reaches_the_wire() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "stocks")
            .query_param("pageSize", "25");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status":"ok","totalResults":0,"articles":[]}"#);
    });

    let client = common::client_builder_for(&server)
        .news_api_key("test-key")
        .build()
        .unwrap();

    let articles = NewsBuilder::new(&client)
        .query("stocks")
        .page_size(25)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(articles.is_empty());
}
