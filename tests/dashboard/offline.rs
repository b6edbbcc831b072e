use finboard::{ChartKind, Dashboard, Interval, Range, SeriesKind, Widget};
use httpmock::{Method::GET, MockServer};

use crate::common;

fn mock_news(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_finance.json"));
    });
}

#[tokio::test]
async fn loads_a_full_page() {
    let server = MockServer::start();

    common::mock_chart(&server, "AAPL", common::chart_body(&[1, 2, 3], &[185.0, 186.0, 189.0]));
    common::mock_chart(&server, "UP", common::chart_body(&[1, 2], &[100.0, 120.0]));
    common::mock_chart(&server, "DOWN", common::chart_body(&[1, 2], &[100.0, 95.0]));
    mock_news(&server);

    let client = common::client_builder_for(&server)
        .news_api_key("test-key")
        .build()
        .unwrap();

    let page = Dashboard::new(&client, "AAPL")
        .range(Range::D5)
        .interval(Interval::D1)
        .chart_kind(ChartKind::Candlestick)
        .watchlist(["UP", "DOWN"])
        .load()
        .await;

    assert!(page.notices.is_empty(), "unexpected notices: {:?}", page.notices);

    let chart = page.chart.expect("chart panel");
    assert_eq!(chart.symbol, "AAPL");
    assert_eq!(chart.candles.len(), 3);
    assert_eq!(chart.recipe.panes[0].series, SeriesKind::Ohlc);

    let movers: Vec<_> = page.movers.iter().map(|e| e.symbol.as_str()).collect();
    assert_eq!(movers, ["UP", "DOWN"]);

    assert_eq!(page.news.first().unwrap().date, "2024-01-02");
}

#[tokio::test]
async fn each_widget_degrades_independently() {
    let server = MockServer::start();

    // Primary chart is down, one watchlist symbol is down, news key invalid.
    common::mock_chart_failure(&server, "AAPL", 500);
    common::mock_chart(&server, "UP", common::chart_body(&[1, 2], &[100.0, 120.0]));
    common::mock_chart_failure(&server, "DOWN", 503);
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"status":"error","code":"apiKeyInvalid","message":"bad key"}"#);
    });

    let client = common::client_builder_for(&server)
        .news_api_key("bad-key")
        .build()
        .unwrap();

    let page = Dashboard::new(&client, "AAPL")
        .watchlist(["UP", "DOWN"])
        .load()
        .await;

    // the page renders: the healthy widget keeps its data
    assert!(page.chart.is_none());
    assert_eq!(page.movers.len(), 1);
    assert_eq!(page.movers[0].symbol, "UP");
    assert!(page.news.is_empty());

    // and every degraded widget left a notice
    let widgets: Vec<_> = page.notices.iter().map(|n| n.widget).collect();
    assert!(widgets.contains(&Widget::PriceChart));
    assert!(widgets.contains(&Widget::TopMovers));
    assert!(widgets.contains(&Widget::News));
}

#[tokio::test]
async fn page_never_fails_even_with_everything_down() {
    let server = MockServer::start();
    // No mocks at all: every request 404s.

    let client = common::client_builder_for(&server)
        .news_api_key("test-key")
        .build()
        .unwrap();

    let page = Dashboard::new(&client, "AAPL").watchlist(["X"]).load().await;

    assert!(page.chart.is_none());
    assert!(page.movers.is_empty());
    assert!(page.news.is_empty());
    assert_eq!(page.notices.len(), 3);
}
