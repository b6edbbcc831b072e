use finboard::HistoryBuilder;
use httpmock::{Method::GET, MockServer};

use crate::common;

#[tokio::test]
async fn offline_history_uses_recorded_fixture() {
    let server = MockServer::start();
    let sym = "AAPL";

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{sym}"))
            .query_param("range", "5d")
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("history_chart_AAPL.json"));
    });

    let client = common::client_for(&server);
    let candles = HistoryBuilder::new(&client, sym)
        .range(finboard::Range::D5)
        .fetch()
        .await
        .unwrap();

    mock.assert();

    assert_eq!(candles.len(), 4);
    assert_eq!(candles[0].ts, 1704202200);
    assert_eq!(candles[0].close, 185.64);
    assert_eq!(candles[0].volume, Some(82488700));
    // the last bucket in the fixture has no open; the row survives anyway
    assert_eq!(candles[3].open, None);
    assert_eq!(candles[3].close, 181.18);
}

#[tokio::test]
async fn empty_series_is_ok_not_error() {
    let server = MockServer::start();
    let sym = "NEWLIST";

    common::mock_chart(&server, sym, common::empty_chart_body());

    let client = common::client_for(&server);
    let candles = HistoryBuilder::new(&client, sym).fetch().await.unwrap();
    assert!(candles.is_empty());
}

#[tokio::test]
async fn http_error_status_maps_to_status_error() {
    let server = MockServer::start();
    let sym = "MISSING";

    common::mock_chart_failure(&server, sym, 404);

    let client = common::client_for(&server);
    let err = HistoryBuilder::new(&client, sym).fetch().await.unwrap_err();
    match err {
        finboard::BoardError::Status { status, .. } => assert_eq!(status, 404),
        other => panic!("expected Status error, got {other:?}"),
    }
}
