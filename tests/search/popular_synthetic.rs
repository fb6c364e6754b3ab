use std::time::Duration;

use stockwatch_rs::{SearchBuilder, StockSummary};

use crate::common::{client, mock_profile, mock_profile_body, setup_server};

#[tokio::test]
async fn no_query_lists_popular_profiles_in_order() {
    let server = setup_server();
    let aapl = mock_profile(&server, "AAPL");
    let msft = mock_profile(&server, "MSFT");
    let unknown = mock_profile_body(&server, "ZZZZ", 200, "{}");
    let broken = mock_profile_body(&server, "BRKN", 500, "oops");

    let rows = SearchBuilder::new(&client(&server))
        .popular_symbols(&["AAPL", "ZZZZ", "BRKN", "MSFT"])
        .profile_delay(Duration::ZERO)
        .fetch()
        .await
        .unwrap();

    aapl.assert();
    msft.assert();
    unknown.assert();
    broken.assert();
    assert_eq!(
        rows,
        vec![
            StockSummary {
                symbol: "AAPL".into(),
                name: "Apple Inc".into(),
                exchange: "NASDAQ NMS - GLOBAL MARKET".into(),
                kind: "Common Stock".into(),
            },
            StockSummary {
                symbol: "MSFT".into(),
                name: "Microsoft Corp".into(),
                exchange: "NASDAQ NMS - GLOBAL MARKET".into(),
                kind: "Common Stock".into(),
            },
        ]
    );
}

#[tokio::test]
async fn blank_query_with_no_profiles_returns_placeholders() {
    let server = setup_server();
    let down = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/api/v1/stock/profile2");
        then.status(503).body("down");
    });

    let rows = SearchBuilder::new(&client(&server))
        .query("   ")
        .profile_delay(Duration::ZERO)
        .fetch()
        .await
        .unwrap();

    down.assert_hits(5);
    let symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["AAPL", "MSFT"]);
    assert!(rows.iter().all(|r| r.exchange == "NASDAQ"));
    assert_eq!(rows[0].name, "Apple Inc (Fallback)");
    assert_eq!(rows[1].name, "Microsoft Corp (Fallback)");
}
