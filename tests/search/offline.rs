use httpmock::Method::GET;
use stockwatch_rs::{SearchBuilder, search};

use crate::common::{API_KEY, client, fixture, setup_server};

#[tokio::test]
async fn query_maps_and_uppercases_results() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/search")
            .query_param("q", "apple")
            .header("x-finnhub-token", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("search", "apple", "json"));
    });

    let rows = search(&client(&server), Some("  apple ")).await.unwrap();

    mock.assert();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].symbol, "AAPL");
    assert_eq!(rows[0].name, "APPLE INC");
    assert_eq!(rows[0].exchange, "AAPL");
    assert_eq!(rows[2].kind, "REIT");

    let last = &rows[3];
    assert_eq!(last.symbol, "AAPL.MX");
    assert_eq!(last.exchange, "US");
    assert_eq!(last.kind, "Stock");
}

#[tokio::test]
async fn results_are_truncated_to_limit() {
    let server = setup_server();
    let hits: Vec<String> = (0..20)
        .map(|i| format!(r#"{{"symbol":"S{i}","description":"Stock {i}","displaySymbol":"S{i}","type":"Common Stock"}}"#))
        .collect();
    let body = format!(r#"{{"count":20,"result":[{}]}}"#, hits.join(","));
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/search").query_param("q", "s");
        then.status(200).body(body.as_str());
    });

    let rows = search(&client(&server), Some("s")).await.unwrap();
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[14].symbol, "S14");

    let rows = SearchBuilder::new(&client(&server))
        .query("s")
        .limit(3)
        .fetch()
        .await
        .unwrap();
    assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn query_failures_yield_no_results() {
    let server = setup_server();
    let denied = server.mock(|when, then| {
        when.method(GET).path("/api/v1/search").query_param("q", "apple");
        then.status(401).body("Invalid API key");
    });
    let garbled = server.mock(|when, then| {
        when.method(GET).path("/api/v1/search").query_param("q", "msft");
        then.status(200).body("<html>maintenance</html>");
    });

    let rows = search(&client(&server), Some("apple")).await.unwrap();
    denied.assert();
    assert!(rows.is_empty());

    let rows = search(&client(&server), Some("msft")).await.unwrap();
    garbled.assert();
    assert!(rows.is_empty());
}
