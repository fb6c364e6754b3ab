use std::collections::HashSet;

use stockwatch_rs::{NewsArticle, NewsBuilder};

use crate::common::{client, mock_company_news, mock_general_news, setup_server, today};

fn urls(articles: &[NewsArticle]) -> Vec<&str> {
    articles.iter().map(|a| a.url.as_str()).collect()
}

fn assert_newest_first(articles: &[NewsArticle]) {
    assert!(
        articles.windows(2).all(|w| w[0].datetime >= w[1].datetime),
        "articles must be sorted newest first"
    );
}

#[tokio::test]
async fn single_symbol_returns_its_valid_articles_newest_first() {
    let server = setup_server();
    let aapl = mock_company_news(&server, "AAPL");
    let general = mock_general_news(&server);

    let articles = NewsBuilder::new(&client(&server))
        .symbols(&["aapl"])
        .today(today())
        .fetch()
        .await
        .unwrap();

    aapl.assert();
    general.assert_hits(0);

    assert_eq!(
        urls(&articles),
        vec![
            "https://news.example.com/aapl/edge-higher",
            "https://news.example.com/aapl/wwdc-tools",
            "https://news.example.com/aapl/services-growth",
        ]
    );
    let first = &articles[0];
    assert_eq!(first.summary, "Investors positioned ahead of the quarterly report.");
    assert_eq!(first.source, "MarketWatch");
    assert_eq!(first.related_symbol.as_deref(), Some("AAPL"));
    assert!(articles.iter().all(|a| a.id.starts_with("AAPL-")));
}

#[tokio::test]
async fn watchlist_interleaves_symbols_and_drops_shared_urls() {
    let server = setup_server();
    let aapl = mock_company_news(&server, "AAPL");
    let msft = mock_company_news(&server, "MSFT");
    let general = mock_general_news(&server);

    let articles = NewsBuilder::new(&client(&server))
        .symbols(&["AAPL", "MSFT"])
        .today(today())
        .fetch()
        .await
        .unwrap();

    aapl.assert();
    msft.assert();
    general.assert_hits(0);

    // MSFT's second item shares a URL with an AAPL article and is skipped.
    assert_eq!(
        urls(&articles),
        vec![
            "https://news.example.com/aapl/edge-higher",
            "https://news.example.com/msft/cloud-regions",
            "https://news.example.com/aapl/wwdc-tools",
            "https://news.example.com/aapl/services-growth",
        ]
    );
    let unique: HashSet<&str> = urls(&articles).into_iter().collect();
    assert_eq!(unique.len(), articles.len());
    assert_newest_first(&articles);

    let msft_article = articles
        .iter()
        .find(|a| a.related_symbol.as_deref() == Some("MSFT"))
        .unwrap();
    assert_eq!(msft_article.id, "MSFT-1");
}

#[tokio::test]
async fn no_symbols_uses_general_feed() {
    let server = setup_server();
    let general = mock_general_news(&server);

    let articles = stockwatch_rs::NewsBuilder::new(&client(&server))
        .fetch()
        .await
        .unwrap();

    general.assert();
    assert_eq!(articles.len(), 6);
    assert_eq!(
        urls(&articles),
        vec![
            "https://news.example.com/general/open-mixed",
            "https://news.example.com/general/oil-steadies",
            "https://news.example.com/general/fed-patience",
            "https://news.example.com/general/dollar-yen",
            "https://news.example.com/general/retail-sales",
            "https://news.example.com/general/chip-rally",
        ]
    );
    // First occurrence wins on duplicate URLs.
    assert_eq!(articles[0].headline, "Stocks open mixed as yields climb");
    assert_eq!(articles[0].datetime, 1_749_560_000);
    assert_eq!(articles[0].id, "general-0");
    assert!(articles.iter().all(|a| a.related_symbol.is_none()));
}

#[tokio::test]
async fn blank_symbols_request_no_company_news() {
    let server = setup_server();
    let company = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/api/v1/company-news");
        then.status(200).body("[]");
    });
    let general = mock_general_news(&server);

    let articles = stockwatch_rs::get_news(&client(&server), &["  ", ""])
        .await
        .unwrap();

    company.assert_hits(0);
    general.assert();
    assert_eq!(articles.len(), 6);
    assert!(articles.iter().all(|a| a.id.starts_with("general-")));
}

#[tokio::test]
async fn max_articles_caps_the_digest() {
    let server = setup_server();
    let _aapl = mock_company_news(&server, "AAPL");
    let _msft = mock_company_news(&server, "MSFT");

    let articles = NewsBuilder::new(&client(&server))
        .symbols(&["AAPL", "MSFT"])
        .today(today())
        .max_articles(2)
        .fetch()
        .await
        .unwrap();

    assert_eq!(
        urls(&articles),
        vec![
            "https://news.example.com/aapl/edge-higher",
            "https://news.example.com/msft/cloud-regions",
        ]
    );
}

#[tokio::test]
async fn get_news_queries_a_window_ending_today() {
    let server = setup_server();
    let to = chrono::Utc::now().date_naive();
    let from = to - chrono::Days::new(5);
    let aapl = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/api/v1/company-news")
            .query_param("symbol", "AAPL")
            .query_param("from", from.format("%Y-%m-%d").to_string())
            .query_param("to", to.format("%Y-%m-%d").to_string());
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("company_news", "AAPL", "json"));
    });

    let articles = stockwatch_rs::get_news(&client(&server), &["AAPL"])
        .await
        .unwrap();

    aapl.assert();
    assert_eq!(articles.len(), 3);

    let json = serde_json::to_value(&articles[0]).unwrap();
    assert_eq!(json["relatedSymbol"], "AAPL");
    assert!(json.get("related_symbol").is_none());
}
