use stockwatch_rs::{CacheMode, ProfileBuilder, fetch_profile};

use crate::common::{client, client_builder, mock_profile, mock_profile_body, setup_server};

#[tokio::test]
async fn profile_parses_fixture() {
    let server = setup_server();
    let mock = mock_profile(&server, "AAPL");

    let profile = fetch_profile(&client(&server), "aapl").await.unwrap().unwrap();

    mock.assert();
    assert_eq!(profile.ticker, "AAPL");
    assert_eq!(profile.name.as_deref(), Some("Apple Inc"));
    assert_eq!(profile.ipo.as_deref(), Some("1980-12-12"));
    assert_eq!(profile.industry.as_deref(), Some("Technology"));
    assert!(profile.share_outstanding.unwrap() > 0.0);
}

#[tokio::test]
async fn unknown_symbol_is_none() {
    let server = setup_server();
    let _mock = mock_profile_body(&server, "NOPE", 200, "{}");

    assert!(fetch_profile(&client(&server), "NOPE").await.unwrap().is_none());
}

#[tokio::test]
async fn bypass_skips_the_cache() {
    let server = setup_server();
    let mock = mock_profile(&server, "MSFT");
    let client = client_builder(&server)
        .cache_ttl(std::time::Duration::from_secs(30))
        .build()
        .unwrap();

    ProfileBuilder::new(&client, "MSFT").fetch().await.unwrap();
    ProfileBuilder::new(&client, "MSFT").fetch().await.unwrap();
    mock.assert_hits(1);

    ProfileBuilder::new(&client, "MSFT")
        .cache_mode(CacheMode::Bypass)
        .fetch()
        .await
        .unwrap();
    mock.assert_hits(2);
}

#[tokio::test]
async fn not_found_maps_to_error_variant() {
    let server = setup_server();
    let _mock = mock_profile_body(&server, "GONE", 404, "");

    let err = fetch_profile(&client(&server), "GONE").await.unwrap_err();
    match err {
        stockwatch_rs::FhError::NotFound { url } => {
            assert!(url.contains("symbol=GONE"));
            assert!(!url.contains("test-key"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}
