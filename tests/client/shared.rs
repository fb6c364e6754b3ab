use stockwatch_rs::{FhClient, NewsBuilder, SharedClient};

use crate::common::{API_KEY, base_api, mock_general_news, setup_server};

#[tokio::test]
async fn shared_client_is_built_once_and_usable() {
    let server = setup_server();
    let general = mock_general_news(&server);

    let shared = SharedClient::new(
        FhClient::builder()
            .api_key(API_KEY)
            .base_api(base_api(&server)),
    );
    assert!(!shared.is_initialized());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            tokio::spawn(async move {
                let client = shared.get().await.unwrap();
                NewsBuilder::new(&client).fetch().await.unwrap().len()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.await.unwrap(), 6);
    }

    assert!(shared.is_initialized());
    general.assert_hits(4);
}
