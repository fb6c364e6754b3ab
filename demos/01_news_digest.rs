use std::time::Duration;

use stockwatch_rs::{FhClientBuilder, NewsBuilder, SharedClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    stockwatch_rs::init_tracing();

    let symbols: Vec<String> = std::env::args().skip(1).collect();

    let shared = SharedClient::new(
        FhClientBuilder::from_env()?
            .timeout(Duration::from_secs(10))
            .cache_ttl(Duration::from_secs(300)),
    );
    let client = shared.get().await?;

    let articles = NewsBuilder::new(&client).symbols(&symbols).fetch().await?;
    if articles.is_empty() {
        println!("No news available.");
    }
    for a in &articles {
        let when = chrono::DateTime::from_timestamp(a.datetime, 0)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        let tag = a.related_symbol.as_deref().unwrap_or("market");
        println!("[{tag:>6}] {when}  {}  ({})", a.headline, a.source);
        println!("         {}", a.url);
    }
    Ok(())
}
