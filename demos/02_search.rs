use stockwatch_rs::{FhClient, search};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = FhClient::from_env()?;
    let query = std::env::args().nth(1);

    for row in search(&client, query.as_deref()).await? {
        println!("{:<10} {:<12} {:<14} {}", row.symbol, row.exchange, row.kind, row.name);
    }
    Ok(())
}
