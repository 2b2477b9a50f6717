/*
[INPUT]:  Market identifier (e.g., "BTC-LTC")
[OUTPUT]: Market data (markets, ticker, order book)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use bittrex_adapter::*;

/// Example: Query market data (no authentication required)
///
/// Caching is on, so the second `getmarkets` call is served locally.
#[tokio::main]
async fn main() {
    println!("=== Bittrex Market Data Example ===\n");

    let config = ClientConfig {
        cached: true,
        ..ClientConfig::default()
    };
    let client = match BittrexClient::with_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let market = "BTC-LTC";

    println!("Querying markets...");
    match client.getmarkets(None).await {
        Ok(markets) => println!("✓ Markets: {}", markets),
        Err(e) => println!("✗ Error: {}", e),
    }
    match client.getmarkets(None).await {
        Ok(_) => println!("✓ Markets again (cached, {} entries)", client.cache_len().await),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying ticker for {}...", market);
    match client.getticker(market, None).await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for {}...", market);
    match client
        .getorderbook(market, Some(OrderBookType::Buy), Some(5), None)
        .await
    {
        Ok(book) => println!("✓ Order book: {}", book),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
