/*
[INPUT]:  API key pair from the environment and order parameters
[OUTPUT]: Order responses, or nothing in simulation mode
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use bittrex_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: Trading operations
///
/// Runs in simulation mode unless BITTREX_LIVE=1 is set, so by default no
/// order reaches the exchange.
#[tokio::main]
async fn main() {
    println!("=== Bittrex Trading Example ===\n");

    let api_key = std::env::var("BITTREX_API_KEY").unwrap_or_default();
    let api_secret = std::env::var("BITTREX_API_SECRET").unwrap_or_default();
    let live = std::env::var("BITTREX_LIVE").is_ok_and(|v| v == "1");

    let client = match BittrexClient::with_credentials(api_key, api_secret, !live, false) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (simulation: {})", client.simulation());

    let quantity = Decimal::from_str("10").unwrap_or_default();
    let rate = Decimal::from_str("0.01").unwrap_or_default();

    println!("\nPlacing limit buy BTC-LTC {} @ {}...", quantity, rate);
    match client.buylimit("BTC-LTC", quantity, rate, None).await {
        Ok(Some(response)) => match ApiResponse::from_value(&response).and_then(ApiResponse::into_result) {
            Ok(result) => println!("✓ Order placed: {}", result),
            Err(e) => println!("✗ Rejected: {}", e),
        },
        Ok(None) => println!("✓ Simulated, nothing sent"),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying open orders...");
    match client.getopenorders("BTC-LTC", None).await {
        Ok(orders) => println!("✓ Open orders: {}", orders),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
