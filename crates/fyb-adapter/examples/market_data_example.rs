/*
[INPUT]:  Market selection (FYB_MARKET=sgd|sek|test)
[OUTPUT]: Market data (ticker, order book, recent trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use fyb_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no credentials required)
///
/// Run with `RUST_LOG=fyb_adapter=debug` to see every request dumped.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== FYB Market Data Example ===\n");

    let market = match std::env::var("FYB_MARKET").as_deref() {
        Ok("sek") => Market::Sek,
        Ok("test") => Market::Test,
        _ => Market::Sgd,
    };

    let client = match FybClient::builder(ClientConfig::for_market(market))
        .observer(std::sync::Arc::new(TracingObserver))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.config().base_url);

    println!("Querying ticker...");
    match client.ticker().await {
        Ok(ticker) => println!("✓ Ticker: {:?}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book...");
    match client.order_book().await {
        Ok(book) => println!(
            "✓ Order book: {} asks, {} bids, best ask {:?}",
            book.asks.len(),
            book.bids.len(),
            book.asks.first()
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying trades since tid 0...");
    match client.trade_history(0).await {
        Ok(trades) => println!("✓ {} trades, last {:?}", trades.len(), trades.last()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
