/*
[INPUT]:  FYB_KEY / FYB_SECRET environment variables
[OUTPUT]: Account info and pending orders from the sandbox endpoint
[POS]:    Examples - signed account and trading operations
[UPDATE]: When trading API changes
*/

use std::sync::Arc;

use fyb_adapter::*;

/// Example: Signed requests against the sandbox endpoint
///
/// Every authenticated call carries a `timestamp` form field and an
/// HMAC-SHA1 `sig` header computed over the encoded form body.
#[tokio::main]
async fn main() {
    println!("=== FYB Trading Example ===\n");

    let key = std::env::var("FYB_KEY").unwrap_or_default();
    let secret = std::env::var("FYB_SECRET").unwrap_or_default();

    // One limiter for every handle using these credentials.
    let limiter = RateLimiter::default();
    let config = ClientConfig::for_market(Market::Test).with_credentials(key, secret);
    let http_client = match reqwest::Client::builder()
        .user_agent("fyb-trading-example")
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", e);
            return;
        }
    };
    let client = match FybClient::builder(config)
        .rate_limiter(limiter)
        .transport(Arc::new(ReqwestTransport::with_client(http_client)))
        .observer(Arc::new(TracingObserver))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    println!("\nChecking API key...");
    match client.api_token_test().await {
        Ok(res) => println!("✓ Key accepted: {}", res.msg),
        Err(FybError::MissingCredentials) => {
            println!("✗ Set FYB_KEY and FYB_SECRET to run the signed calls");
            return;
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.account_info().await {
        Ok(info) => println!("✓ Account {}: {} BTC", info.acc_no, info.btc_bal),
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.pending_orders().await {
        Ok(res) => println!("✓ {} pending orders", res.orders.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    let side: OrderSide = match "buy".parse() {
        Ok(side) => side,
        Err(e) => {
            eprintln!("✗ {}", e);
            return;
        }
    };
    let req = PlaceOrderRequest {
        side,
        price: rust_decimal::Decimal::new(12, 1),
        qty: rust_decimal::Decimal::new(11, 1),
    };
    println!("\nExample order form: {:?}", req.to_form());
    match client.place_order(req.side, req.price, req.qty).await {
        Ok(res) => println!("✓ Pending order id {}", res.pending_oid),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
