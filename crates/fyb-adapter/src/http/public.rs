/*
[INPUT]:  Trade id cursor for history queries
[OUTPUT]: Market data (order book, ticker, trades)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{FybClient, Result};
use crate::types::{OrderBook, Ticker, Trade};

impl FybClient {
    /// Query order book depth
    ///
    /// GET /orderbook.json
    pub async fn order_book(&self) -> Result<OrderBook> {
        self.get_public("orderbook.json").await
    }

    /// Query detailed ticker
    ///
    /// GET /tickerdetailed.json
    pub async fn ticker(&self) -> Result<Ticker> {
        self.get_public("tickerdetailed.json").await
    }

    /// Trades after trade id `since_tid`.
    ///
    /// Cache the history and pass the last known id to fetch only new trades.
    ///
    /// GET /trades.json?since={tid}
    pub async fn trade_history(&self, since_tid: i64) -> Result<Vec<Trade>> {
        self.get_public(&format!("trades.json?since={since_tid}"))
            .await
    }
}
