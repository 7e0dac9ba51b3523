/*
[INPUT]:  API key/secret and optional query limits
[OUTPUT]: Account data (balances, pending orders, order history)
[POS]:    HTTP layer - account endpoints (signed POST)
[UPDATE]: When adding new account endpoints or changing form fields
*/

use crate::http::{Form, FybClient, Result};
use crate::types::{AccountInfo, OrderHistory, PendingOrders, TestResponse};

impl FybClient {
    /// Check that the configured key and secret are accepted
    ///
    /// POST /test
    pub async fn api_token_test(&self) -> Result<TestResponse> {
        self.post_private("test", Form::new()).await
    }

    /// Query account number, balances and deposit address
    ///
    /// POST /getaccinfo
    pub async fn account_info(&self) -> Result<AccountInfo> {
        self.post_private("getaccinfo", Form::new()).await
    }

    /// POST /getpendingorders
    pub async fn pending_orders(&self) -> Result<PendingOrders> {
        self.post_private("getpendingorders", Form::new()).await
    }

    /// Query the last `limit` orders
    ///
    /// POST /getorderhistory
    pub async fn order_history(&self, limit: i64) -> Result<OrderHistory> {
        let payload = Form::from([("limit".to_string(), limit.to_string())]);
        self.post_private("getorderhistory", payload).await
    }
}
