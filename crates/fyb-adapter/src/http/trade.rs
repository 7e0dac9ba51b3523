/*
[INPUT]:  Order and withdrawal parameters with API key/secret
[OUTPUT]: Order tickets, cancellations and withdrawal ids
[POS]:    HTTP layer - trading endpoints (signed POST)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use rust_decimal::Decimal;

use crate::http::{Form, FybClient, Result};
use crate::types::{
    CancelOrderResponse, OrderSide, PlaceOrderRequest, PlaceOrderResponse, WithdrawRequest,
    WithdrawResponse, WithdrawType,
};

impl FybClient {
    /// Cancel a pending order by ticket number
    ///
    /// POST /cancelpendingorder
    pub async fn cancel_pending_order(&self, order_no: i64) -> Result<CancelOrderResponse> {
        let payload = Form::from([("orderNo".to_string(), order_no.to_string())]);
        self.post_private("cancelpendingorder", payload).await
    }

    /// Place a limit order for `qty` BTC at `price`
    ///
    /// POST /placeorder
    pub async fn place_order(
        &self,
        side: OrderSide,
        price: Decimal,
        qty: Decimal,
    ) -> Result<PlaceOrderResponse> {
        let req = PlaceOrderRequest { side, price, qty };
        self.post_private("placeorder", req.to_form()).await
    }

    /// Withdraw `amount` to a bitcoin address, or via XFERS (leave destination blank)
    ///
    /// POST /withdraw
    pub async fn withdraw(
        &self,
        amount: Decimal,
        destination: &str,
        kind: WithdrawType,
    ) -> Result<WithdrawResponse> {
        let req = WithdrawRequest {
            amount,
            destination: destination.to_string(),
            kind,
        };
        self.post_private("withdraw", req.to_form()).await
    }
}
