/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::{HistoricalOrder, PendingOrder};

/// Authenticated responses report failure through a numeric `error` field.
pub trait ApiResponse {
    /// 0 on success
    fn error_code(&self) -> i64;

    fn message(&self) -> &str;
}

macro_rules! impl_api_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ApiResponse for $ty {
                fn error_code(&self) -> i64 {
                    self.error
                }

                fn message(&self) -> &str {
                    &self.msg
                }
            }
        )+
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResponse {
    pub error: i64,
    #[serde(default)]
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub error: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(rename = "accNo", default)]
    pub acc_no: i64,
    #[serde(rename = "btcBal", default)]
    pub btc_bal: Decimal,
    #[serde(rename = "btcDeposit", default)]
    pub btc_deposit: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "sgdBal", default)]
    pub sgd_bal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrders {
    pub error: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub orders: Vec<PendingOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHistory {
    pub error: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub orders: Vec<HistoricalOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    pub error: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub pending_oid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderResponse {
    pub error: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub msg: String,
}

/// On success `msg` holds the withdrawal id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawResponse {
    pub error: i64,
    #[serde(default)]
    pub msg: String,
}

impl_api_response!(
    TestResponse,
    AccountInfo,
    PendingOrders,
    OrderHistory,
    PlaceOrderResponse,
    CancelOrderResponse,
    WithdrawResponse,
);

/// Body sent for key or permission failures: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionError {
    pub error: String,
}
