/*
[INPUT]:  Typed order and withdrawal parameters
[OUTPUT]: Form fields for authenticated endpoints
[POS]:    Data layer - request payloads
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;

use super::enums::{OrderSide, WithdrawType};
use crate::http::Form;

/// Render an amount the way the exchange expects: six fractional digits.
pub fn format_decimal(value: Decimal) -> String {
    format!("{:.6}", value.round_dp(6))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrderRequest {
    pub side: OrderSide,
    pub price: Decimal,
    pub qty: Decimal,
}

impl PlaceOrderRequest {
    pub fn to_form(&self) -> Form {
        Form::from([
            ("type".to_string(), self.side.as_str().to_string()),
            ("price".to_string(), format_decimal(self.price)),
            ("qty".to_string(), format_decimal(self.qty)),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawRequest {
    pub amount: Decimal,
    /// Bitcoin address; blank for XFERS
    pub destination: String,
    pub kind: WithdrawType,
}

impl WithdrawRequest {
    pub fn to_form(&self) -> Form {
        Form::from([
            (
                "destination".to_string(),
                self.destination.trim_matches(['\r', '\n', ' ']).to_string(),
            ),
            ("amount".to_string(), format_decimal(self.amount)),
            ("type".to_string(), self.kind.as_str().to_string()),
        ])
    }
}
