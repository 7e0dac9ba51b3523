/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::FybError;

/// Order direction, sent as `B` or `S`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    #[serde(rename = "B")]
    Buy,
    #[serde(rename = "S")]
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "B",
            OrderSide::Sell => "S",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSide {
    type Err = FybError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" | "BUY" => Ok(OrderSide::Buy),
            "S" | "SELL" => Ok(OrderSide::Sell),
            _ => Err(FybError::InvalidArgument(
                "orderType must be S or B".to_string(),
            )),
        }
    }
}

/// Withdrawal rail. XFERS is only offered by FYB-SG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WithdrawType {
    Btc,
    Xfers,
}

impl WithdrawType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawType::Btc => "BTC",
            WithdrawType::Xfers => "XFERS",
        }
    }
}

impl fmt::Display for WithdrawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WithdrawType {
    type Err = FybError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BTC" => Ok(WithdrawType::Btc),
            "XFERS" => Ok(WithdrawType::Xfers),
            _ => Err(FybError::InvalidArgument(
                "destinationType must be BTC or XFERS".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("B", OrderSide::Buy)]
    #[case("buy", OrderSide::Buy)]
    #[case(" Sell ", OrderSide::Sell)]
    #[case("s", OrderSide::Sell)]
    fn test_order_side_parse(#[case] raw: &str, #[case] expected: OrderSide) {
        assert_eq!(raw.parse::<OrderSide>().unwrap(), expected);
    }

    #[test]
    fn test_order_side_rejects_unknown() {
        let err = "hold".parse::<OrderSide>().unwrap_err();
        assert!(matches!(err, FybError::InvalidArgument(_)));
    }

    #[test]
    fn test_order_side_serde() {
        assert_eq!(serde_json::to_string(&OrderSide::Buy).unwrap(), "\"B\"");
        let side: OrderSide = serde_json::from_str("\"S\"").unwrap();
        assert_eq!(side, OrderSide::Sell);
    }

    #[test]
    fn test_withdraw_type_parse() {
        assert_eq!("btc".parse::<WithdrawType>().unwrap(), WithdrawType::Btc);
        assert_eq!("XFERS".parse::<WithdrawType>().unwrap(), WithdrawType::Xfers);
        assert!("paypal".parse::<WithdrawType>().is_err());
        assert_eq!(WithdrawType::Xfers.to_string(), "XFERS");
    }
}
