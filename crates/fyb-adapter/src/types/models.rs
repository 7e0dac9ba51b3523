/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::OrderSide;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub ask: Decimal,
    pub bid: Decimal,
    pub last: Decimal,
    pub vol: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub amount: Decimal,
    pub date: i64,
    pub price: Decimal,
    pub tid: i64,
}

/// One `[price, amount]` level of the order book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceAmount {
    pub price: Decimal,
    pub amount: Decimal,
}

impl PriceAmount {
    /// Parse a `[price, amount]` pair whose members are numbers or strings
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value.as_array()?.as_slice() {
            [price, amount] => Some(Self {
                price: serde_helpers::decimal_from_value(price)?,
                amount: serde_helpers::decimal_from_value(amount)?,
            }),
            _ => None,
        }
    }
}

/// Order book snapshot. Malformed levels are dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(deserialize_with = "serde_helpers::deserialize_levels")]
    pub asks: Vec<PriceAmount>,
    #[serde(deserialize_with = "serde_helpers::deserialize_levels")]
    pub bids: Vec<PriceAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub date: i64,
    pub price: Decimal,
    pub qty: Decimal,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub ticket: i64,
}

/// Order history entry; prices carry a currency prefix (`S$3.00`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalOrder {
    pub date_created: i64,
    pub date_executed: i64,
    pub price: String,
    pub qty: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "type", default)]
    pub order_type: String,
    pub ticket: i64,
}

mod serde_helpers {
    use super::{Decimal, PriceAmount};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
        match value {
            Value::String(raw) => Decimal::from_str(raw.trim()).ok(),
            Value::Number(number) => Decimal::from_str(&number.to_string())
                .or_else(|_| Decimal::from_scientific(&number.to_string()))
                .ok(),
            _ => None,
        }
    }

    pub fn deserialize_levels<'de, D>(deserializer: D) -> Result<Vec<PriceAmount>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values: Vec<Value> = Vec::deserialize(deserializer)?;
        Ok(values.iter().filter_map(PriceAmount::from_value).collect())
    }
}
