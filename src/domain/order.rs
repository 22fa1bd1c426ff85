use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Anything that can report the monetary total of an order.
pub trait OrderTotal {
    fn total_amount(&self) -> Decimal;
}

/// Minimal view of an order as supplied by the order aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: u64,
    pub total_amount: Decimal,
}

impl OrderSummary {
    pub fn new(order_id: u64, total_amount: Decimal) -> Self {
        Self {
            order_id,
            total_amount,
        }
    }
}

impl OrderTotal for OrderSummary {
    fn total_amount(&self) -> Decimal {
        self.total_amount
    }
}

/// Shipping fee and delivery estimate for one order under one policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingQuote {
    pub order_id: u64,
    pub policy: String,
    pub shipping_cost: Decimal,
    pub estimated_delivery_days: u32,
}
