use crate::domain::order::{OrderTotal, ShippingQuote};
use crate::domain::ports::{ShippingPolicy, ShippingPolicyBox};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Default policy: flat delivery cost, waived above a free-shipping threshold.
#[derive(Debug, Default, Clone, Copy)]
pub struct EconomyShipping;

impl EconomyShipping {
    pub const DELIVERY_COST: Decimal = dec!(3000);
    pub const FREE_SHIPPING_THRESHOLD: Decimal = dec!(40000);
}

impl ShippingPolicy for EconomyShipping {
    fn policy_name(&self) -> &'static str {
        "Standard shipping"
    }

    fn calculate_shipping_cost(&self, order: &dyn OrderTotal) -> Decimal {
        if order.total_amount() >= Self::FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            Self::DELIVERY_COST
        }
    }

    /// Coarse estimate: anything worth more than one delivery fee ships faster.
    fn estimated_delivery_days(&self, order: &dyn OrderTotal) -> u32 {
        if order.total_amount() > Self::DELIVERY_COST {
            3
        } else {
            5
        }
    }
}

/// Next-day delivery with a higher fee and a higher free-shipping threshold.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressShipping;

impl ExpressShipping {
    pub const DELIVERY_COST: Decimal = dec!(10000);
    pub const FREE_SHIPPING_THRESHOLD: Decimal = dec!(100000);
}

impl ShippingPolicy for ExpressShipping {
    fn policy_name(&self) -> &'static str {
        "Express shipping"
    }

    fn calculate_shipping_cost(&self, order: &dyn OrderTotal) -> Decimal {
        if order.total_amount() >= Self::FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            Self::DELIVERY_COST
        }
    }

    fn estimated_delivery_days(&self, _order: &dyn OrderTotal) -> u32 {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingPolicyKind {
    #[default]
    Economy,
    Express,
}

impl ShippingPolicyKind {
    pub fn build(self) -> ShippingPolicyBox {
        match self {
            ShippingPolicyKind::Economy => Box::new(EconomyShipping),
            ShippingPolicyKind::Express => Box::new(ExpressShipping),
        }
    }
}

/// Prices a single order under `policy`.
pub fn quote(policy: &dyn ShippingPolicy, order_id: u64, order: &dyn OrderTotal) -> ShippingQuote {
    ShippingQuote {
        order_id,
        policy: policy.policy_name().to_string(),
        shipping_cost: policy.calculate_shipping_cost(order),
        estimated_delivery_days: policy.estimated_delivery_days(order),
    }
}
