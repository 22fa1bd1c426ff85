use super::order::OrderTotal;
use super::payment::{PaymentRequest, PaymentResult};
use super::shipping::{ShippingRequest, ShippingResponse};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// A single payment method implementation.
///
/// Validation failures are reported through a declined [`PaymentResult`],
/// never through `Err`.
pub trait PaymentProcessor: Send + Sync {
    /// Label reported in every result this processor produces.
    fn method(&self) -> &'static str;
    fn process(&self, request: &PaymentRequest) -> PaymentResult;
    fn calculate_fee(&self, amount: u64) -> u64;
    /// Whether this processor handles `payment_method`. Processors registered
    /// together must not overlap.
    fn supports(&self, payment_method: &str) -> bool;
    fn max_amount(&self) -> u64;
}

pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;

/// Maps an order total to a shipping fee and a delivery estimate.
pub trait ShippingPolicy: Send + Sync {
    fn policy_name(&self) -> &'static str;
    fn calculate_shipping_cost(&self, order: &dyn OrderTotal) -> Decimal;
    fn estimated_delivery_days(&self, order: &dyn OrderTotal) -> u32;
}

pub type ShippingPolicyBox = Box<dyn ShippingPolicy>;

/// Canonical entry point to a shipping carrier.
#[async_trait]
pub trait ShippingGateway: Send + Sync {
    async fn register_shipping(&self, request: &ShippingRequest) -> Result<ShippingResponse>;
    async fn get_shipping_status(&self, tracking_number: &str) -> Result<ShippingResponse>;
    async fn cancel_shipping(&self, tracking_number: &str, reason: &str)
    -> Result<ShippingResponse>;
    fn calculate_shipping_cost(&self, request: &ShippingRequest) -> u64;
    fn carrier_name(&self) -> &'static str;
}

pub type ShippingGatewayBox = Box<dyn ShippingGateway>;
