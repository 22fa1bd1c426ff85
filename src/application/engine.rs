use super::payments::PaymentProcessorRegistry;
use super::shipping_policy;
use crate::config::FulfillmentConfig;
use crate::domain::order::{OrderSummary, ShippingQuote};
use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::ports::{ShippingGatewayBox, ShippingPolicyBox};
use crate::domain::shipping::{ShippingRequest, ShippingResponse};
use crate::error::Result;
use crate::infrastructure::carrier::ShipmentStoreBox;
use crate::infrastructure::carrier::cj_adapter::CjShippingAdapter;
use crate::infrastructure::carrier::cj_api::CjShippingApi;

/// The entry point for order fulfillment.
///
/// `FulfillmentEngine` is built once at service start and owns the payment
/// processors, the shipping policy and the carrier gateway (including the
/// carrier's shipment registry) for its whole lifetime.
pub struct FulfillmentEngine {
    payments: PaymentProcessorRegistry,
    shipping_policy: ShippingPolicyBox,
    carrier: ShippingGatewayBox,
}

impl FulfillmentEngine {
    /// Creates a new `FulfillmentEngine` from explicit parts.
    pub fn new(
        payments: PaymentProcessorRegistry,
        shipping_policy: ShippingPolicyBox,
        carrier: ShippingGatewayBox,
    ) -> Self {
        Self {
            payments,
            shipping_policy,
            carrier,
        }
    }

    /// Wires the configured payment methods and shipping policy to the CJ
    /// carrier running on `shipments`.
    pub fn from_config(config: &FulfillmentConfig, shipments: ShipmentStoreBox) -> Self {
        let carrier = CjShippingAdapter::new(CjShippingApi::new(shipments));
        Self::new(
            PaymentProcessorRegistry::with_methods(&config.payment_methods),
            config.shipping_policy.build(),
            Box::new(carrier),
        )
    }

    pub fn process_payment(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        self.payments.process(request)
    }

    pub fn quote_shipping(&self, order: &OrderSummary) -> ShippingQuote {
        shipping_policy::quote(self.shipping_policy.as_ref(), order.order_id, order)
    }

    pub async fn register_shipment(&self, request: &ShippingRequest) -> Result<ShippingResponse> {
        self.carrier.register_shipping(request).await
    }

    pub async fn shipment_status(&self, tracking_number: &str) -> Result<ShippingResponse> {
        self.carrier.get_shipping_status(tracking_number).await
    }

    pub async fn cancel_shipment(
        &self,
        tracking_number: &str,
        reason: &str,
    ) -> Result<ShippingResponse> {
        self.carrier.cancel_shipping(tracking_number, reason).await
    }

    pub fn carrier_name(&self) -> &'static str {
        self.carrier.carrier_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::Amount;
    use crate::domain::shipping::PackageType;
    use crate::error::FulfillmentError;
    use crate::infrastructure::in_memory::InMemoryShipmentStore;
    use rust_decimal_macros::dec;

    fn engine() -> FulfillmentEngine {
        FulfillmentEngine::from_config(
            &FulfillmentConfig::default(),
            Box::new(InMemoryShipmentStore::new()),
        )
    }

    fn shipping_request(receiver_name: &str) -> ShippingRequest {
        ShippingRequest {
            order_id: 3,
            sender_name: "Store".to_string(),
            sender_phone: "02-000-0000".to_string(),
            sender_address: "Seoul".to_string(),
            receiver_name: receiver_name.to_string(),
            receiver_phone: "010-0000-0000".to_string(),
            receiver_address: "Busan".to_string(),
            receiver_zip_code: "48058".to_string(),
            weight: 2000,
            package_type: PackageType::Bag,
            delivery_message: "Leave at door".to_string(),
        }
    }

    #[test]
    fn test_engine_payment_dispatch() {
        let engine = engine();
        let request = PaymentRequest::new(1, Amount::new(20_000).unwrap(), "SIMPLE_PAYMENT", "PAYCO");
        let result = engine.process_payment(&request).unwrap();
        assert!(result.success());
        assert_eq!(result.fee_amount(), 300);

        let unknown = PaymentRequest::new(1, Amount::new(20_000).unwrap(), "CASH", "n/a");
        assert!(matches!(
            engine.process_payment(&unknown),
            Err(FulfillmentError::UnsupportedPaymentMethod(_))
        ));
    }

    #[test]
    fn test_engine_quote_uses_economy_by_default() {
        let engine = engine();
        let quote = engine.quote_shipping(&OrderSummary::new(8, dec!(12000)));
        assert_eq!(quote.policy, "Standard shipping");
        assert_eq!(quote.shipping_cost, dec!(3000));
        assert_eq!(quote.estimated_delivery_days, 3);
    }

    #[tokio::test]
    async fn test_engine_shipment_lifecycle() {
        let engine = engine();
        let registered = engine.register_shipment(&shipping_request("01")).await.unwrap();
        assert!(registered.success);
        let tracking_number = registered.tracking_number.clone().unwrap();

        let status = engine.shipment_status(&tracking_number).await.unwrap();
        assert_eq!(status.tracking_number.as_deref(), Some(tracking_number.as_str()));

        let cancelled = engine.cancel_shipment(&tracking_number, "out of stock").await.unwrap();
        assert!(cancelled.success);
        assert!(cancelled.message.contains("out of stock"));

        assert!(matches!(
            engine.shipment_status(&tracking_number).await,
            Err(FulfillmentError::TrackingNotFound(_))
        ));
        assert_eq!(engine.carrier_name(), "CJ Logistics");
    }
}
