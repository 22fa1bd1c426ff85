use super::bank_transfer::BankTransferProcessor;
use super::simple_pay::SimplePayProcessor;
use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::ports::{PaymentProcessor, PaymentProcessorBox};
use crate::error::{FulfillmentError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Payment methods that can be enabled through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethodKind {
    AccountTransfer,
    SimplePayment,
}

impl PaymentMethodKind {
    pub const ALL: [PaymentMethodKind; 2] = [Self::AccountTransfer, Self::SimplePayment];

    pub fn build(self) -> PaymentProcessorBox {
        match self {
            PaymentMethodKind::AccountTransfer => Box::new(BankTransferProcessor),
            PaymentMethodKind::SimplePayment => Box::new(SimplePayProcessor),
        }
    }
}

/// Routes payment requests to the first registered processor that supports
/// the requested method.
///
/// Registration order is search order.
#[derive(Default)]
pub struct PaymentProcessorRegistry {
    processors: Vec<PaymentProcessorBox>,
}

impl PaymentProcessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_methods(methods: &[PaymentMethodKind]) -> Self {
        let mut registry = Self::new();
        for method in methods {
            registry.register(method.build());
        }
        registry
    }

    pub fn register(&mut self, processor: PaymentProcessorBox) -> &mut Self {
        self.processors.push(processor);
        self
    }

    pub fn processor_for(&self, payment_method: &str) -> Result<&dyn PaymentProcessor> {
        self.processors
            .iter()
            .find(|p| p.supports(payment_method))
            .map(Box::as_ref)
            .ok_or_else(|| FulfillmentError::UnsupportedPaymentMethod(payment_method.to_string()))
    }

    /// Delegates to the matching processor.
    ///
    /// A method nobody supports is an error; a declined payment is not.
    pub fn process(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        let processor = self.processor_for(&request.payment_method)?;
        debug!(
            order_id = request.order_id,
            method = processor.method(),
            "Selected payment processor"
        );
        Ok(processor.process(request))
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}
