use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::ports::PaymentProcessor;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use tracing::{debug, info};
use uuid::Uuid;

/// One-tap payment through a third-party wallet provider.
///
/// The request's `account_number` names the provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimplePayProcessor;

impl SimplePayProcessor {
    pub const METHOD: &'static str = "SIMPLE_PAYMENT";
    pub const MAX_AMOUNT: u64 = 3_000_000;
    pub const FEE_RATE: Decimal = dec!(0.015);
    pub const SUPPORTED_PROVIDERS: [&'static str; 5] =
        ["KAKAO_PAY", "NAVER_PAY", "PAYCO", "TOSS_PAY", "SAMSUNG_PAY"];

    pub fn is_supported_provider(provider: &str) -> bool {
        Self::SUPPORTED_PROVIDERS.contains(&provider)
    }
}

impl PaymentProcessor for SimplePayProcessor {
    fn method(&self) -> &'static str {
        Self::METHOD
    }

    fn process(&self, request: &PaymentRequest) -> PaymentResult {
        info!(
            order_id = request.order_id,
            amount = request.amount.value(),
            provider = %request.account_number,
            "Starting simple payment"
        );

        if !Self::is_supported_provider(&request.account_number) {
            debug!(order_id = request.order_id, "Rejected unsupported provider");
            return PaymentResult::declined("Unsupported simple-pay provider", Self::METHOD);
        }

        if request.amount.value() > Self::MAX_AMOUNT {
            debug!(order_id = request.order_id, "Rejected payment above limit");
            return PaymentResult::declined("Payment limit exceeded", Self::METHOD);
        }

        PaymentResult::approved(
            Uuid::new_v4().to_string(),
            "Simple payment completed",
            request.amount,
            self.calculate_fee(request.amount.value()),
            Self::METHOD,
        )
    }

    /// `floor(amount * 1.5%)`, truncated rather than rounded.
    fn calculate_fee(&self, amount: u64) -> u64 {
        (Decimal::from(amount) * Self::FEE_RATE)
            .floor()
            .to_u64()
            .unwrap_or(u64::MAX)
    }

    fn supports(&self, payment_method: &str) -> bool {
        payment_method == Self::METHOD
    }

    fn max_amount(&self) -> u64 {
        Self::MAX_AMOUNT
    }
}
