use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::ports::PaymentProcessor;
use tracing::{debug, info};
use uuid::Uuid;

/// Direct transfer from a bank account, charged a flat fee.
#[derive(Debug, Default, Clone, Copy)]
pub struct BankTransferProcessor;

impl BankTransferProcessor {
    pub const METHOD: &'static str = "ACCOUNT_TRANSFER";
    pub const MAX_AMOUNT: u64 = 10_000_000;
    pub const FIXED_FEE: u64 = 500;

    /// Account numbers are 10 to 14 characters long.
    pub fn is_valid_account(account_number: &str) -> bool {
        (10..=14).contains(&account_number.chars().count())
    }
}

impl PaymentProcessor for BankTransferProcessor {
    fn method(&self) -> &'static str {
        Self::METHOD
    }

    fn process(&self, request: &PaymentRequest) -> PaymentResult {
        info!(
            order_id = request.order_id,
            amount = request.amount.value(),
            "Starting bank transfer"
        );

        if !Self::is_valid_account(&request.account_number) {
            debug!(order_id = request.order_id, "Rejected invalid account number");
            return PaymentResult::declined("Invalid account number", Self::METHOD);
        }

        if request.amount.value() > Self::MAX_AMOUNT {
            debug!(order_id = request.order_id, "Rejected transfer above limit");
            return PaymentResult::declined("Transfer limit exceeded", Self::METHOD);
        }

        PaymentResult::approved(
            Uuid::new_v4().to_string(),
            "Bank transfer completed",
            request.amount,
            self.calculate_fee(request.amount.value()),
            Self::METHOD,
        )
    }

    fn calculate_fee(&self, _amount: u64) -> u64 {
        Self::FIXED_FEE
    }

    fn supports(&self, payment_method: &str) -> bool {
        payment_method == Self::METHOD
    }

    fn max_amount(&self) -> u64 {
        Self::MAX_AMOUNT
    }
}
