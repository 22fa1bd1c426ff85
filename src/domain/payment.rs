use crate::error::FulfillmentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A positive payment amount in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Amount(u64);

impl Amount {
    pub fn new(value: u64) -> Result<Self, FulfillmentError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(FulfillmentError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Amount {
    type Error = FulfillmentError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single payment attempt for an order.
///
/// `account_number` carries either a bank account number or, for simple-pay
/// methods, the provider name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub order_id: u64,
    pub amount: Amount,
    pub payment_method: String,
    pub account_number: String,
}

impl PaymentRequest {
    pub fn new(
        order_id: u64,
        amount: Amount,
        payment_method: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            order_id,
            amount,
            payment_method: payment_method.into(),
            account_number: account_number.into(),
        }
    }
}

/// Outcome of a single `PaymentProcessor::process` call.
///
/// Only the two constructors can build one, so a declined result never
/// carries a transaction id and an approved one always does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentResult {
    success: bool,
    transaction_id: Option<String>,
    message: String,
    paid_amount: u64,
    fee_amount: u64,
    payment_method: String,
}

impl PaymentResult {
    pub fn approved(
        transaction_id: impl Into<String>,
        message: impl Into<String>,
        paid_amount: Amount,
        fee_amount: u64,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            transaction_id: Some(transaction_id.into()),
            message: message.into(),
            paid_amount: paid_amount.value(),
            fee_amount,
            payment_method: payment_method.into(),
        }
    }

    pub fn declined(message: impl Into<String>, payment_method: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id: None,
            message: message.into(),
            paid_amount: 0,
            fee_amount: 0,
            payment_method: payment_method.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn paid_amount(&self) -> u64 {
        self.paid_amount
    }

    pub fn fee_amount(&self) -> u64 {
        self.fee_amount
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }
}
