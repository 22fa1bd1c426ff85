//! Payment method strategies and the selector that dispatches to them.

pub mod bank_transfer;
pub mod selector;
pub mod simple_pay;

pub use bank_transfer::BankTransferProcessor;
pub use selector::{PaymentMethodKind, PaymentProcessorRegistry};
pub use simple_pay::SimplePayProcessor;
