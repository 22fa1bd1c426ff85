//! Domain model shared by the payment and shipping subsystems, plus the
//! ports (traits) the application and infrastructure layers implement.

pub mod order;
pub mod payment;
pub mod ports;
pub mod shipping;
