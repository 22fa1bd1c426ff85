//! Application layer containing the business rules and their orchestration.
//!
//! Payment strategies and shipping policies live here; `FulfillmentEngine`
//! ties them to a carrier gateway and is the primary entry point.

pub mod engine;
pub mod payments;
pub mod shipping_policy;
