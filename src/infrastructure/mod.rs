//! Infrastructure layer: the simulated carrier and the shipment registry
//! backends it can run on.

pub mod carrier;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
