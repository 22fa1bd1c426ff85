//! CJ Logistics integration: an in-process simulator of the carrier's API and
//! the adapter that exposes it through the canonical `ShippingGateway` port.

pub mod cj_adapter;
pub mod cj_api;
pub mod cj_types;

use crate::error::Result;
use async_trait::async_trait;
use cj_types::CjShippingResponse;

/// Registry of shipments held by the carrier, keyed by invoice number.
#[async_trait]
pub trait ShipmentStore: Send + Sync {
    async fn store(&self, invoice_no: &str, record: CjShippingResponse) -> Result<()>;
    async fn get(&self, invoice_no: &str) -> Result<Option<CjShippingResponse>>;
    /// Removes and returns the record in one step.
    async fn remove(&self, invoice_no: &str) -> Result<Option<CjShippingResponse>>;
}

pub type ShipmentStoreBox = Box<dyn ShipmentStore>;
