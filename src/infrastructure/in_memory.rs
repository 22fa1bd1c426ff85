use crate::error::Result;
use crate::infrastructure::carrier::ShipmentStore;
use crate::infrastructure::carrier::cj_types::CjShippingResponse;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory shipment registry.
///
/// Uses `Arc<RwLock<HashMap<String, CjShippingResponse>>>` so clones share the
/// same registry. Records live until they are removed by a cancellation.
#[derive(Default, Clone)]
pub struct InMemoryShipmentStore {
    shipments: Arc<RwLock<HashMap<String, CjShippingResponse>>>,
}

impl InMemoryShipmentStore {
    /// Creates a new, empty in-memory shipment store.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.shipments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.shipments.read().await.is_empty()
    }
}

#[async_trait]
impl ShipmentStore for InMemoryShipmentStore {
    async fn store(&self, invoice_no: &str, record: CjShippingResponse) -> Result<()> {
        let mut shipments = self.shipments.write().await;
        shipments.insert(invoice_no.to_string(), record);
        Ok(())
    }

    async fn get(&self, invoice_no: &str) -> Result<Option<CjShippingResponse>> {
        let shipments = self.shipments.read().await;
        Ok(shipments.get(invoice_no).cloned())
    }

    async fn remove(&self, invoice_no: &str) -> Result<Option<CjShippingResponse>> {
        let mut shipments = self.shipments.write().await;
        Ok(shipments.remove(invoice_no))
    }
}
