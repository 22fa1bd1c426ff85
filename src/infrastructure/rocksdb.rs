use crate::error::{FulfillmentError, Result};
use crate::infrastructure::carrier::ShipmentStore;
use crate::infrastructure::carrier::cj_types::CjShippingResponse;
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Column Family for the carrier's shipment records.
pub const CF_SHIPMENTS: &str = "shipments";

/// A persistent shipment registry backed by RocksDB.
///
/// Records are stored as JSON keyed by invoice number. `Clone` shares the
/// underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDbShipmentStore {
    db: Arc<DB>,
    // Serializes get-then-delete so a record is removed at most once.
    remove_lock: Arc<Mutex<()>>,
}

impl RocksDbShipmentStore {
    /// Opens or creates a RocksDB instance at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_shipments = ColumnFamilyDescriptor::new(CF_SHIPMENTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_shipments])?;

        Ok(Self {
            db: Arc::new(db),
            remove_lock: Arc::new(Mutex::new(())),
        })
    }

    fn decode(bytes: &[u8]) -> Result<CjShippingResponse> {
        serde_json::from_slice(bytes).map_err(|e| {
            FulfillmentError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Deserialization error: {}", e),
            )))
        })
    }

    fn missing_cf() -> FulfillmentError {
        FulfillmentError::InternalError(Box::new(std::io::Error::other(
            "Shipments column family not found",
        )))
    }
}

#[async_trait]
impl ShipmentStore for RocksDbShipmentStore {
    async fn store(&self, invoice_no: &str, record: CjShippingResponse) -> Result<()> {
        let cf = self.db.cf_handle(CF_SHIPMENTS).ok_or_else(Self::missing_cf)?;
        let value = serde_json::to_vec(&record)?;
        self.db.put_cf(&cf, invoice_no.as_bytes(), value)?;
        Ok(())
    }

    async fn get(&self, invoice_no: &str) -> Result<Option<CjShippingResponse>> {
        let cf = self.db.cf_handle(CF_SHIPMENTS).ok_or_else(Self::missing_cf)?;
        match self.db.get_cf(&cf, invoice_no.as_bytes())? {
            Some(bytes) => Ok(Some(Self::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn remove(&self, invoice_no: &str) -> Result<Option<CjShippingResponse>> {
        let cf = self.db.cf_handle(CF_SHIPMENTS).ok_or_else(Self::missing_cf)?;
        let _guard = self
            .remove_lock
            .lock()
            .map_err(|_| FulfillmentError::InternalError("Shipment remove lock poisoned".into()))?;

        let Some(bytes) = self.db.get_cf(&cf, invoice_no.as_bytes())? else {
            return Ok(None);
        };
        let record = Self::decode(&bytes)?;
        self.db.delete_cf(&cf, invoice_no.as_bytes())?;
        Ok(Some(record))
    }
}
