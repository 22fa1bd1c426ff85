use super::ShipmentStoreBox;
use super::cj_types::{
    CjDeliveryStatus, CjShippingRequest, CjShippingResponse, CjTrackingResponse,
    DATE_TIME_FORMAT, RESULT_NOT_FOUND, RESULT_OK, RESULT_OTHER,
};
use crate::error::{FulfillmentError, Result};
use chrono::Local;
use tracing::{debug, info};
use uuid::Uuid;

/// Receiver names the simulated carrier accepts at registration.
///
/// Registration outcome is keyed off the receiver name rather than any real
/// validation. Kept as-is until the carrier's acceptance rules are known.
pub const ACCEPTED_RECEIVER_SENTINELS: [&str; 2] = ["01", "02"];

/// Address fragments that mark Jeju island and mountain/remote delivery areas.
pub const REMOTE_AREA_MARKERS: [&str; 2] = ["제주도", "산간"];

pub const BASE_CHARGE: u64 = 3000;
pub const HEAVY_PARCEL_SURCHARGE: u64 = 3000;
pub const REMOTE_AREA_SURCHARGE: u64 = 3000;
/// Weight in grams above which the heavy-parcel surcharge applies.
pub const HEAVY_PARCEL_THRESHOLD: u32 = 5000;
/// A weight-based total equal to this suppresses the remote-area surcharge.
const REMOTE_SURCHARGE_SUPPRESSED_AT: u64 = 6000;

/// In-process stand-in for the CJ Logistics delivery API.
///
/// Owns the carrier's shipment registry. Delivery status never advances past
/// receipt.
pub struct CjShippingApi {
    shipments: ShipmentStoreBox,
}

impl CjShippingApi {
    pub fn new(shipments: ShipmentStoreBox) -> Self {
        Self { shipments }
    }

    pub async fn register_delivery(&self, request: &CjShippingRequest) -> Result<CjShippingResponse> {
        info!(order_no = request.order_no, "CJ API: register delivery");

        let invoice_no = Uuid::new_v4().to_string();
        let accepted = ACCEPTED_RECEIVER_SENTINELS.contains(&request.receiver_name.as_str());
        let (result_code, result_message) = if accepted {
            (RESULT_OK, "Shipment registered")
        } else {
            (RESULT_OTHER, "Shipment registration failed")
        };

        let response = CjShippingResponse {
            result_code: result_code.to_string(),
            result_message: result_message.to_string(),
            invoice_no: Some(invoice_no.clone()),
            order_no: Some(request.order_no),
            delivery_charge: self.calculate_delivery_charge(request),
        };

        self.shipments.store(&invoice_no, response.clone()).await?;
        debug!(invoice_no = %invoice_no, result_code, "CJ API: shipment stored");

        Ok(response)
    }

    pub async fn get_tracking_info(&self, invoice_no: &str) -> Result<CjTrackingResponse> {
        let record = self
            .shipments
            .get(invoice_no)
            .await?
            .ok_or_else(|| FulfillmentError::TrackingNotFound(invoice_no.to_string()))?;

        let status = CjDeliveryStatus::Receipt;
        Ok(CjTrackingResponse {
            result_code: record.result_code,
            result_message: record.result_message,
            invoice_no: invoice_no.to_string(),
            delivery_status: status.code().to_string(),
            delivery_status_name: status.description().to_string(),
            current_location: "CJ hub terminal".to_string(),
            delivery_date_time: Local::now().format(DATE_TIME_FORMAT).to_string(),
        })
    }

    /// Cancels a registered shipment. An unknown invoice number yields a
    /// failure response rather than an error.
    pub async fn cancel_delivery(&self, invoice_no: &str, reason: &str) -> Result<CjShippingResponse> {
        let Some(record) = self.shipments.remove(invoice_no).await? else {
            debug!(invoice_no, "CJ API: cancel for unknown invoice");
            return Ok(CjShippingResponse {
                result_code: RESULT_NOT_FOUND.to_string(),
                result_message: "Invoice number does not exist".to_string(),
                invoice_no: None,
                order_no: None,
                delivery_charge: 0,
            });
        };

        Ok(CjShippingResponse {
            result_code: RESULT_OK.to_string(),
            result_message: format!("Shipment cancelled. Reason: {reason}"),
            invoice_no: Some(invoice_no.to_string()),
            order_no: record.order_no,
            delivery_charge: 0,
        })
    }

    pub fn calculate_delivery_charge(&self, request: &CjShippingRequest) -> u64 {
        let mut total = BASE_CHARGE;
        if request.weight > HEAVY_PARCEL_THRESHOLD {
            total += HEAVY_PARCEL_SURCHARGE;
        }

        let remote = REMOTE_AREA_MARKERS
            .iter()
            .any(|marker| request.receiver_addr.contains(marker));
        if remote && total != REMOTE_SURCHARGE_SUPPRESSED_AT {
            total += REMOTE_AREA_SURCHARGE;
        }

        total
    }
}
