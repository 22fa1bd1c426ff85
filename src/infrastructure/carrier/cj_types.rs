//! Native request and response shapes of the CJ Logistics delivery API.

use serde::{Deserialize, Serialize};

/// Result code the carrier uses for an accepted call.
pub const RESULT_OK: &str = "0000";
/// Result code for a registration the carrier neither accepted nor rejected
/// with a specific reason.
pub const RESULT_OTHER: &str = "OTHER";
/// Result code for a call against an unknown invoice number.
pub const RESULT_NOT_FOUND: &str = "NOT_FOUND";

/// Timestamp layout used by the carrier on the wire.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CjShippingRequest {
    pub order_no: u64,
    pub sender_name: String,
    pub sender_tel: String,
    pub sender_addr: String,
    pub receiver_name: String,
    pub receiver_tel: String,
    pub receiver_addr: String,
    pub receiver_zip_code: String,
    pub weight: u32,
    /// "1" box, "2" envelope, "3" bag.
    pub box_type: String,
    pub delivery_message: String,
}

/// Carrier answer to registration and cancellation; also the record kept in
/// the carrier's shipment registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CjShippingResponse {
    pub result_code: String,
    pub result_message: String,
    pub invoice_no: Option<String>,
    pub order_no: Option<u64>,
    pub delivery_charge: u64,
}

impl CjShippingResponse {
    pub fn is_ok(&self) -> bool {
        self.result_code == RESULT_OK
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CjTrackingResponse {
    pub result_code: String,
    pub result_message: String,
    pub invoice_no: String,
    pub delivery_status: String,
    pub delivery_status_name: String,
    pub current_location: String,
    /// Formatted with [`DATE_TIME_FORMAT`].
    pub delivery_date_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CjDeliveryStatus {
    Receipt,
    DropOff,
    Delivery,
    Completed,
}

impl CjDeliveryStatus {
    pub fn code(self) -> &'static str {
        match self {
            CjDeliveryStatus::Receipt => "10",
            CjDeliveryStatus::DropOff => "20",
            CjDeliveryStatus::Delivery => "30",
            CjDeliveryStatus::Completed => "40",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CjDeliveryStatus::Receipt => "Received",
            CjDeliveryStatus::DropOff => "Picked up",
            CjDeliveryStatus::Delivery => "Out for delivery",
            CjDeliveryStatus::Completed => "Delivered",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "10" => Some(CjDeliveryStatus::Receipt),
            "20" => Some(CjDeliveryStatus::DropOff),
            "30" => Some(CjDeliveryStatus::Delivery),
            "40" => Some(CjDeliveryStatus::Completed),
            _ => None,
        }
    }
}
