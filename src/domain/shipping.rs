use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Package type of a shipment. Unrecognised names are treated as `Box`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum PackageType {
    #[default]
    Box,
    Envelope,
    Bag,
}

impl From<&str> for PackageType {
    fn from(value: &str) -> Self {
        match value {
            "ENVELOPE" => PackageType::Envelope,
            "BAG" => PackageType::Bag,
            _ => PackageType::Box,
        }
    }
}

impl From<String> for PackageType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingStatus {
    #[default]
    Registered,
    PickedUp,
    InTransit,
    Delivered,
}

/// Carrier-independent shipment registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRequest {
    pub order_id: u64,
    pub sender_name: String,
    pub sender_phone: String,
    pub sender_address: String,
    pub receiver_name: String,
    pub receiver_phone: String,
    pub receiver_address: String,
    pub receiver_zip_code: String,
    /// Package weight in grams.
    pub weight: u32,
    pub package_type: PackageType,
    #[serde(default)]
    pub delivery_message: String,
}

/// Carrier-independent answer to a registration, tracking or cancellation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingResponse {
    pub success: bool,
    pub tracking_number: Option<String>,
    pub status: ShippingStatus,
    pub message: String,
    pub shipping_cost: u64,
    pub estimated_delivery: NaiveDateTime,
    pub carrier_name: String,
    pub error_code: Option<String>,
}
