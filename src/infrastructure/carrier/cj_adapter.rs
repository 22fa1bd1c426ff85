use super::cj_api::CjShippingApi;
use super::cj_types::{
    CjDeliveryStatus, CjShippingRequest, CjShippingResponse, CjTrackingResponse, DATE_TIME_FORMAT, RESULT_OK,
    RESULT_OTHER,
};
use crate::domain::ports::ShippingGateway;
use crate::domain::shipping::{PackageType, ShippingRequest, ShippingResponse, ShippingStatus};
use crate::error::{FulfillmentError, Result};
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use tracing::info;

pub const CARRIER_NAME: &str = "CJ Logistics";
/// Canonical error code for any failed carrier call without a native code.
pub const ERROR_CODE_FAILED: &str = "FAILED";

/// Exposes the CJ Logistics API through the canonical shipping model.
pub struct CjShippingAdapter {
    api: CjShippingApi,
}

impl CjShippingAdapter {
    pub fn new(api: CjShippingApi) -> Self {
        Self { api }
    }

    fn to_cj_request(request: &ShippingRequest) -> CjShippingRequest {
        CjShippingRequest {
            order_no: request.order_id,
            sender_name: request.sender_name.clone(),
            sender_tel: request.sender_phone.clone(),
            sender_addr: request.sender_address.clone(),
            receiver_name: request.receiver_name.clone(),
            receiver_tel: request.receiver_phone.clone(),
            receiver_addr: request.receiver_address.clone(),
            receiver_zip_code: request.receiver_zip_code.clone(),
            weight: request.weight,
            box_type: box_type_code(request.package_type).to_string(),
            delivery_message: request.delivery_message.clone(),
        }
    }

    fn to_shipping_response(response: CjShippingResponse) -> ShippingResponse {
        let success = response.is_ok();
        // The "other" sentinel is reported as a failure without an error code.
        let error_code = match response.result_code.as_str() {
            RESULT_OK | RESULT_OTHER => None,
            _ => Some(ERROR_CODE_FAILED.to_string()),
        };

        ShippingResponse {
            success,
            tracking_number: response.invoice_no,
            status: ShippingStatus::Registered,
            message: response.result_message,
            shipping_cost: response.delivery_charge,
            estimated_delivery: Local::now().naive_local(),
            carrier_name: CARRIER_NAME.to_string(),
            error_code,
        }
    }

    fn tracking_to_shipping_response(response: CjTrackingResponse) -> Result<ShippingResponse> {
        let estimated_delivery =
            NaiveDateTime::parse_from_str(&response.delivery_date_time, DATE_TIME_FORMAT)
                .map_err(|source| FulfillmentError::InvalidTimestamp {
                    value: response.delivery_date_time.clone(),
                    source,
                })?;

        let success = response.result_code == RESULT_OK;
        Ok(ShippingResponse {
            success,
            tracking_number: Some(response.invoice_no),
            status: map_cj_status(&response.delivery_status),
            message: response.result_message,
            shipping_cost: 0,
            estimated_delivery,
            carrier_name: CARRIER_NAME.to_string(),
            error_code: (!success).then_some(response.result_code),
        })
    }
}

/// Native box type code for a package type.
pub fn box_type_code(package_type: PackageType) -> &'static str {
    match package_type {
        PackageType::Box => "1",
        PackageType::Envelope => "2",
        PackageType::Bag => "3",
    }
}

/// Canonical status for a native delivery status code. Unknown codes map to
/// `Registered`.
pub fn map_cj_status(code: &str) -> ShippingStatus {
    match CjDeliveryStatus::from_code(code) {
        Some(CjDeliveryStatus::DropOff) => ShippingStatus::PickedUp,
        Some(CjDeliveryStatus::Delivery) => ShippingStatus::InTransit,
        Some(CjDeliveryStatus::Completed) => ShippingStatus::Delivered,
        Some(CjDeliveryStatus::Receipt) | None => ShippingStatus::Registered,
    }
}

#[async_trait]
impl ShippingGateway for CjShippingAdapter {
    async fn register_shipping(&self, request: &ShippingRequest) -> Result<ShippingResponse> {
        info!(order_id = request.order_id, "CJ adapter: register shipping");
        let cj_request = Self::to_cj_request(request);
        let cj_response = self.api.register_delivery(&cj_request).await?;
        Ok(Self::to_shipping_response(cj_response))
    }

    async fn get_shipping_status(&self, tracking_number: &str) -> Result<ShippingResponse> {
        info!(tracking_number, "CJ adapter: shipping status");
        let cj_response = self.api.get_tracking_info(tracking_number).await?;
        Self::tracking_to_shipping_response(cj_response)
    }

    async fn cancel_shipping(
        &self,
        tracking_number: &str,
        reason: &str,
    ) -> Result<ShippingResponse> {
        info!(tracking_number, reason, "CJ adapter: cancel shipping");
        let cj_response = self.api.cancel_delivery(tracking_number, reason).await?;
        Ok(Self::to_shipping_response(cj_response))
    }

    fn calculate_shipping_cost(&self, request: &ShippingRequest) -> u64 {
        self.api
            .calculate_delivery_charge(&Self::to_cj_request(request))
    }

    fn carrier_name(&self) -> &'static str {
        CARRIER_NAME
    }
}
