#![allow(dead_code)]

use fulfillment::domain::shipping::{PackageType, ShippingRequest};
use std::io::Error;
use std::path::Path;

pub const PAYMENT_HEADER: [&str; 4] = ["order_id", "amount", "payment_method", "account_number"];

/// Writes a payment request CSV with one row per `(amount, method, account)`.
pub fn write_payments_csv(path: &Path, rows: &[(u64, &str, &str)]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(PAYMENT_HEADER)?;

    for (i, (amount, method, account)) in rows.iter().enumerate() {
        let order_id = (i + 1).to_string();
        let amount = amount.to_string();
        wtr.write_record([order_id.as_str(), amount.as_str(), *method, *account])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn shipping_request(receiver_name: &str, weight: u32, receiver_address: &str) -> ShippingRequest {
    ShippingRequest {
        order_id: 77,
        sender_name: "Shop".to_string(),
        sender_phone: "02-123-4567".to_string(),
        sender_address: "Seoul Gangnam-gu".to_string(),
        receiver_name: receiver_name.to_string(),
        receiver_phone: "010-1111-2222".to_string(),
        receiver_address: receiver_address.to_string(),
        receiver_zip_code: "48058".to_string(),
        weight,
        package_type: PackageType::Box,
        delivery_message: "Call before delivery".to_string(),
    }
}
