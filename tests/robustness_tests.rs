use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_malformed_payment_rows() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "order_id, amount, payment_method, account_number").unwrap();
    writeln!(csv, "1, 10000, ACCOUNT_TRANSFER, 1101234567").unwrap();
    // Text in amount field
    writeln!(csv, "2, lots, ACCOUNT_TRANSFER, 1101234567").unwrap();
    // Zero amount
    writeln!(csv, "3, 0, SIMPLE_PAYMENT, PAYCO").unwrap();
    writeln!(csv, "4, 1000, SIMPLE_PAYMENT, PAYCO").unwrap();

    let mut cmd = Command::new(cargo_bin!("fulfillment"));
    cmd.arg("pay").arg(csv.path());

    let assert = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_unsupported_method_does_not_abort_batch() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "order_id, amount, payment_method, account_number").unwrap();
    writeln!(csv, "1, 10000, BITCOIN, wallet").unwrap();
    writeln!(csv, "2, 10000, SIMPLE_PAYMENT, TOSS_PAY").unwrap();

    let mut cmd = Command::new(cargo_bin!("fulfillment"));
    cmd.arg("pay").arg(csv.path());

    let assert = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Error processing payment: No payment processor supports method 'BITCOIN'",
        ))
        .stdout(predicate::str::contains("\"fee_amount\":150"));

    // Reported once per rejected row
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_eq!(stderr.matches("BITCOIN").count(), 1);
}

#[test]
fn test_disabled_method_is_unsupported() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(config, r#"{{"payment_methods":["ACCOUNT_TRANSFER"]}}"#).unwrap();

    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "order_id, amount, payment_method, account_number").unwrap();
    writeln!(csv, "1, 10000, SIMPLE_PAYMENT, KAKAO_PAY").unwrap();

    let mut cmd = Command::new(cargo_bin!("fulfillment"));
    cmd.arg("--config").arg(config.path()).arg("pay").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("SIMPLE_PAYMENT"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_package_type_registers_as_box() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "order_id,sender_name,sender_phone,sender_address,receiver_name,receiver_phone,receiver_address,receiver_zip_code,weight,package_type,delivery_message").unwrap();
    // Unknown package type
    writeln!(csv, "1,Shop,02-1,Seoul,01,010-1,Busan,48058,1000,CRATE,").unwrap();
    // Text in weight field
    writeln!(csv, "2,Shop,02-1,Seoul,02,010-1,Busan,48058,heavy,ENVELOPE,").unwrap();

    let mut cmd = Command::new(cargo_bin!("fulfillment"));
    cmd.arg("ship").arg(csv.path());

    let assert = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains("Error reading shipment"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let response: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(response["success"], true);
    assert_eq!(response["shipping_cost"], 3000);
}
