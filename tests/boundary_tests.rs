use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use std::process::Command;

mod common;

fn run_payments(rows: &[(u64, &str, &str)]) -> Vec<serde_json::Value> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payments.csv");
    common::write_payments_csv(&path, rows).expect("Failed to write CSV");

    let output = Command::new(cargo_bin!("fulfillment"))
        .arg("pay")
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_bank_account_length_boundaries() {
    let rows = [
        (1000, "ACCOUNT_TRANSFER", "123456789"),
        (1000, "ACCOUNT_TRANSFER", "1234567890"),
        (1000, "ACCOUNT_TRANSFER", "12345678901234"),
        (1000, "ACCOUNT_TRANSFER", "123456789012345"),
    ];
    let results = run_payments(&rows);

    let successes: Vec<bool> = results.iter().map(|r| r["success"].as_bool().unwrap()).collect();
    assert_eq!(successes, vec![false, true, true, false]);
}

#[test]
fn test_payment_limits() {
    let rows = [
        (10_000_000, "ACCOUNT_TRANSFER", "1234567890"),
        (10_000_001, "ACCOUNT_TRANSFER", "1234567890"),
        (3_000_000, "SIMPLE_PAYMENT", "SAMSUNG_PAY"),
        (3_000_001, "SIMPLE_PAYMENT", "SAMSUNG_PAY"),
    ];
    let results = run_payments(&rows);

    assert_eq!(results[0]["success"], true);
    assert_eq!(results[0]["fee_amount"], 500);
    assert_eq!(results[1]["message"], "Transfer limit exceeded");
    assert_eq!(results[2]["success"], true);
    assert_eq!(results[2]["fee_amount"], 45_000);
    assert_eq!(results[3]["message"], "Payment limit exceeded");
}
