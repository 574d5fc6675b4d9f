use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_missing_orders_file() {
    let mut cmd = Command::new(cargo_bin!("payopt"));
    cmd.env_remove("RUST_LOG")
        .arg("missing_orders.json")
        .arg("tests/fixtures/paymentmethods.json");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot find json file"));
}

#[test]
fn test_malformed_payment_methods_file() {
    let methods = common::write_json(r#"[{"id": "card", "discount": "5""#);

    let mut cmd = Command::new(cargo_bin!("payopt"));
    cmd.env_remove("RUST_LOG")
        .arg("tests/fixtures/orders.json")
        .arg(methods.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot parse json file"));
}

#[test]
fn test_invalid_order_value() {
    let orders = common::write_json(r#"[{"id": "ORDER1", "value": "ten"}]"#);

    let mut cmd = Command::new(cargo_bin!("payopt"));
    cmd.env_remove("RUST_LOG")
        .arg(orders.path())
        .arg("tests/fixtures/paymentmethods.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value 'ten'"));
}

#[test]
fn test_empty_orders_file() {
    let orders = common::write_json("[]");

    let mut cmd = Command::new(cargo_bin!("payopt"));
    cmd.env_remove("RUST_LOG")
        .arg(orders.path())
        .arg("tests/fixtures/paymentmethods.json");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Orders list cannot be empty"));
}

#[test]
fn test_numeric_fields_and_unknown_keys() {
    let orders = common::write_json(
        r#"[{"id": "ORDER1", "value": 40, "promotions": ["card"], "note": "gift"}]"#,
    );
    let methods = common::write_json(r#"[{"id": "card", "discount": 25, "limit": 40}]"#);

    let mut cmd = Command::new(cargo_bin!("payopt"));
    cmd.env_remove("RUST_LOG").arg(orders.path()).arg(methods.path());

    cmd.assert().success().stdout("card 30.00\n");
}
