use std::io::Write;

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("till").unwrap()
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// A drawer holding a single R$ 1,00 coin and nothing else.
fn one_coin_drawer() -> NamedTempFile {
    config_file(
        "[inventory]\n\
         stock_200 = 0\nstock_100 = 0\nstock_50 = 0\nstock_20 = 0\n\
         stock_10 = 0\nstock_5 = 0\nstock_2 = 0\nstock_1 = 1\n\
         stock_0_50 = 0\nstock_0_25 = 0\nstock_0_10 = 0\nstock_0_05 = 0\n",
    )
}

#[test]
fn change_breakdown() {
    cmd()
        .args(["change", "--total", "27,65", "--paid", "55"])
        .assert()
        .success()
        .stdout(contains("Total change: R$ 27,35"))
        .stdout(contains("1 bill of R$ 20,00"))
        .stdout(contains("1 coin of R$ 0,10"));
}

#[test]
fn change_with_stock_shortfall() {
    let drawer = one_coin_drawer();
    cmd()
        .arg("--config")
        .arg(drawer.path())
        .args(["change", "--total", "2", "--paid", "5"])
        .assert()
        .code(2)
        .stdout(contains("1 coin of R$ 1,00"))
        .stdout(contains("[WARNING] Change unavailable! Missing R$ 2,00"));
}

#[test]
fn stock_flag_overrides_config() {
    let drawer = one_coin_drawer();
    cmd()
        .arg("--config")
        .arg(drawer.path())
        .args(["change", "--total", "2", "--paid", "5", "--stock", "stock_1=3"])
        .assert()
        .success()
        .stdout(contains("3 coins of R$ 1,00"));
}

#[test]
fn insufficient_payment() {
    cmd()
        .args(["change", "--total", "27,65", "--paid", "20"])
        .assert()
        .code(1)
        .stdout(contains("Insufficient payment. Missing: R$ 7,65"));
}

#[test]
fn invalid_total() {
    cmd()
        .args(["change", "--total", "abc", "--paid", "20"])
        .assert()
        .code(1)
        .stdout(contains("Please enter valid values for the purchase."));
}

#[test]
fn no_change_due() {
    cmd()
        .args(["change", "--total", "10,00", "--paid", "10"])
        .assert()
        .success()
        .stdout(contains("No change due."));
}

#[test]
fn change_json() {
    let output = cmd()
        .args(["--json", "change", "--total", "27.65", "--paid", "55.00"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["receipt"]["tone"], "success");
    assert_eq!(json["report"]["change"], 2735);
    assert_eq!(json["report"]["allocation"]["fully_covered"], true);
    assert_eq!(json["report"]["allocation"]["lines"][0]["face_value_cents"], 2000);
}

#[test]
fn error_json() {
    let output = cmd()
        .args(["--json", "change", "--total", "0", "--paid", "5"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["receipt"]["tone"], "alert");
    assert!(json.get("report").is_none());
    assert_eq!(json["error"], "Validation error: total must be positive");
}

#[test]
fn locale_from_config() {
    let config = config_file(
        "[locale]\nbill_label = \"nota\"\ncoin_label = \"moeda\"\nconnector = \"de\"\n",
    );
    cmd()
        .arg("--config")
        .arg(config.path())
        .args(["change", "--total", "1", "--paid", "5,15"])
        .assert()
        .success()
        .stdout(contains("2 notas de R$ 2,00"))
        .stdout(contains("1 moeda de R$ 0,05"));
}

#[test]
fn unknown_stock_id() {
    cmd()
        .args(["change", "--total", "1", "--paid", "2", "--stock", "stock_3=1"])
        .assert()
        .code(1)
        .stdout(contains("Please enter valid values for the purchase."))
        .stdout(contains("Unknown denomination: stock_3"));
}

#[test]
fn unknown_stock_id_json() {
    let output = cmd()
        .args(["--json", "change", "--total", "1", "--paid", "2", "--stock", "stock_3=1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["receipt"]["tone"], "alert");
    assert!(json.get("report").is_none());
    assert_eq!(json["error"], "Unknown denomination: stock_3");
}

#[test]
fn unknown_inventory_key_in_config() {
    let config = config_file("[inventory]\nstock_3 = 4\n");
    cmd()
        .arg("--config")
        .arg(config.path())
        .args(["change", "--total", "1", "--paid", "2"])
        .assert()
        .code(1)
        .stdout(contains("Unknown denomination: stock_3"));
}

#[test]
fn environment_overrides_defaults() {
    cmd()
        .env("TILL__LOCALE__CURRENCY_SYMBOL", "EUR")
        .env("TILL__INVENTORY__STOCK_2", "0")
        .env("TILL__INVENTORY__STOCK_1", "1")
        .env("TILL__INVENTORY__STOCK_0_50", "0")
        .env("TILL__INVENTORY__STOCK_0_25", "0")
        .env("TILL__INVENTORY__STOCK_0_10", "0")
        .env("TILL__INVENTORY__STOCK_0_05", "0")
        .args(["change", "--total", "2", "--paid", "5"])
        .assert()
        .code(2)
        .stdout(contains("1 coin of EUR 1,00"))
        .stdout(contains("[WARNING] Change unavailable! Missing EUR 2,00"));
}

#[test]
fn environment_overrides_config_file() {
    let drawer = one_coin_drawer();
    cmd()
        .arg("--config")
        .arg(drawer.path())
        .env("TILL__INVENTORY__STOCK_1", "3")
        .env("TILL__LOCALE__CURRENCY_SYMBOL", "EUR")
        .args(["change", "--total", "2", "--paid", "5"])
        .assert()
        .success()
        .stdout(contains("3 coins of EUR 1,00"));
}

#[test]
fn denominations_table() {
    cmd()
        .args(["denominations"])
        .assert()
        .success()
        .stdout(contains("stock_200"))
        .stdout(contains("stock_0_05"))
        .stdout(contains("Drawer total: R$ 3889,00"));
}

#[test]
fn denominations_json() {
    let drawer = one_coin_drawer();
    let output = cmd()
        .arg("--config")
        .arg(drawer.path())
        .args(["--json", "denominations"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0]["id"], "stock_200");
    assert_eq!(rows[0]["kind"], "bill");
    assert_eq!(rows[7]["id"], "stock_1");
    assert_eq!(rows[7]["stock"], 1);
    assert_eq!(rows[7]["kind"], "coin");
}

#[test]
fn config_error_reported_once() {
    let config = config_file("[inventory]\nstock_3 = 4\n");
    cmd()
        .arg("--config")
        .arg(config.path())
        .args(["denominations"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("error: Invalid inventory: Unknown denomination: stock_3"))
        .stderr(contains("Unknown denomination: stock_3").count(1));
}
