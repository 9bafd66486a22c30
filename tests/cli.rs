//! End-to-end tests for the `till` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DAY: &str = "2025-03-14";

fn till(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("till").unwrap();
    cmd.env("TILL_DATA_DIR", home.path());
    cmd
}

fn on_day(home: &TempDir) -> Command {
    let mut cmd = till(home);
    cmd.args(["--date", DAY]);
    cmd
}

fn record_path(home: &TempDir) -> std::path::PathBuf {
    home.path().join("data").join(format!("{}.json", DAY))
}

#[test]
fn count_updates_cash_on_hand() {
    let home = TempDir::new().unwrap();

    on_day(&home)
        .args(["count", "20", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20 €: 3 x = 60.00 €"));

    on_day(&home)
        .args(["count", "0,5", "2*2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kassenbestand: 62.00 €"));

    on_day(&home)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kassenbericht 14.03.2025"))
        .stdout(predicate::str::contains("2*2"));
}

#[test]
fn invalid_expression_fails_without_saving() {
    let home = TempDir::new().unwrap();

    on_day(&home)
        .args(["count", "20", "3*"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid expression"));

    on_day(&home)
        .args(["count", "20", "3/0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));

    assert!(!record_path(&home).exists());
}

#[test]
fn ledger_drives_grand_total() {
    let home = TempDir::new().unwrap();

    on_day(&home)
        .args(["set", "cash-inflow", "500"])
        .assert()
        .success();
    on_day(&home)
        .args(["set", "card", "120,50"])
        .assert()
        .success();
    on_day(&home)
        .args(["purchase", "Lidl", "30"])
        .assert()
        .success();

    on_day(&home)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Gesamt\s+349\.50 €").unwrap());
}

#[test]
fn unknown_vendor_is_reported() {
    let home = TempDir::new().unwrap();

    on_day(&home)
        .args(["purchase", "Aldi", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vendor not found: Aldi"));
}

#[test]
fn corrupt_record_shows_defaults() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join("data")).unwrap();
    std::fs::write(record_path(&home), "{ not json").unwrap();

    on_day(&home)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Gesamt\s+0\.00 €").unwrap());
}

#[test]
fn vouchers_add_and_remove() {
    let home = TempDir::new().unwrap();

    on_day(&home)
        .args(["voucher", "add", "redeemed", "Anna", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] Anna"));
    on_day(&home)
        .args(["voucher", "add", "redeemed", "Ben", "10"])
        .assert()
        .success();
    on_day(&home)
        .args(["voucher", "remove", "redeemed", "0"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Gesamt\s+10\.00 €").unwrap());

    on_day(&home)
        .args(["voucher", "remove", "redeemed", "5"])
        .assert()
        .failure();
}

#[test]
fn days_and_log_follow_saves() {
    let home = TempDir::new().unwrap();

    till(&home)
        .arg("days")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved days."));

    on_day(&home).args(["set", "deposit", "50"]).assert().success();
    on_day(&home).args(["set", "deposit", "80"]).assert().success();
    till(&home)
        .args(["--date", "01.03.2025", "reset"])
        .assert()
        .success();

    till(&home)
        .arg("days")
        .assert()
        .success()
        .stdout(predicate::str::contains("01.03.2025\n14.03.2025"));

    till(&home)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("UPDATE"));
}

#[test]
fn calc_prints_result() {
    let home = TempDir::new().unwrap();

    till(&home)
        .args(["calc", "2+3*4"])
        .assert()
        .success()
        .stdout("14\n");

    till(&home)
        .args(["calc", "(1,5+1)*2"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn bad_date_is_rejected() {
    let home = TempDir::new().unwrap();

    till(&home)
        .args(["--date", "31.02.2025", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}
