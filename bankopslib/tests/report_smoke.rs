use std::fs;
use std::path::Path;

use bankopslib::error::OpsError;
use bankopslib::loader::load_operations;
use bankopslib::model::Operation;
use bankopslib::report::{build_report, write_report, DEFAULT_COUNT};
use tempfile::tempdir;

const FIXTURE: &str = r#"[
  {
    "id": 431131847,
    "state": "EXECUTED",
    "date": "2018-05-05T01:38:56.538074",
    "operationAmount": {"amount": "56071.02", "currency": {"name": "руб.", "code": "RUB"}},
    "description": "Перевод с карты на счет",
    "from": "MasterCard 9454780748494532",
    "to": "Счет 51958934737718181351"
  },
  {
    "id": 15948212,
    "state": "EXECUTED",
    "date": "2018-12-23T11:47:52.403285",
    "operationAmount": {"amount": "47408.20", "currency": {"name": "USD", "code": "USD"}},
    "description": "Перевод с карты на карту",
    "from": "МИР 8665240839126074",
    "to": "Maestro 3000704277834087"
  },
  {
    "id": 114832369,
    "state": "EXECUTED",
    "date": "2019-12-07T06:17:14.634890",
    "operationAmount": {"amount": "48150.39", "currency": {"name": "USD", "code": "USD"}},
    "description": "Перевод организации",
    "from": "Visa Classic 28428728893689012",
    "to": "Счет 35158586384610753655"
  },
  {
    "id": 176798279,
    "state": "CANCELED",
    "date": "2019-04-18T11:22:18.800453",
    "operationAmount": {"amount": "73778.48", "currency": {"name": "руб.", "code": "RUB"}},
    "description": "Открытие вклада",
    "to": "Счет 90417871337969064865"
  }
]"#;

// Операция 114832369 самая свежая, но её реквизит `from` содержит
// 17-значный номер: блок по ней не строится, место в отчёте сгорает.
const EXPECTED: &str = "23.12.2018 Перевод с карты на карту\n\
МИР 8665 24** **** 6074 -> Maestro 3000 70** **** 4087\n\
47408.20 USD\n\
\n\
05.05.2018 Перевод с карты на счет\n\
MasterCard 9454 78** **** 4532 -> Счет **1351\n\
56071.02 руб.\n\
\n";

fn fixture() -> Vec<Operation> {
    serde_json::from_str(FIXTURE).expect("parse fixture")
}

#[test]
fn report_end_to_end() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("operations.json");
    fs::write(&path, FIXTURE).expect("write fixture");

    let mut out = Vec::new();
    write_report(&mut out, &path, DEFAULT_COUNT).expect("report");
    assert_eq!(String::from_utf8(out).expect("utf8"), EXPECTED);
}

#[test]
fn report_is_idempotent() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("operations.json");
    fs::write(&path, FIXTURE).expect("write fixture");

    let mut first = Vec::new();
    write_report(&mut first, &path, DEFAULT_COUNT).expect("first run");
    let mut second = Vec::new();
    write_report(&mut second, &path, DEFAULT_COUNT).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn failed_operation_still_uses_its_slot() {
    let blocks = build_report(&fixture(), 2);
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].starts_with("23.12.2018"));
}

#[test]
fn unsortable_operations_give_empty_report() {
    let operations: Vec<Operation> =
        serde_json::from_str(r#"[{"id": 1, "state": "EXECUTED"}]"#).expect("parse");
    assert!(build_report(&operations, DEFAULT_COUNT).is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let err = load_operations(Path::new("no_such_file.json")).expect_err("must fail");
    assert!(matches!(err, OpsError::Io(_)));
}

#[test]
fn invalid_json_is_json_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ это не JSON").expect("write");

    assert!(matches!(load_operations(&path), Err(OpsError::Json(_))));
}

#[test]
fn empty_feed_gives_empty_report() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("empty.json");
    fs::write(&path, "[]").expect("write");

    let mut out = Vec::new();
    write_report(&mut out, &path, DEFAULT_COUNT).expect("report");
    assert!(out.is_empty());
}
