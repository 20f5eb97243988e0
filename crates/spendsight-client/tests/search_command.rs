mod support;

use spendsight_client::commands::search;
use support::ledger_testkit::{payload, temp_dir, write_csv_ledger, write_file};

#[test]
fn json_records_are_searched_loosely() {
    let dir = temp_dir("spendsight-search-json");
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let path = write_file(
            dir.path(),
            "records.json",
            r#"[
                {"description": "Покупка продуктов", "category": "Еда"},
                {"description": "Кофе", "category": "Еда"},
                {"description": "Бензин", "category": "Транспорт"},
                {"note": "no text fields"}
            ]"#,
        );
        assert!(path.is_ok());
        if let Ok(path) = path {
            let value = payload(search::run("еда", &path.display().to_string()));
            assert_eq!(value["command"], "search");
            assert_eq!(value["data"]["total"], 2);
            assert_eq!(value["data"]["rows"][1]["description"], "Кофе");
        }
    }
}

#[test]
fn json_documents_that_are_not_arrays_are_rejected() {
    let dir = temp_dir("spendsight-search-object");
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let path = write_file(dir.path(), "records.json", r#"{"description": "Кофе"}"#);
        assert!(path.is_ok());
        if let Ok(path) = path {
            let result = search::run("кофе", &path.display().to_string());
            assert!(result.is_err());
            if let Err(error) = result {
                assert_eq!(error.code, "invalid_collection");
            }
        }
    }
}

#[test]
fn csv_ledgers_are_searched_through_the_loader() {
    let dir = temp_dir("spendsight-search-csv");
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let ledger = write_csv_ledger(
            dir.path(),
            &[
                "01.03.2020 09:00:00;-1200;OK;*5091;Супермаркеты;Магнит",
                "03.03.2020 12:15:00;-250;OK;*7197;Фастфуд;Бургер Кинг",
            ],
        );
        assert!(ledger.is_ok());
        if let Ok(ledger) = ledger {
            let value = payload(search::run("МАГНИТ", &ledger.display().to_string()));
            assert_eq!(value["data"]["total"], 1);
            assert_eq!(value["data"]["rows"][0]["card_number"], "*5091");
            assert_eq!(value["data"]["rows"][0]["operation_date"], "2020-03-01 09:00:00");

            let everything = payload(search::run("", &ledger.display().to_string()));
            assert_eq!(everything["data"]["total"], 2);
        }
    }
}
