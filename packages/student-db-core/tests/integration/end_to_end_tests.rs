//! End-to-end tests through the CSV file on disk.

use std::fs;

use ntest::timeout;
use tempfile::tempdir;

use student_db_core::config::DbConfig;
use student_db_core::persistence::{CsvStore, RecordStore};
use student_db_core::{Field, Query, RecordManager, StudentChanges};

use super::helpers::{ids, student};

#[timeout(2000)]
#[test]
fn test_crud_survives_reopen() {
    let temp_dir = tempdir().unwrap();
    let config = DbConfig {
        data_file: temp_dir.path().join("students.csv"),
    };

    {
        let mut manager = RecordManager::open(&config).unwrap();
        assert!(manager.is_empty());

        manager.add(student("007", "Ann", 64)).unwrap();
        manager.add(student("042", "Anna", 91)).unwrap();
        manager.add(student("100", "Bob", 77)).unwrap();
        manager
            .update(
                "100",
                &StudentChanges {
                    score: Some(80),
                    ..Default::default()
                },
            )
            .unwrap();
        manager.delete("007").unwrap();
    }

    let reopened = RecordManager::open(&config).unwrap();
    assert_eq!(ids(reopened.records()), vec!["042", "100"]);
    assert_eq!(reopened.get("100").unwrap().score, 80);

    let sorted = reopened.list(&Query::new().sort_by(Field::Score).ascending(false));
    assert_eq!(ids(&sorted), vec!["042", "100"]);
}

#[timeout(2000)]
#[test]
fn test_file_is_rewritten_after_every_mutation() {
    let temp_dir = tempdir().unwrap();
    let config = DbConfig {
        data_file: temp_dir.path().join("students.csv"),
    };
    let mut manager = RecordManager::open(&config).unwrap();

    manager.add(student("1", "Ann", 50)).unwrap();
    let after_add = fs::read_to_string(&config.data_file).unwrap();
    assert_eq!(after_add.lines().count(), 2);
    assert!(after_add.starts_with(
        "student_id,first_name,last_name,age,grade,email,enrollment_date,score"
    ));

    manager.delete("1").unwrap();
    let after_delete = fs::read_to_string(&config.data_file).unwrap();
    assert_eq!(after_delete.lines().count(), 1);
}

#[timeout(2000)]
#[test]
fn test_round_trip_is_idempotent() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("students.csv");
    fs::write(
        &path,
        "student_id,first_name,last_name,age,grade,email,enrollment_date,score\n\
         042,Ada,Lovelace,16,10A,ada@school.test,2024-09-01,91\n\
         7,Alan,Turing,17,11B,alan@school.test,2023-01-15,88\n",
    )
    .unwrap();
    let original = fs::read(&path).unwrap();

    let store = CsvStore::at(&path);
    let table = store.load().unwrap();
    store.save(&table).unwrap();

    assert_eq!(fs::read(&path).unwrap(), original);
    assert_eq!(store.load().unwrap(), table);
    assert_eq!(table.records()[0].student_id, "042");
}

#[timeout(2000)]
#[test]
fn test_save_failure_keeps_memory_consistent() {
    let temp_dir = tempdir().unwrap();
    let config = DbConfig {
        data_file: temp_dir.path().join("students.csv"),
    };
    let mut manager = RecordManager::open(&config).unwrap();
    manager.add(student("1", "Ann", 50)).unwrap();

    // Swap the data file for a directory so the next save cannot create it
    fs::remove_file(&config.data_file).unwrap();
    fs::create_dir(&config.data_file).unwrap();

    let err = manager.add(student("2", "Bob", 60)).unwrap_err();
    assert!(err.is_storage_failure());
    assert_eq!(ids(manager.records()), vec!["1"]);

    let err = manager.delete("1").unwrap_err();
    assert!(err.is_storage_failure());
    assert_eq!(ids(manager.records()), vec!["1"]);
}

#[timeout(2000)]
#[test]
fn test_open_fails_on_corrupt_file() {
    let temp_dir = tempdir().unwrap();
    let config = DbConfig {
        data_file: temp_dir.path().join("students.csv"),
    };
    fs::write(&config.data_file, "name,age\nAda,16\n").unwrap();

    let err = RecordManager::open(&config).unwrap_err();
    assert!(err.is_storage_failure());
}
