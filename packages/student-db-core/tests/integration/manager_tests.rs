//! Record manager CRUD and query behaviour.

use ntest::timeout;

use student_db_core::{DbError, Field, Query, RecordManager, StudentChanges, Table};

use super::helpers::{ids, student, MemoryStore};

fn seeded_manager() -> (RecordManager<MemoryStore>, MemoryStore) {
    let table = Table::from_records(vec![
        student("101", "Ann", 72),
        student("102", "Anna", 88),
        student("103", "Bob", 72),
    ])
    .unwrap();
    let store = MemoryStore::with_table(table);
    let manager = RecordManager::new(store.clone()).unwrap();
    (manager, store)
}

#[timeout(1000)]
#[test]
fn test_new_loads_store_contents() {
    let (manager, store) = seeded_manager();
    assert_eq!(manager.len(), 3);
    assert_eq!(manager.table(), &*store.saved.borrow());
    assert_eq!(store.save_count.get(), 0);
}

#[timeout(1000)]
#[test]
fn test_add_appends_and_persists() {
    let (mut manager, store) = seeded_manager();

    manager.add(student("104", "Cleo", 95)).unwrap();

    assert_eq!(ids(manager.records()), vec!["101", "102", "103", "104"]);
    assert_eq!(store.save_count.get(), 1);
    assert_eq!(&*store.saved.borrow(), manager.table());
}

#[timeout(1000)]
#[test]
fn test_add_duplicate_identifier_is_rejected() {
    let (mut manager, store) = seeded_manager();
    let before = manager.table().clone();

    let result = manager.add(student("102", "Impostor", 10));

    assert_eq!(
        result,
        Err(DbError::AlreadyExists {
            id: "102".to_string()
        })
    );
    assert_eq!(manager.table(), &before);
    assert_eq!(store.save_count.get(), 0);
}

#[timeout(1000)]
#[test]
fn test_identifiers_stay_unique_across_many_adds() {
    let mut manager = RecordManager::new(MemoryStore::default()).unwrap();
    let attempts = ["1", "2", "1", "01", "2", "3", "01"];

    let mut rejected = 0;
    for (i, id) in attempts.iter().enumerate() {
        match manager.add(student(id, &format!("S{}", i), 50)) {
            Ok(()) => {}
            Err(DbError::AlreadyExists { .. }) => rejected += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(rejected, 3);
    assert_eq!(ids(manager.records()), vec!["1", "2", "01", "3"]);
}

#[timeout(1000)]
#[test]
fn test_identifier_match_is_case_sensitive() {
    let mut manager = RecordManager::new(MemoryStore::default()).unwrap();
    manager.add(student("abc", "Ann", 50)).unwrap();
    manager.add(student("ABC", "Bob", 50)).unwrap();

    assert_eq!(manager.len(), 2);
    assert_eq!(
        manager.delete("Abc"),
        Err(DbError::NotFound {
            id: "Abc".to_string()
        })
    );
}

#[timeout(1000)]
#[test]
fn test_update_changes_only_named_fields() {
    let (mut manager, store) = seeded_manager();
    let before = manager.table().clone();

    let changes = StudentChanges {
        score: Some(91),
        ..Default::default()
    };
    manager.update("102", &changes).unwrap();

    let after = manager.records();
    assert_eq!(after[0], before.records()[0]);
    assert_eq!(after[2], before.records()[2]);

    let mut expected = before.records()[1].clone();
    expected.score = 91;
    assert_eq!(after[1], expected);
    assert_eq!(store.save_count.get(), 1);
}

#[timeout(1000)]
#[test]
fn test_update_multiple_fields() {
    let (mut manager, _store) = seeded_manager();

    let changes = StudentChanges {
        first_name: Some("Annabel".to_string()),
        grade: Some("12".to_string()),
        age: Some(18),
        ..Default::default()
    };
    manager.update("101", &changes).unwrap();

    let updated = manager.get("101").unwrap();
    assert_eq!(updated.student_id, "101");
    assert_eq!(updated.first_name, "Annabel");
    assert_eq!(updated.grade, "12");
    assert_eq!(updated.age, 18);
    assert_eq!(updated.score, 72);
}

#[timeout(1000)]
#[test]
fn test_update_missing_identifier() {
    let (mut manager, store) = seeded_manager();
    let before = manager.table().clone();

    let result = manager.update("999", &StudentChanges::default());

    assert_eq!(
        result,
        Err(DbError::NotFound {
            id: "999".to_string()
        })
    );
    assert_eq!(manager.table(), &before);
    assert_eq!(store.save_count.get(), 0);
}

#[timeout(1000)]
#[test]
fn test_delete_then_list_and_delete_again() {
    let (mut manager, store) = seeded_manager();

    let removed = manager.delete("102").unwrap();
    assert_eq!(removed.first_name, "Anna");

    let listed = manager.list(&Query::new());
    assert!(listed.iter().all(|s| s.student_id != "102"));
    assert_eq!(ids(&listed), vec!["101", "103"]);
    assert!(manager.get("102").is_none());

    assert_eq!(
        manager.delete("102"),
        Err(DbError::NotFound {
            id: "102".to_string()
        })
    );
    assert_eq!(store.save_count.get(), 1);
}

#[timeout(1000)]
#[test]
fn test_list_filters_and_sorts() {
    let (manager, _store) = seeded_manager();

    let by_name = manager.list(&Query::new().filter(Field::FirstName, "ann"));
    assert_eq!(ids(&by_name), vec!["101", "102"]);

    let by_score = manager.list(&Query::new().sort_by(Field::Score));
    assert_eq!(ids(&by_score), vec!["101", "103", "102"]);

    let top = manager.list(&Query::new().min_score(88));
    assert_eq!(ids(&top), vec!["102"]);

    let excluded = manager.list(&Query::new().min_score(89));
    assert!(excluded.is_empty());
}

#[timeout(1000)]
#[test]
fn test_list_returns_a_copy() {
    let (mut manager, _store) = seeded_manager();

    let mut listed = manager.list(&Query::new());
    listed.clear();
    assert_eq!(manager.len(), 3);

    let snapshot = manager.list(&Query::new());
    manager.delete("101").unwrap();
    assert_eq!(snapshot.len(), 3);
}
