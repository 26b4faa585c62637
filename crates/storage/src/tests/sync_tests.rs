#![expect(clippy::unwrap_used, reason = "test code")]

use touchbase_core::TaskInput;

use super::{create_test_storage, day, first_account_id, log_call};

#[test]
fn new_rows_start_unsynced() {
    let (storage, _temp_dir) = create_test_storage();
    let id = first_account_id(&storage);
    log_call(&storage, id, day("2025-03-03"));
    storage
        .insert_task(&TaskInput {
            account_id: id,
            title: "follow up".to_owned(),
            description: None,
            due_date: None,
        })
        .unwrap();
    storage.insert_note(id, "asked about renewal", day("2025-03-03")).unwrap();

    let counts = storage.sync_counts().unwrap();
    assert_eq!(counts.unsynced_activities, 1);
    assert_eq!(counts.unsynced_tasks, 1);
    assert_eq!(counts.unsynced_notes, 1);
    assert_eq!(counts.total_unsynced, 3);
}

#[test]
fn unsynced_rows_carry_account_names() {
    let (storage, _temp_dir) = create_test_storage();
    let account = &storage.list_accounts().unwrap()[0];
    log_call(&storage, account.id, day("2025-03-03"));

    let rows = storage.unsynced_activities().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].account_name, account.name);
}

#[test]
fn marking_synced_removes_from_snapshot() {
    let (storage, _temp_dir) = create_test_storage();
    let id = first_account_id(&storage);
    let a1 = log_call(&storage, id, day("2025-03-03"));
    let a2 = log_call(&storage, id, day("2025-03-03"));

    storage.mark_activities_synced(&[a1]).unwrap();
    let remaining = storage.unsynced_activities().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, a2);

    // Marking the other kind's tables is independent.
    assert_eq!(storage.sync_counts().unwrap().unsynced_activities, 1);
}

#[test]
fn mark_synced_with_empty_ids_is_a_noop() {
    let (storage, _temp_dir) = create_test_storage();
    storage.mark_notes_synced(&[]).unwrap();
    assert_eq!(storage.sync_counts().unwrap().total_unsynced, 0);
}
