#![expect(clippy::unwrap_used, reason = "test code")]

use touchbase_core::{TaskInput, TaskStatus, TaskUpdate};

use super::{create_test_storage, day, first_account_id};
use crate::StorageError;

fn task_input(account_id: i64, title: &str) -> TaskInput {
    TaskInput { account_id, title: title.to_owned(), description: None, due_date: None }
}

#[test]
fn create_and_list() {
    let (storage, _temp_dir) = create_test_storage();
    let id = first_account_id(&storage);
    storage.insert_task(&task_input(id, "send follow-up")).unwrap();
    storage.insert_task(&task_input(id, "book qbr")).unwrap();

    let tasks = storage.list_tasks(id).unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.status == TaskStatus::Open));
}

#[test]
fn completing_sets_completed_at_and_reopening_clears_it() {
    let (storage, _temp_dir) = create_test_storage();
    let id = first_account_id(&storage);
    let task_id = storage.insert_task(&task_input(id, "send follow-up")).unwrap();

    let done = storage
        .update_task(task_id, &TaskUpdate { status: Some(TaskStatus::Completed), ..Default::default() })
        .unwrap();
    assert_eq!(done.status, TaskStatus::Completed);
    assert!(done.completed_at.is_some());

    let reopened = storage
        .update_task(task_id, &TaskUpdate { status: Some(TaskStatus::Open), ..Default::default() })
        .unwrap();
    assert_eq!(reopened.status, TaskStatus::Open);
    assert!(reopened.completed_at.is_none());
}

#[test]
fn partial_update_keeps_unset_fields() {
    let (storage, _temp_dir) = create_test_storage();
    let id = first_account_id(&storage);
    let task_id = storage
        .insert_task(&TaskInput {
            account_id: id,
            title: "original".to_owned(),
            description: Some("details".to_owned()),
            due_date: Some(day("2025-04-01")),
        })
        .unwrap();

    let updated = storage
        .update_task(task_id, &TaskUpdate { title: Some("renamed".to_owned()), ..Default::default() })
        .unwrap();
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.description.as_deref(), Some("details"));
    assert_eq!(updated.due_date, Some(day("2025-04-01")));
}

#[test]
fn open_tasks_sort_before_completed() {
    let (storage, _temp_dir) = create_test_storage();
    let id = first_account_id(&storage);
    let first = storage.insert_task(&task_input(id, "a")).unwrap();
    storage.insert_task(&task_input(id, "b")).unwrap();
    storage
        .update_task(first, &TaskUpdate { status: Some(TaskStatus::Completed), ..Default::default() })
        .unwrap();

    let tasks = storage.list_tasks(id).unwrap();
    assert_eq!(tasks[0].title, "b");
    assert_eq!(tasks[1].title, "a");
}

#[test]
fn delete_reports_presence() {
    let (storage, _temp_dir) = create_test_storage();
    let id = first_account_id(&storage);
    let task_id = storage.insert_task(&task_input(id, "temp")).unwrap();
    assert!(storage.delete_task(task_id).unwrap());
    assert!(!storage.delete_task(task_id).unwrap());
}

#[test]
fn update_unknown_task_is_not_found() {
    let (storage, _temp_dir) = create_test_storage();
    let err = storage.update_task(4242, &TaskUpdate::default()).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "task", id: 4242 }));
}

#[test]
fn overdue_counts_open_past_due_only() {
    let (storage, _temp_dir) = create_test_storage();
    let id = first_account_id(&storage);
    storage
        .insert_task(&TaskInput {
            account_id: id,
            title: "late".to_owned(),
            description: None,
            due_date: Some(day("2025-03-01")),
        })
        .unwrap();
    let done = storage
        .insert_task(&TaskInput {
            account_id: id,
            title: "late but done".to_owned(),
            description: None,
            due_date: Some(day("2025-03-01")),
        })
        .unwrap();
    storage
        .update_task(done, &TaskUpdate { status: Some(TaskStatus::Completed), ..Default::default() })
        .unwrap();
    storage
        .insert_task(&TaskInput {
            account_id: id,
            title: "due today".to_owned(),
            description: None,
            due_date: Some(day("2025-03-05")),
        })
        .unwrap();

    assert_eq!(storage.count_overdue_tasks(super::day("2025-03-05")).unwrap(), 1);
}
