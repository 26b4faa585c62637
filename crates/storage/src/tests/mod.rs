//! Test utilities and module declarations for storage tests.

use chrono::NaiveDate;
use tempfile::TempDir;
use touchbase_core::ActivityType;

use crate::Storage;

mod sync_tests;
mod task_tests;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    storage.seed_accounts().unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn first_account_id(storage: &Storage) -> i64 {
    storage.list_accounts().unwrap()[0].id
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn log_call(storage: &Storage, account_id: i64, date: NaiveDate) -> i64 {
    storage.insert_activity(account_id, ActivityType::Call, "intro call", date).unwrap()
}
