//! Ledger mutations: activities, notes, and tasks.
//!
//! Logging an activity or a note is a touch, so both record a streak touch
//! for the entry's date. Task edits never touch an account.

use std::sync::Arc;

use chrono::NaiveDate;
use touchbase_core::{
    Activity, ActivityInput, Note, NoteInput, Task, TaskInput, TaskUpdate, MAX_QUERY_LIMIT,
};
use touchbase_storage::{Storage, StorageError};

use crate::ServiceError;

pub struct LedgerService {
    storage: Arc<Storage>,
}

impl LedgerService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Records an activity against an account. A missing `activity_date`
    /// defaults to `today`; an explicit one may be in the past or future.
    pub fn log_activity(
        &self,
        input: &ActivityInput,
        today: NaiveDate,
    ) -> Result<i64, ServiceError> {
        if input.description.trim().is_empty() {
            return Err(ServiceError::InvalidInput("description must not be empty".to_owned()));
        }
        self.require_account(input.account_id)?;
        let date = input.activity_date.unwrap_or(today);
        let id = self.storage.insert_activity(
            input.account_id,
            input.activity_type,
            input.description.trim(),
            date,
        )?;
        self.storage.record_streak_touch(date)?;
        tracing::debug!(activity_id = id, account_id = input.account_id, "activity logged");
        Ok(id)
    }

    pub fn list_activities(
        &self,
        account_id: i64,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Activity>, ServiceError> {
        self.require_account(account_id)?;
        Ok(self.storage.list_activities(account_id, limit.clamp(1, MAX_QUERY_LIMIT), offset)?)
    }

    pub fn add_note(&self, input: &NoteInput, today: NaiveDate) -> Result<i64, ServiceError> {
        if input.content.trim().is_empty() {
            return Err(ServiceError::InvalidInput("content must not be empty".to_owned()));
        }
        self.require_account(input.account_id)?;
        let date = input.note_date.unwrap_or(today);
        let id = self.storage.insert_note(input.account_id, input.content.trim(), date)?;
        self.storage.record_streak_touch(date)?;
        Ok(id)
    }

    pub fn list_notes(&self, account_id: i64) -> Result<Vec<Note>, ServiceError> {
        self.require_account(account_id)?;
        Ok(self.storage.list_notes(account_id)?)
    }

    pub fn create_task(&self, input: &TaskInput) -> Result<i64, ServiceError> {
        if input.title.trim().is_empty() {
            return Err(ServiceError::InvalidInput("title must not be empty".to_owned()));
        }
        self.require_account(input.account_id)?;
        Ok(self.storage.insert_task(input)?)
    }

    pub fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, ServiceError> {
        Ok(self.storage.update_task(id, update)?)
    }

    pub fn delete_task(&self, id: i64) -> Result<(), ServiceError> {
        if self.storage.delete_task(id)? {
            Ok(())
        } else {
            Err(ServiceError::Storage(StorageError::NotFound { entity: "task", id }))
        }
    }

    pub fn list_tasks(&self, account_id: i64) -> Result<Vec<Task>, ServiceError> {
        self.require_account(account_id)?;
        Ok(self.storage.list_tasks(account_id)?)
    }

    fn require_account(&self, id: i64) -> Result<(), ServiceError> {
        self.storage
            .get_account(id)?
            .map(|_| ())
            .ok_or(ServiceError::Storage(StorageError::NotFound { entity: "account", id }))
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use tempfile::TempDir;
    use touchbase_core::{ActivityType, TaskStatus};

    fn setup() -> (TempDir, Arc<Storage>, LedgerService) {
        let dir = TempDir::new().unwrap();
        let storage = Arc::new(Storage::new(&dir.path().join("test.db")).unwrap());
        storage.seed_accounts().unwrap();
        (dir, Arc::clone(&storage), LedgerService::new(storage))
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn first_account(storage: &Storage) -> i64 {
        storage.list_accounts().unwrap()[0].id
    }

    #[test]
    fn blank_description_is_rejected() {
        let (_dir, storage, service) = setup();
        let input = ActivityInput {
            account_id: first_account(&storage),
            activity_type: ActivityType::Call,
            description: "   ".to_owned(),
            activity_date: None,
        };
        let err = service.log_activity(&input, day("2025-03-03")).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn activity_for_unknown_account_is_not_found() {
        let (_dir, _storage, service) = setup();
        let input = ActivityInput {
            account_id: 424_242,
            activity_type: ActivityType::Email,
            description: "followup".to_owned(),
            activity_date: None,
        };
        let err = service.log_activity(&input, day("2025-03-03")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn activity_date_defaults_to_today() {
        let (_dir, storage, service) = setup();
        let account_id = first_account(&storage);
        let today = day("2025-03-03");
        let input = ActivityInput {
            account_id,
            activity_type: ActivityType::Meeting,
            description: "QBR".to_owned(),
            activity_date: None,
        };
        service.log_activity(&input, today).unwrap();
        let listed = service.list_activities(account_id, 10, 0).unwrap();
        assert_eq!(listed[0].activity_date, today);
    }

    #[test]
    fn logging_advances_the_streak() {
        let (_dir, storage, service) = setup();
        let account_id = first_account(&storage);
        let input = NoteInput {
            account_id,
            content: "left voicemail".to_owned(),
            note_date: None,
        };
        service.add_note(&input, day("2025-03-03")).unwrap();
        let streak = storage.streak_state().unwrap();
        assert_eq!(streak.current, 1);
        assert_eq!(streak.last_touch_date, Some(day("2025-03-03")));
    }

    #[test]
    fn task_lifecycle_round_trip() {
        let (_dir, storage, service) = setup();
        let account_id = first_account(&storage);
        let id = service
            .create_task(&TaskInput {
                account_id,
                title: "send renewal quote".to_owned(),
                description: None,
                due_date: Some(day("2025-03-10")),
            })
            .unwrap();

        let update = TaskUpdate { status: Some(TaskStatus::Completed), ..Default::default() };
        let done = service.update_task(id, &update).unwrap();
        assert_eq!(done.status, TaskStatus::Completed);
        assert!(done.completed_at.is_some());

        service.delete_task(id).unwrap();
        assert!(service.delete_task(id).unwrap_err().is_not_found());
    }

    #[test]
    fn listing_limit_is_capped() {
        let (_dir, storage, service) = setup();
        let account_id = first_account(&storage);
        // A hostile limit larger than the cap must not panic or overflow.
        let listed = service.list_activities(account_id, usize::MAX, 0).unwrap();
        assert!(listed.is_empty());
    }
}
