//! One-way Google Sheets sync orchestration.
//!
//! Delivery is at-least-once: rows are marked synced only after their kind's
//! push succeeds, so a crash between push and mark re-sends those rows on
//! the next run. A failure mid-run leaves earlier kinds marked and the
//! failing kind's rows unsynced.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use touchbase_sheets::SheetPush;
use touchbase_storage::{
    Storage, SyncCounts, UnsyncedActivity, UnsyncedNote, UnsyncedTask,
};

use crate::ServiceError;

const ACTIVITY_SHEET: &str = "Activity Log";
const ACTIVITY_HEADERS: [&str; 5] =
    ["Date", "Account", "Activity Type", "Description", "Logged At"];

const TASK_SHEET: &str = "Tasks";
const TASK_HEADERS: [&str; 7] =
    ["Account", "Task", "Description", "Due Date", "Status", "Created", "Completed"];

const NOTE_SHEET: &str = "Notes";
const NOTE_HEADERS: [&str; 4] = ["Date", "Account", "Note", "Logged At"];

/// Result of one full sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub success: bool,
    pub activities_synced: usize,
    pub tasks_synced: usize,
    pub notes_synced: usize,
    pub total_synced: usize,
    pub synced_at: DateTime<Utc>,
}

pub struct SyncService {
    storage: Arc<Storage>,
    sheets: Option<Arc<dyn SheetPush>>,
}

impl SyncService {
    #[must_use]
    pub fn new(storage: Arc<Storage>, sheets: Option<Arc<dyn SheetPush>>) -> Self {
        Self { storage, sheets }
    }

    /// Whether a sheets backend is wired up at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.sheets.is_some()
    }

    pub fn status(&self) -> Result<SyncCounts, ServiceError> {
        Ok(self.storage.sync_counts()?)
    }

    /// Pushes every unsynced activity, task, and note, in that order. Each
    /// kind is marked synced as soon as its push lands; an error aborts the
    /// run and leaves later kinds for the next one.
    pub async fn full_sync(&self) -> Result<SyncReport, ServiceError> {
        let sheets = self
            .sheets
            .as_ref()
            .ok_or_else(|| {
                ServiceError::NotConfigured("Google Sheets sync is not configured".to_owned())
            })?;

        let activities = self.storage.unsynced_activities()?;
        let activity_ids: Vec<i64> = activities.iter().map(|a| a.id).collect();
        let activities_synced = sheets
            .push(ACTIVITY_SHEET, &ACTIVITY_HEADERS, activities.iter().map(activity_row).collect())
            .await?;
        self.storage.mark_activities_synced(&activity_ids)?;

        let tasks = self.storage.unsynced_tasks()?;
        let task_ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        let tasks_synced =
            sheets.push(TASK_SHEET, &TASK_HEADERS, tasks.iter().map(task_row).collect()).await?;
        self.storage.mark_tasks_synced(&task_ids)?;

        let notes = self.storage.unsynced_notes()?;
        let note_ids: Vec<i64> = notes.iter().map(|n| n.id).collect();
        let notes_synced =
            sheets.push(NOTE_SHEET, &NOTE_HEADERS, notes.iter().map(note_row).collect()).await?;
        self.storage.mark_notes_synced(&note_ids)?;

        let report = SyncReport {
            success: true,
            activities_synced,
            tasks_synced,
            notes_synced,
            total_synced: activities_synced + tasks_synced + notes_synced,
            synced_at: Utc::now(),
        };
        tracing::info!(total = report.total_synced, "sheets sync completed");
        Ok(report)
    }
}

fn activity_row(a: &UnsyncedActivity) -> Vec<String> {
    vec![
        a.activity_date.to_string(),
        a.account_name.clone(),
        a.activity_type.as_str().to_owned(),
        a.description.clone(),
        a.created_at.to_rfc3339(),
    ]
}

fn task_row(t: &UnsyncedTask) -> Vec<String> {
    vec![
        t.account_name.clone(),
        t.title.clone(),
        t.description.clone().unwrap_or_default(),
        t.due_date.map(|d| d.to_string()).unwrap_or_default(),
        t.status.as_str().to_owned(),
        t.created_at.to_rfc3339(),
        t.completed_at.map(|d| d.to_rfc3339()).unwrap_or_default(),
    ]
}

fn note_row(n: &UnsyncedNote) -> Vec<String> {
    vec![
        n.note_date.to_string(),
        n.account_name.clone(),
        n.content.clone(),
        n.created_at.to_rfc3339(),
    ]
}
