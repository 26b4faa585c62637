//! Unsynced-row snapshots and synced markers for the spreadsheet push.
//!
//! Rows are marked synced only after a successful push of their kind, so a
//! partial failure never un-marks rows that already went out.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::params;
use serde::Serialize;
use touchbase_core::{ActivityType, TaskStatus};

use super::{Storage, opt_date, opt_datetime, parse_date, parse_datetime, parse_wire};
use crate::StorageError;

/// An unsynced activity joined with its account name.
#[derive(Debug, Clone, Serialize)]
pub struct UnsyncedActivity {
    pub id: i64,
    pub account_name: String,
    pub activity_type: ActivityType,
    pub description: String,
    pub activity_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnsyncedTask {
    pub id: i64,
    pub account_name: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnsyncedNote {
    pub id: i64,
    pub account_name: String,
    pub content: String,
    pub note_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Unsynced row counts per kind for `GET /api/sync/status`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SyncCounts {
    pub unsynced_activities: i64,
    pub unsynced_tasks: i64,
    pub unsynced_notes: i64,
    pub total_unsynced: i64,
}

fn mark_synced(
    storage: &Storage,
    table: &str,
    ids: &[i64],
) -> Result<(), StorageError> {
    if ids.is_empty() {
        return Ok(());
    }
    let conn = storage.conn()?;
    let placeholders = vec!["?"; ids.len()].join(",");
    let sql = format!("UPDATE {table} SET synced_to_sheets = 1 WHERE id IN ({placeholders})");
    conn.execute(&sql, rusqlite::params_from_iter(ids.iter()))?;
    Ok(())
}

impl Storage {
    pub fn unsynced_activities(&self) -> Result<Vec<UnsyncedActivity>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT a.id, acc.name, a.activity_type, a.description, a.activity_date, a.created_at
             FROM activities a
             JOIN accounts acc ON a.account_id = acc.id
             WHERE a.synced_to_sheets = 0
             ORDER BY a.activity_date DESC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(UnsyncedActivity {
                    id: row.get(0)?,
                    account_name: row.get(1)?,
                    activity_type: parse_wire(&row.get::<_, String>(2)?)?,
                    description: row.get(3)?,
                    activity_date: parse_date(&row.get::<_, String>(4)?)?,
                    created_at: parse_datetime(&row.get::<_, String>(5)?)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    pub fn unsynced_tasks(&self) -> Result<Vec<UnsyncedTask>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT t.id, acc.name, t.title, t.description, t.due_date, t.status, t.created_at, t.completed_at
             FROM tasks t
             JOIN accounts acc ON t.account_id = acc.id
             WHERE t.synced_to_sheets = 0
             ORDER BY t.created_at DESC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(UnsyncedTask {
                    id: row.get(0)?,
                    account_name: row.get(1)?,
                    title: row.get(2)?,
                    description: row.get(3)?,
                    due_date: opt_date(row.get(4)?)?,
                    status: parse_wire(&row.get::<_, String>(5)?)?,
                    created_at: parse_datetime(&row.get::<_, String>(6)?)?,
                    completed_at: opt_datetime(row.get(7)?)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    pub fn unsynced_notes(&self) -> Result<Vec<UnsyncedNote>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT n.id, acc.name, n.content, n.note_date, n.created_at
             FROM notes n
             JOIN accounts acc ON n.account_id = acc.id
             WHERE n.synced_to_sheets = 0
             ORDER BY n.note_date DESC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(UnsyncedNote {
                    id: row.get(0)?,
                    account_name: row.get(1)?,
                    content: row.get(2)?,
                    note_date: parse_date(&row.get::<_, String>(3)?)?,
                    created_at: parse_datetime(&row.get::<_, String>(4)?)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    pub fn mark_activities_synced(&self, ids: &[i64]) -> Result<(), StorageError> {
        mark_synced(self, "activities", ids)
    }

    pub fn mark_tasks_synced(&self, ids: &[i64]) -> Result<(), StorageError> {
        mark_synced(self, "tasks", ids)
    }

    pub fn mark_notes_synced(&self, ids: &[i64]) -> Result<(), StorageError> {
        mark_synced(self, "notes", ids)
    }

    pub fn sync_counts(&self) -> Result<SyncCounts, StorageError> {
        let conn = self.conn()?;
        let count = |table: &str| -> Result<i64, rusqlite::Error> {
            conn.query_row(
                &format!("SELECT COUNT(*) FROM {table} WHERE synced_to_sheets = 0"),
                [],
                |row| row.get(0),
            )
        };
        let unsynced_activities = count("activities")?;
        let unsynced_tasks = count("tasks")?;
        let unsynced_notes = count("notes")?;
        Ok(SyncCounts {
            unsynced_activities,
            unsynced_tasks,
            unsynced_notes,
            total_unsynced: unsynced_activities + unsynced_tasks + unsynced_notes,
        })
    }
}
