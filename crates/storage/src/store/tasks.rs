//! Task queries, including the completed_at bookkeeping on status changes.

use chrono::{NaiveDate, Utc};
use rusqlite::{OptionalExtension as _, Row, params};
use touchbase_core::{Task, TaskInput, TaskStatus, TaskUpdate};

use super::{Storage, opt_date, opt_datetime, parse_datetime, parse_wire};
use crate::StorageError;

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        account_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        due_date: opt_date(row.get(4)?)?,
        status: parse_wire(&row.get::<_, String>(5)?)?,
        created_at: parse_datetime(&row.get::<_, String>(6)?)?,
        completed_at: opt_datetime(row.get(7)?)?,
    })
}

const TASK_COLS: &str =
    "id, account_id, title, description, due_date, status, created_at, completed_at";

impl Storage {
    pub fn insert_task(&self, input: &TaskInput) -> Result<i64, StorageError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO tasks (account_id, title, description, due_date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                input.account_id,
                input.title,
                input.description,
                input.due_date.map(|d| d.to_string()),
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn get_task(&self, id: i64) -> Result<Option<Task>, StorageError> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {TASK_COLS} FROM tasks WHERE id = ?1"),
            params![id],
            map_task,
        )
        .optional()
        .map_err(Into::into)
    }

    /// Read-modify-write: unset fields keep their prior value.
    /// `completed_at` is stamped on the open→completed transition and
    /// cleared when a task is reopened.
    pub fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, StorageError> {
        let task = self
            .get_task(id)?
            .ok_or(StorageError::NotFound { entity: "task", id })?;

        let status = update.status.unwrap_or(task.status);
        let completed_at = match (task.status, status) {
            (TaskStatus::Open, TaskStatus::Completed) => Some(Utc::now()),
            (_, TaskStatus::Open) => None,
            _ => task.completed_at,
        };

        let conn = self.conn()?;
        conn.execute(
            "UPDATE tasks SET title = ?1, description = ?2, due_date = ?3, status = ?4, completed_at = ?5
             WHERE id = ?6",
            params![
                update.title.as_deref().unwrap_or(&task.title),
                update.description.as_deref().or(task.description.as_deref()),
                update.due_date.or(task.due_date).map(|d| d.to_string()),
                status.as_str(),
                completed_at.map(|d| d.to_rfc3339()),
                id,
            ],
        )?;
        self.get_task(id)?.ok_or(StorageError::NotFound { entity: "task", id })
    }

    /// Returns whether a row was deleted.
    pub fn delete_task(&self, id: i64) -> Result<bool, StorageError> {
        let conn = self.conn()?;
        Ok(conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])? > 0)
    }

    /// Open tasks first, then by due date (no due date last), newest created
    /// first within a group.
    pub fn list_tasks(&self, account_id: i64) -> Result<Vec<Task>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {TASK_COLS} FROM tasks
             WHERE account_id = ?1
             ORDER BY
                 CASE WHEN status = 'open' THEN 0 ELSE 1 END,
                 due_date IS NULL,
                 due_date ASC,
                 created_at DESC"
        ))?;
        let tasks = stmt
            .query_map(params![account_id], map_task)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }

    /// Open tasks past their due date, roster-wide.
    pub fn count_overdue_tasks(&self, today: NaiveDate) -> Result<i64, StorageError> {
        let conn = self.conn()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM tasks WHERE status = 'open' AND due_date < ?1",
            params![today.to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
