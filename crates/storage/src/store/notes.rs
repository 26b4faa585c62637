//! Note ledger: append-only, counts as a touch like an activity.

use chrono::{NaiveDate, Utc};
use rusqlite::{Row, params};
use touchbase_core::Note;

use super::{Storage, parse_date, parse_datetime};
use crate::StorageError;

fn map_note(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        account_id: row.get(1)?,
        content: row.get(2)?,
        note_date: parse_date(&row.get::<_, String>(3)?)?,
        created_at: parse_datetime(&row.get::<_, String>(4)?)?,
    })
}

impl Storage {
    pub fn insert_note(
        &self,
        account_id: i64,
        content: &str,
        note_date: NaiveDate,
    ) -> Result<i64, StorageError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO notes (account_id, content, note_date, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![account_id, content, note_date.to_string(), Utc::now().to_rfc3339()],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn list_notes(&self, account_id: i64) -> Result<Vec<Note>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, account_id, content, note_date, created_at
             FROM notes
             WHERE account_id = ?1
             ORDER BY note_date DESC, created_at DESC",
        )?;
        let notes =
            stmt.query_map(params![account_id], map_note)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }
}
