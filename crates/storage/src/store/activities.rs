//! Activity ledger: append-only, no update or delete path.

use chrono::{NaiveDate, Utc};
use rusqlite::{Row, params};
use touchbase_core::{Activity, ActivityType};

use super::{Storage, parse_date, parse_datetime, parse_wire};
use crate::StorageError;

fn map_activity(row: &Row<'_>) -> rusqlite::Result<Activity> {
    Ok(Activity {
        id: row.get(0)?,
        account_id: row.get(1)?,
        activity_type: parse_wire(&row.get::<_, String>(2)?)?,
        description: row.get(3)?,
        activity_date: parse_date(&row.get::<_, String>(4)?)?,
        created_at: parse_datetime(&row.get::<_, String>(5)?)?,
    })
}

impl Storage {
    pub fn insert_activity(
        &self,
        account_id: i64,
        activity_type: ActivityType,
        description: &str,
        activity_date: NaiveDate,
    ) -> Result<i64, StorageError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO activities (account_id, activity_type, description, activity_date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                account_id,
                activity_type.as_str(),
                description,
                activity_date.to_string(),
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Newest first: by activity date, then by creation time.
    pub fn list_activities(
        &self,
        account_id: i64,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Activity>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, account_id, activity_type, description, activity_date, created_at
             FROM activities
             WHERE account_id = ?1
             ORDER BY activity_date DESC, created_at DESC
             LIMIT ?2 OFFSET ?3",
        )?;
        let activities = stmt
            .query_map(params![account_id, limit as i64, offset as i64], map_activity)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(activities)
    }
}
