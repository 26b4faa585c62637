//! Per-account ledger snapshots for the core derivation engines.
//!
//! Loads raw facts only; every derived field is computed downstream by
//! `touchbase_core::derive_status` so derived state can never drift from
//! the entries that produce it.

use rusqlite::params;
use touchbase_core::{AccountLedger, DealFacts};

use super::{PooledConn, Storage, parse_date, parse_datetime, parse_wire};
use crate::StorageError;

fn date_column(
    conn: &PooledConn,
    sql: &str,
    account_id: i64,
) -> Result<Vec<chrono::NaiveDate>, StorageError> {
    let mut stmt = conn.prepare(sql)?;
    let dates = stmt
        .query_map(params![account_id], |row| parse_date(&row.get::<_, String>(0)?))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(dates)
}

impl Storage {
    /// Loads everything recorded against one account.
    pub fn load_ledger(&self, account_id: i64) -> Result<AccountLedger, StorageError> {
        let conn = self.conn()?;

        let activity_dates = date_column(
            &conn,
            "SELECT activity_date FROM activities WHERE account_id = ?1",
            account_id,
        )?;
        let note_dates = date_column(
            &conn,
            "SELECT note_date FROM notes WHERE account_id = ?1",
            account_id,
        )?;
        let snooze_dates = date_column(
            &conn,
            "SELECT snooze_date FROM snoozes WHERE account_id = ?1",
            account_id,
        )?;

        let mut stmt = conn.prepare(
            "SELECT activity_date, description FROM activities
             WHERE account_id = ?1
             ORDER BY activity_date DESC, created_at DESC
             LIMIT 1",
        )?;
        let last_activity = stmt
            .query_map(params![account_id], |row| {
                Ok((parse_date(&row.get::<_, String>(0)?)?, row.get::<_, String>(1)?))
            })?
            .next()
            .transpose()?;
        let (last_activity_date, last_activity_description) = match last_activity {
            Some((date, desc)) => (Some(date), Some(desc)),
            None => (None, None),
        };

        let open_tasks: i64 = conn.query_row(
            "SELECT COUNT(*) FROM tasks WHERE account_id = ?1 AND status = 'open'",
            params![account_id],
            |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(
            "SELECT stage, value, created_at FROM deals WHERE account_id = ?1",
        )?;
        let deals = stmt
            .query_map(params![account_id], |row| {
                Ok(DealFacts {
                    stage: parse_wire(&row.get::<_, String>(0)?)?,
                    value: row.get(1)?,
                    created_at: parse_datetime(&row.get::<_, String>(2)?)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let contact_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM contacts WHERE account_id = ?1",
            params![account_id],
            |row| row.get(0),
        )?;

        Ok(AccountLedger {
            activity_dates,
            note_dates,
            snooze_dates,
            last_activity_date,
            last_activity_description,
            open_tasks,
            deals,
            contact_count,
        })
    }
}
