use chrono::Utc;
use rusqlite::{OptionalExtension as _, Row, params};
use touchbase_core::{Deal, DealInput, DealUpdate};

use super::{Storage, opt_date, parse_datetime, parse_wire};
use crate::StorageError;

fn map_deal(row: &Row<'_>) -> rusqlite::Result<Deal> {
    Ok(Deal {
        id: row.get(0)?,
        account_id: row.get(1)?,
        name: row.get(2)?,
        stage: parse_wire(&row.get::<_, String>(3)?)?,
        value: row.get(4)?,
        products: row.get(5)?,
        close_date: opt_date(row.get(6)?)?,
        notes: row.get(7)?,
        created_at: parse_datetime(&row.get::<_, String>(8)?)?,
    })
}

const DEAL_COLS: &str =
    "id, account_id, name, stage, value, products, close_date, notes, created_at";

impl Storage {
    pub fn insert_deal(&self, input: &DealInput) -> Result<i64, StorageError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO deals (account_id, name, stage, value, products, close_date, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                input.account_id,
                input.name,
                input.stage.as_str(),
                input.value,
                input.products,
                input.close_date.map(|d| d.to_string()),
                input.notes,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn get_deal(&self, id: i64) -> Result<Option<Deal>, StorageError> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {DEAL_COLS} FROM deals WHERE id = ?1"),
            params![id],
            map_deal,
        )
        .optional()
        .map_err(Into::into)
    }

    pub fn update_deal(&self, id: i64, update: &DealUpdate) -> Result<Deal, StorageError> {
        let deal =
            self.get_deal(id)?.ok_or(StorageError::NotFound { entity: "deal", id })?;
        let conn = self.conn()?;
        conn.execute(
            "UPDATE deals SET name = ?1, stage = ?2, value = ?3, products = ?4, close_date = ?5, notes = ?6
             WHERE id = ?7",
            params![
                update.name.as_deref().unwrap_or(&deal.name),
                update.stage.unwrap_or(deal.stage).as_str(),
                update.value.or(deal.value),
                update.products.as_deref().or(deal.products.as_deref()),
                update.close_date.or(deal.close_date).map(|d| d.to_string()),
                update.notes.as_deref().or(deal.notes.as_deref()),
                id,
            ],
        )?;
        self.get_deal(id)?.ok_or(StorageError::NotFound { entity: "deal", id })
    }

    pub fn delete_deal(&self, id: i64) -> Result<bool, StorageError> {
        let conn = self.conn()?;
        Ok(conn.execute("DELETE FROM deals WHERE id = ?1", params![id])? > 0)
    }

    /// Highest value first, most recent first among equals.
    pub fn list_deals(&self, account_id: i64) -> Result<Vec<Deal>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {DEAL_COLS} FROM deals
             WHERE account_id = ?1
             ORDER BY COALESCE(value, 0) DESC, created_at DESC"
        ))?;
        let deals = stmt
            .query_map(params![account_id], map_deal)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(deals)
    }
}
