//! Account roster queries. The roster is seeded once; rows are edited but
//! never inserted or deleted through normal use.

use rusqlite::{Row, params};
use touchbase_core::{Account, AccountUpdate};

use super::{Storage, opt_date, parse_datetime};
use crate::StorageError;

/// Fixed seed roster carried over from the original tracker.
const SEED_ROSTER: &[(&str, &str, &str)] = &[
    ("Acuity Insurance", "Insurance", "Sheboygan, WI"),
    ("MGIC Investment Corporation", "Insurance/Financial Services", "Milwaukee, WI"),
    ("Rockwell Automation", "Manufacturing/Industrial Automation", "Milwaukee, WI"),
    ("Oshkosh Corporation", "Manufacturing/Defense", "Oshkosh, WI"),
    ("Kohler Co", "Manufacturing/Consumer Products", "Kohler, WI"),
    ("Johnson Controls", "Manufacturing/Building Technology", "Milwaukee, WI"),
    ("Harley-Davidson", "Manufacturing/Automotive", "Milwaukee, WI"),
    ("WEC Energy Group", "Utilities", "Milwaukee, WI"),
    ("Northwestern Mutual", "Financial Services/Insurance", "Milwaukee, WI"),
    ("Fiserv", "Financial Services/Fintech", "Brookfield, WI"),
    ("Exact Sciences", "Healthcare/Diagnostics", "Madison, WI"),
    ("Epic Systems", "Healthcare/Software", "Verona, WI"),
    ("American Family Insurance", "Insurance", "Madison, WI"),
];

fn map_account(row: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get(0)?,
        name: row.get(1)?,
        industry: row.get(2)?,
        location: row.get(3)?,
        renewal_date: opt_date(row.get(4)?)?,
        annual_value: row.get(5)?,
        created_at: parse_datetime(&row.get::<_, String>(6)?)?,
    })
}

const ACCOUNT_COLS: &str =
    "id, name, industry, location, renewal_date, annual_value, created_at";

impl Storage {
    /// Inserts any seed accounts not already present. Returns the number of
    /// rows added.
    pub fn seed_accounts(&self) -> Result<usize, StorageError> {
        let conn = self.conn()?;
        let mut added = 0usize;
        for (name, industry, location) in SEED_ROSTER {
            added += conn.execute(
                "INSERT OR IGNORE INTO accounts (name, industry, location) VALUES (?1, ?2, ?3)",
                params![name, industry, location],
            )?;
        }
        Ok(added)
    }

    pub fn list_accounts(&self) -> Result<Vec<Account>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(&format!("SELECT {ACCOUNT_COLS} FROM accounts ORDER BY name"))?;
        let accounts = stmt
            .query_map([], map_account)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(accounts)
    }

    pub fn get_account(&self, id: i64) -> Result<Option<Account>, StorageError> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {ACCOUNT_COLS} FROM accounts WHERE id = ?1"))?;
        let mut rows = stmt.query_map(params![id], map_account)?;
        rows.next().transpose().map_err(Into::into)
    }

    /// Applies the editable fields; `None` leaves a column unchanged.
    /// Errors with `NotFound` for an unknown account.
    pub fn update_account(&self, id: i64, update: &AccountUpdate) -> Result<(), StorageError> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE accounts SET
                industry = COALESCE(?1, industry),
                location = COALESCE(?2, location),
                renewal_date = COALESCE(?3, renewal_date),
                annual_value = COALESCE(?4, annual_value)
             WHERE id = ?5",
            params![
                update.industry,
                update.location,
                update.renewal_date.map(|d| d.to_string()),
                update.annual_value,
                id
            ],
        )?;
        if changed == 0 {
            return Err(StorageError::NotFound { entity: "account", id });
        }
        Ok(())
    }
}
