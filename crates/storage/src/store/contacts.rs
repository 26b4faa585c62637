use chrono::Utc;
use rusqlite::{OptionalExtension as _, Row, params};
use touchbase_core::{Contact, ContactInput, ContactRole, ContactUpdate};

use super::{Storage, opt_date, parse_datetime, parse_wire};
use crate::StorageError;

fn map_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
    let role: Option<String> = row.get(4)?;
    Ok(Contact {
        id: row.get(0)?,
        account_id: row.get(1)?,
        name: row.get(2)?,
        title: row.get(3)?,
        role: role.as_deref().map(parse_wire::<ContactRole>).transpose()?,
        email: row.get(5)?,
        phone: row.get(6)?,
        notes: row.get(7)?,
        last_contacted: opt_date(row.get(8)?)?,
        created_at: parse_datetime(&row.get::<_, String>(9)?)?,
    })
}

const CONTACT_COLS: &str =
    "id, account_id, name, title, role, email, phone, notes, last_contacted, created_at";

impl Storage {
    pub fn insert_contact(&self, input: &ContactInput) -> Result<i64, StorageError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO contacts (account_id, name, title, role, email, phone, notes, last_contacted, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                input.account_id,
                input.name,
                input.title,
                input.role.map(ContactRole::as_str),
                input.email,
                input.phone,
                input.notes,
                input.last_contacted.map(|d| d.to_string()),
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn get_contact(&self, id: i64) -> Result<Option<Contact>, StorageError> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {CONTACT_COLS} FROM contacts WHERE id = ?1"),
            params![id],
            map_contact,
        )
        .optional()
        .map_err(Into::into)
    }

    pub fn update_contact(&self, id: i64, update: &ContactUpdate) -> Result<Contact, StorageError> {
        let contact =
            self.get_contact(id)?.ok_or(StorageError::NotFound { entity: "contact", id })?;
        let conn = self.conn()?;
        conn.execute(
            "UPDATE contacts SET name = ?1, title = ?2, role = ?3, email = ?4, phone = ?5, notes = ?6, last_contacted = ?7
             WHERE id = ?8",
            params![
                update.name.as_deref().unwrap_or(&contact.name),
                update.title.as_deref().or(contact.title.as_deref()),
                update.role.or(contact.role).map(ContactRole::as_str),
                update.email.as_deref().or(contact.email.as_deref()),
                update.phone.as_deref().or(contact.phone.as_deref()),
                update.notes.as_deref().or(contact.notes.as_deref()),
                update.last_contacted.or(contact.last_contacted).map(|d| d.to_string()),
                id,
            ],
        )?;
        self.get_contact(id)?.ok_or(StorageError::NotFound { entity: "contact", id })
    }

    pub fn delete_contact(&self, id: i64) -> Result<bool, StorageError> {
        let conn = self.conn()?;
        Ok(conn.execute("DELETE FROM contacts WHERE id = ?1", params![id])? > 0)
    }

    pub fn list_contacts(&self, account_id: i64) -> Result<Vec<Contact>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {CONTACT_COLS} FROM contacts WHERE account_id = ?1 ORDER BY name"
        ))?;
        let contacts = stmt
            .query_map(params![account_id], map_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(contacts)
    }
}
