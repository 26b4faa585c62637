use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A dated free-text note against an account. Immutable; counts as a touch
/// for its date, same as an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub account_id: i64,
    pub content: String,
    pub note_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /api/notes`. `note_date` defaults to today.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteInput {
    pub account_id: i64,
    pub content: String,
    pub note_date: Option<NaiveDate>,
}
