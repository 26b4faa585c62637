use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A logged outreach action against an account. Immutable once created;
/// creating one marks the account touched for its date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub account_id: i64,
    pub activity_type: ActivityType,
    pub description: String,
    pub activity_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Call,
    Email,
    Meeting,
    Research,
    EventInvite,
    Internal,
    Other,
}

impl ActivityType {
    /// Stable wire/database string for this variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::Meeting => "meeting",
            Self::Research => "research",
            Self::EventInvite => "event_invite",
            Self::Internal => "internal",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(Self::Call),
            "email" => Ok(Self::Email),
            "meeting" => Ok(Self::Meeting),
            "research" => Ok(Self::Research),
            "event_invite" => Ok(Self::EventInvite),
            "internal" => Ok(Self::Internal),
            "other" => Ok(Self::Other),
            _ => Err(format!("invalid activity type: {s}")),
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for `POST /api/activities`. `activity_date` defaults to today
/// at the service boundary when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityInput {
    pub account_id: i64,
    pub activity_type: ActivityType,
    pub description: String,
    pub activity_date: Option<NaiveDate>,
}
