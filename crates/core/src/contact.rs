use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A person at an account. Mutable and deletable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub title: Option<String>,
    pub role: Option<ContactRole>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub last_contacted: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactRole {
    Champion,
    DecisionMaker,
    Influencer,
    Technical,
    Executive,
    Other,
}

impl ContactRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Champion => "champion",
            Self::DecisionMaker => "decision_maker",
            Self::Influencer => "influencer",
            Self::Technical => "technical",
            Self::Executive => "executive",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for ContactRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "champion" => Ok(Self::Champion),
            "decision_maker" => Ok(Self::DecisionMaker),
            "influencer" => Ok(Self::Influencer),
            "technical" => Ok(Self::Technical),
            "executive" => Ok(Self::Executive),
            "other" => Ok(Self::Other),
            _ => Err(format!("invalid contact role: {s}")),
        }
    }
}

/// Payload for `POST /api/contacts`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactInput {
    pub account_id: i64,
    pub name: String,
    pub title: Option<String>,
    pub role: Option<ContactRole>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub last_contacted: Option<NaiveDate>,
}

/// Partial update for `PUT /api/contacts/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub role: Option<ContactRole>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub last_contacted: Option<NaiveDate>,
}
