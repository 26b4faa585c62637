use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An opportunity attached to an account. Mutable and deletable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub stage: DealStage,
    pub value: Option<f64>,
    pub products: Option<String>,
    pub close_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    Discovery,
    Design,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl DealStage {
    /// Closed stages are excluded from every pipeline aggregate.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::ClosedWon | Self::ClosedLost)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Design => "design",
            Self::Proposal => "proposal",
            Self::Negotiation => "negotiation",
            Self::ClosedWon => "closed_won",
            Self::ClosedLost => "closed_lost",
        }
    }
}

impl std::str::FromStr for DealStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discovery" => Ok(Self::Discovery),
            "design" => Ok(Self::Design),
            "proposal" => Ok(Self::Proposal),
            "negotiation" => Ok(Self::Negotiation),
            "closed_won" => Ok(Self::ClosedWon),
            "closed_lost" => Ok(Self::ClosedLost),
            _ => Err(format!("invalid deal stage: {s}")),
        }
    }
}

impl std::fmt::Display for DealStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for `POST /api/deals`.
#[derive(Debug, Clone, Deserialize)]
pub struct DealInput {
    pub account_id: i64,
    pub name: String,
    pub stage: DealStage,
    pub value: Option<f64>,
    pub products: Option<String>,
    pub close_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Partial update for `PUT /api/deals/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DealUpdate {
    pub name: Option<String>,
    pub stage: Option<DealStage>,
    pub value: Option<f64>,
    pub products: Option<String>,
    pub close_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
