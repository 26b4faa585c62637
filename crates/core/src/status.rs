//! Daily Status Engine and renewal/pipeline derivation.
//!
//! Pure functions over a ledger snapshot and a caller-supplied "today".
//! One consistent `today` must be used for every derivation within a single
//! aggregation pass so a request straddling midnight cannot mix days.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{DealStage, RENEWAL_URGENT_DAYS, RENEWAL_WARNING_DAYS};

/// Per-account, per-day touch status.
///
/// `Snoozed` filters as touched but is kept distinct for messaging.
/// Both non-`Untouched` states are terminal until the day rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchState {
    Untouched,
    Touched,
    Snoozed,
}

impl TouchState {
    #[must_use]
    pub const fn is_touched(self) -> bool {
        !matches!(self, Self::Untouched)
    }
}

/// The deal fields the pipeline derivation needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealFacts {
    pub stage: DealStage,
    pub value: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Everything recorded against one account, as loaded from storage.
///
/// Input to [`derive_status`]; holds raw ledger facts only, never derived
/// state.
#[derive(Debug, Clone, Default)]
pub struct AccountLedger {
    pub activity_dates: Vec<NaiveDate>,
    pub note_dates: Vec<NaiveDate>,
    pub snooze_dates: Vec<NaiveDate>,
    pub last_activity_date: Option<NaiveDate>,
    pub last_activity_description: Option<String>,
    pub open_tasks: i64,
    pub deals: Vec<DealFacts>,
    pub contact_count: i64,
}

impl AccountLedger {
    /// Whether any touch of any kind, snoozes included, falls inside
    /// `start..=end`. Backing for the weekly touch window; checked against
    /// every recorded date so a future-dated entry cannot mask an earlier
    /// touch inside the window.
    #[must_use]
    pub fn touched_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.activity_dates
            .iter()
            .chain(self.note_dates.iter())
            .chain(self.snooze_dates.iter())
            .any(|d| (start..=end).contains(d))
    }
}

/// Renewal urgency band, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenewalBand {
    Overdue,
    Urgent,
    Warning,
    Safe,
}

/// Signed days from `today` to `renewal_date`.
#[must_use]
pub fn days_until_renewal(renewal_date: NaiveDate, today: NaiveDate) -> i64 {
    (renewal_date - today).num_days()
}

#[must_use]
pub const fn renewal_band(days_until: i64) -> RenewalBand {
    if days_until < 0 {
        RenewalBand::Overdue
    } else if days_until <= RENEWAL_URGENT_DAYS {
        RenewalBand::Urgent
    } else if days_until <= RENEWAL_WARNING_DAYS {
        RenewalBand::Warning
    } else {
        RenewalBand::Safe
    }
}

/// Aggregates over an account's non-closed deals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineSummary {
    pub active_deals: i64,
    pub pipeline_value: f64,
    pub top_deal_stage: Option<DealStage>,
}

/// Sums and selects over open deals. `top_deal_stage` is the stage of the
/// highest-value open deal; ties go to the most recently created one.
#[must_use]
pub fn pipeline_summary(deals: &[DealFacts]) -> PipelineSummary {
    let mut summary = PipelineSummary::default();
    let mut top: Option<&DealFacts> = None;
    for deal in deals.iter().filter(|d| !d.stage.is_closed()) {
        summary.active_deals += 1;
        summary.pipeline_value += deal.value.unwrap_or(0.0);
        let beats = top.is_none_or(|t| {
            let (dv, tv) = (deal.value.unwrap_or(0.0), t.value.unwrap_or(0.0));
            dv > tv || (dv == tv && deal.created_at > t.created_at)
        });
        if beats {
            top = Some(deal);
        }
    }
    summary.top_deal_stage = top.map(|d| d.stage);
    summary
}

/// All per-day derived fields for one account.
#[derive(Debug, Clone)]
pub struct DerivedStatus {
    pub touch_state: TouchState,
    pub days_since_last_touch: Option<i64>,
    pub days_until_renewal: Option<i64>,
    pub renewal_band: Option<RenewalBand>,
    pub pipeline: PipelineSummary,
}

/// Derives touch state and display aggregates from the ledger.
///
/// Touched iff an activity or note is dated `today`, or a snooze marker for
/// `today` exists — entries on other dates never participate. Day-distance
/// runs against the max recorded activity/note date regardless of
/// direction, so a future-dated entry yields a negative distance rather
/// than an error.
#[must_use]
pub fn derive_status(
    ledger: &AccountLedger,
    renewal_date: Option<NaiveDate>,
    today: NaiveDate,
) -> DerivedStatus {
    let touch_state = if ledger.snooze_dates.contains(&today) {
        TouchState::Snoozed
    } else if ledger.activity_dates.contains(&today) || ledger.note_dates.contains(&today) {
        TouchState::Touched
    } else {
        TouchState::Untouched
    };

    let last_touch =
        ledger.activity_dates.iter().chain(ledger.note_dates.iter()).max().copied();
    let days_since_last_touch = last_touch.map(|d| (today - d).num_days());

    let days_until = renewal_date.map(|d| days_until_renewal(d, today));

    DerivedStatus {
        touch_state,
        days_since_last_touch,
        days_until_renewal: days_until,
        renewal_band: days_until.map(renewal_band),
        pipeline: pipeline_summary(&ledger.deals),
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use chrono::TimeZone as _;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn deal(stage: DealStage, value: Option<f64>, created_secs: i64) -> DealFacts {
        DealFacts { stage, value, created_at: Utc.timestamp_opt(created_secs, 0).unwrap() }
    }

    #[test]
    fn untouched_without_todays_entries() {
        let ledger = AccountLedger {
            activity_dates: vec![day("2025-03-01")],
            note_dates: vec![day("2025-02-27")],
            ..Default::default()
        };
        let status = derive_status(&ledger, None, day("2025-03-03"));
        assert_eq!(status.touch_state, TouchState::Untouched);
        assert_eq!(status.days_since_last_touch, Some(2));
    }

    #[test]
    fn activity_today_touches() {
        let ledger =
            AccountLedger { activity_dates: vec![day("2025-03-03")], ..Default::default() };
        let status = derive_status(&ledger, None, day("2025-03-03"));
        assert_eq!(status.touch_state, TouchState::Touched);
        assert!(status.touch_state.is_touched());
        assert_eq!(status.days_since_last_touch, Some(0));
    }

    #[test]
    fn note_today_touches() {
        let ledger = AccountLedger { note_dates: vec![day("2025-03-03")], ..Default::default() };
        assert_eq!(
            derive_status(&ledger, None, day("2025-03-03")).touch_state,
            TouchState::Touched
        );
    }

    #[test]
    fn snooze_wins_over_plain_touch_for_messaging() {
        let ledger = AccountLedger {
            activity_dates: vec![day("2025-03-03")],
            snooze_dates: vec![day("2025-03-03")],
            ..Default::default()
        };
        assert_eq!(
            derive_status(&ledger, None, day("2025-03-03")).touch_state,
            TouchState::Snoozed
        );
    }

    #[test]
    fn snooze_does_not_count_for_day_distance() {
        let ledger = AccountLedger {
            activity_dates: vec![day("2025-03-01")],
            snooze_dates: vec![day("2025-03-02")],
            ..Default::default()
        };
        let status = derive_status(&ledger, None, day("2025-03-03"));
        assert_eq!(status.days_since_last_touch, Some(2));
    }

    #[test]
    fn future_dated_activity_goes_negative() {
        let ledger =
            AccountLedger { activity_dates: vec![day("2025-03-10")], ..Default::default() };
        let status = derive_status(&ledger, None, day("2025-03-03"));
        assert_eq!(status.days_since_last_touch, Some(-7));
    }

    #[test]
    fn no_prior_touch_is_none() {
        let status = derive_status(&AccountLedger::default(), None, day("2025-03-03"));
        assert_eq!(status.days_since_last_touch, None);
    }

    #[test]
    fn day_rollover_resets_touch_state() {
        let ledger =
            AccountLedger { activity_dates: vec![day("2025-03-03")], ..Default::default() };
        assert!(derive_status(&ledger, None, day("2025-03-03")).touch_state.is_touched());
        assert_eq!(
            derive_status(&ledger, None, day("2025-03-04")).touch_state,
            TouchState::Untouched
        );
    }

    #[test]
    fn renewal_band_boundaries() {
        assert_eq!(renewal_band(-1), RenewalBand::Overdue);
        assert_eq!(renewal_band(0), RenewalBand::Urgent);
        assert_eq!(renewal_band(30), RenewalBand::Urgent);
        assert_eq!(renewal_band(31), RenewalBand::Warning);
        assert_eq!(renewal_band(60), RenewalBand::Warning);
        assert_eq!(renewal_band(61), RenewalBand::Safe);
    }

    #[test]
    fn pipeline_skips_closed_deals() {
        let deals = vec![
            deal(DealStage::Discovery, Some(5000.0), 1),
            deal(DealStage::ClosedWon, Some(20000.0), 2),
        ];
        let summary = pipeline_summary(&deals);
        assert_eq!(summary.active_deals, 1);
        assert!((summary.pipeline_value - 5000.0).abs() < f64::EPSILON);
        assert_eq!(summary.top_deal_stage, Some(DealStage::Discovery));
    }

    #[test]
    fn top_deal_tie_breaks_on_recency() {
        let deals = vec![
            deal(DealStage::Proposal, Some(8000.0), 1),
            deal(DealStage::Negotiation, Some(8000.0), 5),
        ];
        assert_eq!(pipeline_summary(&deals).top_deal_stage, Some(DealStage::Negotiation));
    }

    #[test]
    fn touched_within_checks_every_recorded_date() {
        let ledger = AccountLedger {
            activity_dates: vec![day("2025-03-05"), day("2025-04-06")],
            ..Default::default()
        };
        // The future-dated entry is outside the range but must not hide
        // the in-range one.
        assert!(ledger.touched_within(day("2025-03-01"), day("2025-03-07")));
        assert!(!ledger.touched_within(day("2025-03-08"), day("2025-03-14")));
    }

    #[test]
    fn missing_deal_value_counts_as_zero() {
        let deals =
            vec![deal(DealStage::Design, None, 1), deal(DealStage::Proposal, Some(100.0), 2)];
        let summary = pipeline_summary(&deals);
        assert_eq!(summary.active_deals, 2);
        assert!((summary.pipeline_value - 100.0).abs() < f64::EPSILON);
        assert_eq!(summary.top_deal_stage, Some(DealStage::Proposal));
    }
}
