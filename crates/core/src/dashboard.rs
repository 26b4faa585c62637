//! Dashboard Aggregator: reduces the full roster into summary counters.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::{AccountLedger, AccountOverview, StreakState, WEEKLY_TOUCH_WINDOW_DAYS};

/// Summary counters for `GET /api/dashboard`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_accounts: i64,
    pub touched_today: i64,
    pub untouched_today: i64,
    pub weekly_touches: i64,
    pub total_pipeline: f64,
    pub upcoming_renewals: i64,
    pub total_open_tasks: i64,
    pub overdue_tasks: i64,
    pub touch_streak: i64,
}

/// Reduces the derived roster into dashboard counters.
///
/// `ledgers` runs parallel to `accounts`; the weekly count scans every
/// recorded touch date per account, snoozes included, so a future-dated
/// entry cannot hide an earlier touch inside the window. `overdue_tasks`
/// comes from storage because completed tasks never appear in the
/// per-account open counts.
#[must_use]
pub fn summarize(
    accounts: &[AccountOverview],
    ledgers: &[AccountLedger],
    overdue_tasks: i64,
    streak: StreakState,
    today: NaiveDate,
) -> DashboardSummary {
    let total_accounts = accounts.len() as i64;
    let touched_today = accounts.iter().filter(|a| a.touched_today).count() as i64;

    let window_start = today
        .checked_sub_days(Days::new((WEEKLY_TOUCH_WINDOW_DAYS - 1) as u64))
        .unwrap_or(NaiveDate::MIN);
    let weekly_touches =
        ledgers.iter().filter(|l| l.touched_within(window_start, today)).count() as i64;

    let upcoming_renewals = accounts
        .iter()
        .filter(|a| a.days_until_renewal.is_some_and(|d| (0..=60).contains(&d)))
        .count() as i64;

    DashboardSummary {
        total_accounts,
        touched_today,
        untouched_today: total_accounts - touched_today,
        weekly_touches,
        total_pipeline: accounts.iter().map(|a| a.pipeline_value).sum(),
        upcoming_renewals,
        total_open_tasks: accounts.iter().map(|a| a.open_tasks).sum(),
        overdue_tasks,
        touch_streak: streak.displayed(today),
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use crate::{Account, TouchState};
    use chrono::Utc;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn overview(id: i64, touched: bool) -> AccountOverview {
        AccountOverview {
            account: Account {
                id,
                name: format!("acct-{id}"),
                industry: None,
                location: None,
                renewal_date: None,
                annual_value: None,
                created_at: Utc::now(),
            },
            touch_state: if touched { TouchState::Touched } else { TouchState::Untouched },
            touched_today: touched,
            last_activity_date: None,
            last_activity_description: None,
            days_since_last_touch: None,
            open_tasks: 0,
            days_until_renewal: None,
            renewal_band: None,
            active_deals: 0,
            pipeline_value: 0.0,
            top_deal_stage: None,
            contact_count: 0,
        }
    }

    fn ledger(dates: &[&str]) -> AccountLedger {
        AccountLedger {
            activity_dates: dates.iter().map(|d| day(d)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn weekly_window_is_trailing_seven_days_inclusive() {
        let accounts = vec![overview(1, false), overview(2, false), overview(3, false)];
        let ledgers = vec![
            ledger(&["2025-03-10"]), // today
            ledger(&["2025-03-04"]), // 6 days back, inside
            ledger(&["2025-03-03"]), // 7 days back, outside
        ];
        let summary = summarize(
            &accounts,
            &ledgers,
            0,
            StreakState::default(),
            day("2025-03-10"),
        );
        assert_eq!(summary.weekly_touches, 2);
    }

    #[test]
    fn future_dated_entry_does_not_hide_a_windowed_touch() {
        let accounts = vec![overview(1, false)];
        let ledgers = vec![ledger(&["2025-03-05", "2025-04-06"])];
        let summary = summarize(
            &accounts,
            &ledgers,
            0,
            StreakState::default(),
            day("2025-03-07"),
        );
        assert_eq!(summary.weekly_touches, 1);

        // An account with only future-dated entries stays outside the window.
        let summary = summarize(
            &accounts,
            &[ledger(&["2025-04-06"])],
            0,
            StreakState::default(),
            day("2025-03-07"),
        );
        assert_eq!(summary.weekly_touches, 0);
    }

    #[test]
    fn counts_touched_and_untouched() {
        let accounts = vec![overview(1, true), overview(2, false), overview(3, true)];
        let ledgers = vec![ledger(&[]), ledger(&[]), ledger(&[])];
        let summary =
            summarize(&accounts, &ledgers, 0, StreakState::default(), day("2025-03-10"));
        assert_eq!(summary.total_accounts, 3);
        assert_eq!(summary.touched_today, 2);
        assert_eq!(summary.untouched_today, 1);
    }

    #[test]
    fn upcoming_renewals_use_sixty_day_band() {
        let mut a = overview(1, false);
        let mut b = overview(2, false);
        let mut c = overview(3, false);
        a.days_until_renewal = Some(0);
        b.days_until_renewal = Some(60);
        c.days_until_renewal = Some(61);
        let summary = summarize(
            &[a, b, c],
            &[ledger(&[]), ledger(&[]), ledger(&[])],
            0,
            StreakState::default(),
            day("2025-03-10"),
        );
        assert_eq!(summary.upcoming_renewals, 2);

        let mut d = overview(4, false);
        d.days_until_renewal = Some(-1);
        let summary = summarize(
            &[d],
            &[ledger(&[])],
            0,
            StreakState::default(),
            day("2025-03-10"),
        );
        assert_eq!(summary.upcoming_renewals, 0);
    }

    #[test]
    fn pipeline_and_tasks_sum_across_roster() {
        let mut a = overview(1, false);
        let mut b = overview(2, false);
        a.pipeline_value = 5000.0;
        a.open_tasks = 2;
        b.pipeline_value = 1500.0;
        b.open_tasks = 1;
        let summary = summarize(
            &[a, b],
            &[ledger(&[]), ledger(&[])],
            4,
            StreakState { current: 3, last_touch_date: Some(day("2025-03-10")) },
            day("2025-03-10"),
        );
        assert!((summary.total_pipeline - 6500.0).abs() < f64::EPSILON);
        assert_eq!(summary.total_open_tasks, 3);
        assert_eq!(summary.overdue_tasks, 4);
        assert_eq!(summary.touch_streak, 3);
    }
}
