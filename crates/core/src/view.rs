//! Filter/Sort Engine for the account card list.
//!
//! A pure function of (derived account list, view state). All comparators
//! are stable for equal keys so repeated recomputation cannot reorder cards
//! that did not change.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::AccountOverview;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchFilter {
    #[default]
    All,
    Touched,
    Untouched,
}

impl std::str::FromStr for TouchFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "touched" => Ok(Self::Touched),
            "untouched" => Ok(Self::Untouched),
            _ => Err(format!("invalid filter: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Touched,
    Tasks,
    Renewal,
    Pipeline,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "touched" => Ok(Self::Touched),
            "tasks" => Ok(Self::Tasks),
            "renewal" => Ok(Self::Renewal),
            "pipeline" => Ok(Self::Pipeline),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Explicit, serializable view state. Passed in rather than held as
/// ambient state so the engine stays a pure function.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub filter: TouchFilter,
    pub sort: SortKey,
}

/// Result of one filter/sort pass.
///
/// `all_touched` distinguishes "every account is handled" from "no
/// accounts exist": it is set only when the untouched filter empties a
/// non-empty roster.
#[derive(Debug, Clone)]
pub struct AccountListView {
    pub accounts: Vec<AccountOverview>,
    pub all_touched: bool,
}

fn compare(a: &AccountOverview, b: &AccountOverview, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => {
            a.account.name.to_lowercase().cmp(&b.account.name.to_lowercase())
        },
        // Untouched first; equal states keep prior relative order.
        SortKey::Touched => a.touched_today.cmp(&b.touched_today),
        SortKey::Tasks => b.open_tasks.cmp(&a.open_tasks),
        // Accounts with no renewal date sort last.
        SortKey::Renewal => match (a.account.renewal_date, b.account.renewal_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Pipeline => b
            .pipeline_value
            .partial_cmp(&a.pipeline_value)
            .unwrap_or(Ordering::Equal),
    }
}

/// Applies the filter predicate and stable sort to a derived account list.
#[must_use]
pub fn apply_view(accounts: Vec<AccountOverview>, view: ViewState) -> AccountListView {
    let roster_nonempty = !accounts.is_empty();
    let mut filtered: Vec<AccountOverview> = accounts
        .into_iter()
        .filter(|a| match view.filter {
            TouchFilter::All => true,
            TouchFilter::Touched => a.touched_today,
            TouchFilter::Untouched => !a.touched_today,
        })
        .collect();

    filtered.sort_by(|a, b| compare(a, b, view.sort));

    let all_touched =
        view.filter == TouchFilter::Untouched && filtered.is_empty() && roster_nonempty;
    AccountListView { accounts: filtered, all_touched }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use crate::{Account, TouchState};
    use chrono::Utc;

    fn overview(id: i64, name: &str, touched: bool, open_tasks: i64) -> AccountOverview {
        AccountOverview {
            account: Account {
                id,
                name: name.to_owned(),
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
            open_tasks,
            days_until_renewal: None,
            renewal_band: None,
            active_deals: 0,
            pipeline_value: 0.0,
            top_deal_stage: None,
            contact_count: 0,
        }
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let accounts = vec![
            overview(1, "zeta", false, 0),
            overview(2, "Alpha", false, 0),
            overview(3, "beta", false, 0),
        ];
        let view =
            apply_view(accounts, ViewState { filter: TouchFilter::All, sort: SortKey::Name });
        let names: Vec<_> = view.accounts.iter().map(|a| a.account.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn untouched_filter_keeps_only_untouched() {
        let accounts = vec![overview(1, "a", true, 0), overview(2, "b", false, 0)];
        let view = apply_view(
            accounts,
            ViewState { filter: TouchFilter::Untouched, sort: SortKey::Name },
        );
        assert_eq!(view.accounts.len(), 1);
        assert_eq!(view.accounts[0].account.id, 2);
        assert!(!view.all_touched);
    }

    #[test]
    fn all_touched_signal_fires_only_for_nonempty_roster() {
        let accounts =
            vec![overview(1, "a", true, 0), overview(2, "b", true, 0), overview(3, "c", true, 0)];
        let view = apply_view(
            accounts,
            ViewState { filter: TouchFilter::Untouched, sort: SortKey::Name },
        );
        assert!(view.accounts.is_empty());
        assert!(view.all_touched);

        let empty = apply_view(
            Vec::new(),
            ViewState { filter: TouchFilter::Untouched, sort: SortKey::Name },
        );
        assert!(!empty.all_touched);
    }

    #[test]
    fn tasks_sort_is_stable_across_repeats() {
        let accounts = vec![
            overview(1, "a", false, 2),
            overview(2, "b", false, 5),
            overview(3, "c", false, 2),
        ];
        let view = ViewState { filter: TouchFilter::All, sort: SortKey::Tasks };
        let first = apply_view(accounts, view);
        let order1: Vec<_> = first.accounts.iter().map(|a| a.account.id).collect();
        let second = apply_view(first.accounts, view);
        let order2: Vec<_> = second.accounts.iter().map(|a| a.account.id).collect();
        assert_eq!(order1, vec![2, 1, 3]);
        assert_eq!(order1, order2);
    }

    #[test]
    fn touched_sort_puts_untouched_first() {
        let accounts = vec![overview(1, "a", true, 0), overview(2, "b", false, 0)];
        let view = apply_view(
            accounts,
            ViewState { filter: TouchFilter::All, sort: SortKey::Touched },
        );
        assert_eq!(view.accounts[0].account.id, 2);
    }

    #[test]
    fn renewal_sort_puts_dateless_accounts_last() {
        let mut a = overview(1, "a", false, 0);
        let mut b = overview(2, "b", false, 0);
        let c = overview(3, "c", false, 0);
        a.account.renewal_date = Some("2025-06-01".parse().unwrap());
        b.account.renewal_date = Some("2025-04-01".parse().unwrap());
        let view = apply_view(
            vec![a, c, b],
            ViewState { filter: TouchFilter::All, sort: SortKey::Renewal },
        );
        let ids: Vec<_> = view.accounts.iter().map(|x| x.account.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn pipeline_sort_descends_with_missing_as_zero() {
        let mut a = overview(1, "a", false, 0);
        let b = overview(2, "b", false, 0);
        a.pipeline_value = 9000.0;
        let view = apply_view(
            vec![b, a],
            ViewState { filter: TouchFilter::All, sort: SortKey::Pipeline },
        );
        assert_eq!(view.accounts[0].account.id, 1);
    }
}
