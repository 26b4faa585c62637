//! Shared limits and calendar windows.

/// Default page size for sub-resource listings.
pub const DEFAULT_QUERY_LIMIT: usize = 50;

/// Hard cap on caller-supplied limits.
pub const MAX_QUERY_LIMIT: usize = 500;

/// Trailing window (in days, today inclusive) for the weekly touch count.
pub const WEEKLY_TOUCH_WINDOW_DAYS: i64 = 7;

/// Upper bound of the "urgent" renewal band, in days until renewal.
pub const RENEWAL_URGENT_DAYS: i64 = 30;

/// Upper bound of the "warning" renewal band, in days until renewal.
pub const RENEWAL_WARNING_DAYS: i64 = 60;
