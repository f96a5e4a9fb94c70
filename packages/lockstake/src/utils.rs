pub const DAY_IN_SECONDS: u64 = 86_400;
/// Reward accounting month; always 30 days regardless of the calendar
pub const MONTH_IN_SECONDS: u64 = 30 * DAY_IN_SECONDS;
pub const DAYS_IN_YEAR: u64 = 365;
/// Bonus rates are expressed in basis points
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Timestamp at which a stake locked at `lock_timestamp` for `lock_days` matures.
pub fn lock_end(lock_timestamp: u64, lock_days: u64) -> u64 {
    lock_timestamp.saturating_add(lock_days.saturating_mul(DAY_IN_SECONDS))
}

/// Whole reward months elapsed between `start` and `now`; zero before `start`.
pub fn months_between(start: u64, now: u64) -> u64 {
    now.saturating_sub(start) / MONTH_IN_SECONDS
}
