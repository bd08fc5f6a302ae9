//! Timestamps for `created_at` / `updated_at`.
//!
//! Values are truncated to microseconds, the precision Postgres keeps, so a
//! record read back compares equal to the one that was written.

use chrono::{Duration, SubsecRound, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;

pub fn now() -> DateTimeWithTimeZone {
    Utc::now().trunc_subsecs(6).into()
}

/// Current time, or one microsecond past `previous` if the clock has not moved on.
pub fn next_after(previous: DateTimeWithTimeZone) -> DateTimeWithTimeZone {
    let now = now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
