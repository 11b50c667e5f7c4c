use chrono::{DateTime, Datelike, Utc};

/// Whole calendar months from `past` to `reference`.
///
/// Computed from the UTC year, month and day fields: a month only counts
/// once `reference` reaches the same day-of-month as `past`. The result is
/// clamped at zero when `past` lies after `reference`.
pub fn months_elapsed(reference: DateTime<Utc>, past: DateTime<Utc>) -> u32 {
    let years = i64::from(reference.year()) - i64::from(past.year());
    let months = i64::from(reference.month()) - i64::from(past.month());

    let mut diff = years * 12 + months;
    if reference.day() < past.day() {
        diff -= 1;
    }

    u32::try_from(diff.max(0)).unwrap_or(u32::MAX)
}
