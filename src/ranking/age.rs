//! Calendar-day age of an item's last practice.
//!
//! Age counts midnight boundaries, not elapsed hours: something practiced at
//! 23:50 yesterday is one day old at 00:10 today, and something practiced at
//! 08:00 today is zero days old at 22:00. Day boundaries are taken in the time
//! zone of the caller's `now`.

use super::DEFAULT_ITEM_AGE;
use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Returns the number of whole calendar days between `last_practice` and `now`.
///
/// - `None` (never practiced) yields [`DEFAULT_ITEM_AGE`].
/// - Same calendar day yields `0`; a `last_practice` after `now`'s day yields
///   a negative value.
/// - If the day difference cannot be represented, falls back to
///   [`DEFAULT_ITEM_AGE`].
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use practicio::ranking::compute_age;
///
/// let now = Utc::now();
/// assert_eq!(compute_age(Some(now), &now), 0);
/// assert_eq!(compute_age(None, &now), 7);
/// assert_eq!(compute_age(Some(now - Duration::days(3)), &now), 3);
/// ```
#[must_use]
pub fn compute_age<Tz: TimeZone>(last_practice: Option<DateTime<Utc>>, now: &DateTime<Tz>) -> i64 {
    let Some(last_practice) = last_practice else {
        return DEFAULT_ITEM_AGE;
    };

    let from = last_practice.with_timezone(&now.timezone()).date_naive();
    let to = now.date_naive();

    to.num_days_from_ce()
        .checked_sub(from.num_days_from_ce())
        .map_or_else(
            || {
                tracing::trace!(%last_practice, "day difference out of range, using default age");
                DEFAULT_ITEM_AGE
            },
            i64::from,
        )
}

/// Whether an item was practiced on the same calendar day as `now`.
///
/// Never-practiced items are not practiced today.
#[must_use]
pub fn is_practiced_today<Tz: TimeZone>(last_practice: Option<DateTime<Utc>>, now: &DateTime<Tz>) -> bool {
    last_practice.is_some() && compute_age(last_practice, now) == 0
}

/// Human-readable summary of when an item was last practiced.
///
/// - Never practiced: "Last practiced: Never"
/// - Same day (or a future date): "Last practiced: Today"
/// - Otherwise: "Last practiced: 1 day ago", "Last practiced: 5 days ago"
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use practicio::ranking::last_practiced_label;
///
/// let now = Utc::now();
/// assert_eq!(last_practiced_label(None, &now), "Last practiced: Never");
/// assert_eq!(last_practiced_label(Some(now - Duration::days(5)), &now), "Last practiced: 5 days ago");
/// ```
#[must_use]
pub fn last_practiced_label<Tz: TimeZone>(last_practice: Option<DateTime<Utc>>, now: &DateTime<Tz>) -> String {
    if last_practice.is_none() {
        return "Last practiced: Never".to_string();
    }

    match compute_age(last_practice, now) {
        days if days <= 0 => "Last practiced: Today".to_string(),
        1 => "Last practiced: 1 day ago".to_string(),
        days => format!("Last practiced: {days} days ago"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn local(offset_hours: i32, day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .and_then(|tz| tz.with_ymd_and_hms(2024, 6, day, hour, minute, 0).single())
            .expect("valid test timestamp")
    }

    #[test]
    fn test_same_instant_is_zero() {
        let now = local(0, 10, 12, 0);
        assert_eq!(compute_age(Some(now.with_timezone(&Utc)), &now), 0);
    }

    #[test]
    fn test_never_practiced_uses_default() {
        let now = local(0, 10, 12, 0);
        assert_eq!(compute_age(None, &now), DEFAULT_ITEM_AGE);
        assert!(!is_practiced_today(None, &now));
    }

    #[test]
    fn test_crossing_midnight_counts_a_day() {
        let now = local(0, 10, 0, 5);
        let last = now - Duration::hours(23) - Duration::minutes(50);
        assert_eq!(compute_age(Some(last.with_timezone(&Utc)), &now), 1);
    }

    #[test]
    fn test_within_same_day_is_zero() {
        let now = local(0, 10, 22, 0);
        let last = now - Duration::hours(2);
        assert_eq!(compute_age(Some(last.with_timezone(&Utc)), &now), 0);
        assert!(is_practiced_today(Some(last.with_timezone(&Utc)), &now));
    }

    #[test]
    fn test_day_boundaries_follow_callers_time_zone() {
        // 01:00 on the 10th in UTC+2 is 23:00 on the 9th in UTC.
        let last = local(2, 10, 1, 0).with_timezone(&Utc);

        assert_eq!(compute_age(Some(last), &local(2, 10, 20, 0)), 0);
        assert_eq!(compute_age(Some(last), &local(0, 10, 20, 0)), 1);
    }

    #[test]
    fn test_future_practice_is_negative() {
        let now = local(0, 10, 12, 0);
        let later = (now + Duration::days(2)).with_timezone(&Utc);
        assert_eq!(compute_age(Some(later), &now), -2);
        assert!(!is_practiced_today(Some(later), &now));
    }

    #[test]
    fn test_last_practiced_label() {
        let now = local(0, 10, 12, 0);
        let ago = |days| Some((now - Duration::days(days)).with_timezone(&Utc));

        assert_eq!(last_practiced_label(ago(0), &now), "Last practiced: Today");
        assert_eq!(last_practiced_label(ago(1), &now), "Last practiced: 1 day ago");
        assert_eq!(last_practiced_label(ago(9), &now), "Last practiced: 9 days ago");
        assert_eq!(last_practiced_label(ago(-1), &now), "Last practiced: Today");
    }
}
