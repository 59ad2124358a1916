//! Calendar-date normalization for due-date comparisons.
//!
//! Due dates are stored as instants, but only their calendar date carries
//! meaning. An instant is reduced to the year/month/day of its UTC
//! representation, so `2026-01-01T00:00:00Z` is "Jan 1, 2026" wherever the
//! code runs instead of sliding to Dec 31 in zones west of UTC. "Today" is the
//! calendar date of the current moment in the local timezone.

use std::fmt;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// A timezone-agnostic calendar date, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AbsoluteDate(NaiveDate);

impl AbsoluteDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Midnight of this date in `tz`.
    ///
    /// Where a DST gap swallows midnight, the first existing instant of the
    /// day is returned; where midnight is ambiguous, the earlier one.
    pub fn midnight_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        let midnight = self.0.and_time(NaiveTime::MIN);
        tz.from_local_datetime(&midnight)
            .earliest()
            .or_else(|| {
                tz.from_local_datetime(&(midnight + Duration::hours(1)))
                    .earliest()
            })
            .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
    }

    /// Midnight of this date in the local timezone.
    pub fn to_local_midnight(&self) -> DateTime<Local> {
        self.midnight_in(&Local)
    }
}

impl From<NaiveDate> for AbsoluteDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateTime<Utc>> for AbsoluteDate {
    fn from(ts: DateTime<Utc>) -> Self {
        Self(ts.date_naive())
    }
}

impl fmt::Display for AbsoluteDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Normalize a timestamp to its calendar date (taken from the UTC representation).
///
/// Already-normalized dates pass through unchanged, so the operation is idempotent.
pub fn to_absolute_date(ts: impl Into<AbsoluteDate>) -> AbsoluteDate {
    ts.into()
}

/// Calendar date of `now` as observed in `tz`.
pub fn local_today_in<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> AbsoluteDate {
    AbsoluteDate(now.with_timezone(tz).date_naive())
}

/// Today's calendar date in the local timezone.
pub fn get_local_today() -> AbsoluteDate {
    local_today_in(Utc::now(), &Local)
}
