//! Zone-aware business-day arithmetic.
//!
//! Day walking is done on local calendar dates (`NaiveDate`), not by adding
//! 24-hour spans to instants — adding absolute hours across a DST boundary
//! would silently shift the local wall time.  The date is only re-anchored
//! to an instant at the very end, via [`BusinessCalendar::at_local_time`].

use chrono::{DateTime, Datelike, Days, LocalResult, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// Weekday/weekend calendar for one time zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BusinessCalendar {
    zone: Tz,
}

impl BusinessCalendar {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Map a UTC instant to this calendar's local wall time.
    #[inline]
    pub fn to_local(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.zone)
    }

    /// `true` if `day` is eligible for delivery.
    ///
    /// With `allow_weekends` every day qualifies; otherwise Saturday and
    /// Sunday do not.
    pub fn is_business_day(&self, day: NaiveDate, allow_weekends: bool) -> bool {
        allow_weekends || !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// The first eligible day strictly after `day`, walking forward one
    /// calendar day at a time.
    pub fn next_business_day(&self, day: NaiveDate, allow_weekends: bool) -> NaiveDate {
        let mut next = day + Days::new(1);
        while !self.is_business_day(next, allow_weekends) {
            next = next + Days::new(1);
        }
        next
    }

    /// The UTC instant of `time` on `day` in this calendar's zone.
    ///
    /// Ambiguous local times (DST fold) resolve to the earlier instant; a
    /// local time inside a DST gap rolls forward to the first valid wall
    /// time after the gap.
    pub fn at_local_time(&self, day: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
        let mut local = day.and_time(time);
        loop {
            match self.zone.from_local_datetime(&local) {
                LocalResult::Single(dt) => return dt.to_utc(),
                LocalResult::Ambiguous(earliest, _) => return earliest.to_utc(),
                LocalResult::None => local += TimeDelta::minutes(30),
            }
        }
    }
}
