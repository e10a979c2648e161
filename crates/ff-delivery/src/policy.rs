//! Delivery policies: terminal arrival instant → customer delivery instant.

use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::BusinessCalendar;

// ── PolicyKind ────────────────────────────────────────────────────────────────

/// The closed set of delivery rule variants.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PolicyKind {
    /// Same-day delivery only before cut-off on a business day (Mon–Fri);
    /// otherwise next business day at cut-off.
    Standard,
    /// Same-day delivery before cut-off on any day; otherwise next calendar
    /// day at cut-off.  For terminals that deliver seven days a week.
    WeekendEligible,
}

impl PolicyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Standard        => "standard",
            PolicyKind::WeekendEligible => "weekend",
        }
    }

    /// Parse the canonical CSV column value.  Returns `None` for anything
    /// else; loaders turn that into their own parse error.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(PolicyKind::Standard),
            "weekend"  => Some(PolicyKind::WeekendEligible),
            _          => None,
        }
    }

    /// `true` if this variant treats weekends as delivery days.
    #[inline]
    fn allows_weekends(self) -> bool {
        matches!(self, PolicyKind::WeekendEligible)
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DeliveryPolicy ────────────────────────────────────────────────────────────

/// A terminal's rule for converting an arrival instant into the earliest
/// customer delivery instant.
#[derive(Copy, Clone, Debug)]
pub struct DeliveryPolicy {
    kind:     PolicyKind,
    cutoff:   NaiveTime,
    calendar: BusinessCalendar,
}

impl DeliveryPolicy {
    /// Weekday-only delivery with an inbound cut-off — the default behavior
    /// for most freight terminals.
    pub fn standard(zone: Tz, cutoff: NaiveTime) -> Self {
        Self::new(PolicyKind::Standard, zone, cutoff)
    }

    /// Seven-day delivery with an inbound cut-off.
    pub fn weekend_eligible(zone: Tz, cutoff: NaiveTime) -> Self {
        Self::new(PolicyKind::WeekendEligible, zone, cutoff)
    }

    pub fn new(kind: PolicyKind, zone: Tz, cutoff: NaiveTime) -> Self {
        Self { kind, cutoff, calendar: BusinessCalendar::new(zone) }
    }

    pub fn kind(&self) -> PolicyKind {
        self.kind
    }

    pub fn cutoff(&self) -> NaiveTime {
        self.cutoff
    }

    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    /// Earliest customer delivery for a shipment arriving at the terminal at
    /// `terminal_arrival`.
    ///
    /// An arrival exactly at the cut-off is *not* before it (strict
    /// comparison) and defers to the next eligible day.
    pub fn delivery_time(&self, terminal_arrival: DateTime<Utc>) -> DateTime<Utc> {
        let arrival = self.calendar.to_local(terminal_arrival);
        let allow_weekends = self.kind.allows_weekends();

        let before_cutoff = arrival.time() < self.cutoff;
        let eligible_day = self
            .calendar
            .is_business_day(arrival.date_naive(), allow_weekends);

        if before_cutoff && eligible_day {
            return terminal_arrival;
        }

        let day = self
            .calendar
            .next_business_day(arrival.date_naive(), allow_weekends);
        self.calendar.at_local_time(day, self.cutoff)
    }
}
