//! Unit tests for delay activity and scope matching.

use std::sync::Arc;

use chrono::{NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::America::Chicago;

use ff_core::{SegmentId, TransportMode};
use ff_delivery::DeliveryPolicy;
use ff_route::{Segment, Terminal, TerminalCode};

use crate::{DelayEvent, DelayKind, DelayScope};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn terminal(code: &str) -> Arc<Terminal> {
    let policy = DeliveryPolicy::standard(Chicago, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    Arc::new(Terminal::new(code, code, policy))
}

fn truck_segment_into(code: &str) -> Segment {
    Segment::new(SegmentId(0), terminal("CHI"), terminal(code), TransportMode::Truck)
}

#[cfg(test)]
mod activity {
    use super::*;

    #[test]
    fn active_within_window() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let event = DelayEvent::new(DelayKind::Weather, TimeDelta::hours(4), start, DelayScope::Global);
        assert!(event.is_active(start));
        assert!(event.is_active(start + TimeDelta::hours(2)));
    }

    #[test]
    fn window_end_is_inclusive() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let event = DelayEvent::new(DelayKind::Weather, TimeDelta::hours(4), start, DelayScope::Global);
        assert!(event.is_active(start + TimeDelta::hours(4)));
        assert!(!event.is_active(start + TimeDelta::hours(4) + TimeDelta::seconds(1)));
    }

    #[test]
    fn ends_at_is_occurrence_plus_duration() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let event = DelayEvent::new(DelayKind::Congestion, TimeDelta::minutes(90), start, DelayScope::Global);
        assert_eq!(event.ends_at(), start + TimeDelta::minutes(90));
    }
}

#[cfg(test)]
mod scope {
    use super::*;

    fn at(kind: DelayKind, scope: DelayScope) -> DelayEvent {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        DelayEvent::new(kind, TimeDelta::hours(1), start, scope)
    }

    #[test]
    fn global_matches_any_segment() {
        let event = at(DelayKind::Mechanical, DelayScope::Global);
        assert!(event.blocks(&truck_segment_into("DAL")));
        assert!(event.blocks(&truck_segment_into("MEM")));
    }

    #[test]
    fn mode_matches_only_that_mode() {
        let event = at(DelayKind::Congestion, DelayScope::Mode(TransportMode::Truck));
        assert!(event.blocks(&truck_segment_into("DAL")));

        let rail = Segment::new(SegmentId(1), terminal("CHI"), terminal("DAL"), TransportMode::Rail);
        assert!(!event.blocks(&rail));
    }

    #[test]
    fn segment_matches_only_that_identity() {
        let event = at(DelayKind::Mechanical, DelayScope::Segment(SegmentId(0)));
        assert!(event.blocks(&truck_segment_into("DAL")));

        let other = Segment::new(SegmentId(7), terminal("CHI"), terminal("DAL"), TransportMode::Truck);
        assert!(!event.blocks(&other));
    }

    #[test]
    fn location_matches_destination_code_only() {
        let event = at(DelayKind::Weather, DelayScope::Location(TerminalCode::new("DAL")));
        assert!(event.blocks(&truck_segment_into("DAL")));
        assert!(!event.blocks(&truck_segment_into("MEM")));

        // The origin side never matches a location scope.
        let out_of_dal = Segment::new(SegmentId(2), terminal("DAL"), terminal("MEM"), TransportMode::Truck);
        assert!(!event.blocks(&out_of_dal));
    }

    #[test]
    fn description_is_carried() {
        let event = at(DelayKind::Weather, DelayScope::Global).with_description("ice storm");
        assert_eq!(event.description(), Some("ice storm"));
    }
}
