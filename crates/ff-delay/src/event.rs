//! Delay events and their scope-matching rules.

use chrono::{DateTime, TimeDelta, Utc};

use ff_core::{SegmentId, TransportMode};
use ff_route::{Segment, TerminalCode};

// ── DelayKind ─────────────────────────────────────────────────────────────────

/// What caused the disruption.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DelayKind {
    Weather,
    Congestion,
    Mechanical,
}

impl DelayKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DelayKind::Weather    => "weather",
            DelayKind::Congestion => "congestion",
            DelayKind::Mechanical => "mechanical",
        }
    }
}

impl std::fmt::Display for DelayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DelayScope ────────────────────────────────────────────────────────────────

/// Which segments a delay applies to.
///
/// Exactly one discriminant, by construction — a single tagged union
/// instead of independent optional fields, so two scopes can never be set
/// at once.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DelayScope {
    /// Applies to every segment.
    Global,
    /// Applies to segments travelled under this transport mode.
    Mode(TransportMode),
    /// Applies to one specific segment.
    Segment(SegmentId),
    /// Applies to segments delivering into this terminal.
    Location(TerminalCode),
}

// ── DelayEvent ────────────────────────────────────────────────────────────────

/// One recorded disruption.
///
/// Events are immutable values; worlds keep them in an append-only list and
/// re-evaluate activity per tick.
#[derive(Clone, Debug)]
pub struct DelayEvent {
    kind:        DelayKind,
    duration:    TimeDelta,
    occurred_at: DateTime<Utc>,
    scope:       DelayScope,
    description: Option<String>,
}

impl DelayEvent {
    pub fn new(
        kind:        DelayKind,
        duration:    TimeDelta,
        occurred_at: DateTime<Utc>,
        scope:       DelayScope,
    ) -> Self {
        Self { kind, duration, occurred_at, scope, description: None }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(&self) -> DelayKind {
        self.kind
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn scope(&self) -> &DelayScope {
        &self.scope
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The instant the delay window closes.
    #[inline]
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.occurred_at + self.duration
    }

    /// `true` while the event window has not closed before `now`.
    ///
    /// The window is end-inclusive: an event whose end equals `now` still
    /// blocks the tick evaluated at that instant.
    #[inline]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.ends_at() >= now
    }

    /// `true` if this event applies to `segment`:
    ///
    /// 1. a global event matches unconditionally;
    /// 2. a mode event matches segments of that transport mode;
    /// 3. a segment event matches that segment's identity;
    /// 4. a location event matches segments whose *destination* terminal
    ///    carries that code.
    pub fn blocks(&self, segment: &Segment) -> bool {
        match &self.scope {
            DelayScope::Global         => true,
            DelayScope::Mode(mode)     => segment.mode() == *mode,
            DelayScope::Segment(id)    => segment.id() == *id,
            DelayScope::Location(code) => segment.to().code() == code,
        }
    }
}
