//! Transport modes and the base transit-time catalog.
//!
//! The mode set is small and closed, so modes are a plain enum resolved
//! through table lookups rather than open-ended dynamic dispatch.  The
//! catalog's durations are configuration, not law: the reference values are
//! stand-ins for a real cost model and are expected to be replaced per
//! deployment (or loaded from network data).

use chrono::TimeDelta;

use crate::{FfError, FfResult};

// ── TransportMode ─────────────────────────────────────────────────────────────

/// The means by which freight moves over one route segment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransportMode {
    Truck,
    Rail,
    Air,
    Sea,
}

impl TransportMode {
    /// All modes, in catalog-slot order.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Truck,
        TransportMode::Rail,
        TransportMode::Air,
        TransportMode::Sea,
    ];

    /// Slot index into per-mode tables.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label, also the canonical CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Truck => "truck",
            TransportMode::Rail  => "rail",
            TransportMode::Air   => "air",
            TransportMode::Sea   => "sea",
        }
    }

    /// Parse a mode identifier (case-insensitive).
    ///
    /// Unrecognized identifiers fail with [`FfError::UnknownMode`].
    pub fn parse(s: &str) -> FfResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truck" => Ok(TransportMode::Truck),
            "rail"  => Ok(TransportMode::Rail),
            "air"   => Ok(TransportMode::Air),
            "sea"   => Ok(TransportMode::Sea),
            other   => Err(FfError::UnknownMode(other.to_owned())),
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TransportCatalog ──────────────────────────────────────────────────────────

/// Per-mode baseline transit durations.
///
/// A catalog starts empty and is populated mode by mode; looking up a mode
/// without an entry fails with [`FfError::UnknownMode`].  [`Default`] carries
/// the reference configuration.
#[derive(Clone, Debug)]
pub struct TransportCatalog {
    base: [Option<TimeDelta>; TransportMode::ALL.len()],
}

impl TransportCatalog {
    /// A catalog with no configured modes.
    pub fn empty() -> Self {
        Self { base: [None; TransportMode::ALL.len()] }
    }

    /// Set the base transit duration for `mode` (builder style).
    pub fn with_mode(mut self, mode: TransportMode, base: TimeDelta) -> Self {
        self.base[mode.index()] = Some(base);
        self
    }

    /// Baseline transit duration for `mode`.
    ///
    /// Fails with [`FfError::UnknownMode`] if the catalog has no entry for
    /// the mode — a configuration fault the caller must surface, not mask.
    pub fn base_transit_time(&self, mode: TransportMode) -> FfResult<TimeDelta> {
        self.base[mode.index()]
            .ok_or_else(|| FfError::UnknownMode(mode.as_str().to_owned()))
    }
}

impl Default for TransportCatalog {
    /// The reference configuration: truck 6 h, rail 12 h, air 2 h, sea 72 h.
    fn default() -> Self {
        Self::empty()
            .with_mode(TransportMode::Truck, TimeDelta::hours(6))
            .with_mode(TransportMode::Rail, TimeDelta::hours(12))
            .with_mode(TransportMode::Air, TimeDelta::hours(2))
            .with_mode(TransportMode::Sea, TimeDelta::hours(72))
    }
}
