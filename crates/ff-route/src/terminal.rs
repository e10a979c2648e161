//! Freight terminals: route endpoints and intermodal transfer points.

use std::borrow::Borrow;
use std::fmt;

use chrono::{DateTime, Utc};

use ff_delivery::DeliveryPolicy;

// ── TerminalCode ──────────────────────────────────────────────────────────────

/// A terminal's short business key (e.g. `CHI`, `DAL`).
///
/// This is the identity used everywhere outside the crate: delay events
/// scope to it, forecasts are fetched by it, and the network loader indexes
/// by it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TerminalCode(String);

impl TerminalCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TerminalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets `FxHashMap<TerminalCode, _>` be queried with a plain `&str`.
impl Borrow<str> for TerminalCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TerminalCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for TerminalCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

// ── Terminal ──────────────────────────────────────────────────────────────────

/// A freight hub.  Owns the delivery policy that governs how arrivals at
/// this terminal become customer delivery times.  Immutable; shared by
/// `Arc` between segments, routes, and lookup tables.
#[derive(Clone, Debug)]
pub struct Terminal {
    code:   TerminalCode,
    name:   String,
    policy: DeliveryPolicy,
}

impl Terminal {
    pub fn new(code: impl Into<TerminalCode>, name: impl Into<String>, policy: DeliveryPolicy) -> Self {
        Self { code: code.into(), name: name.into(), policy }
    }

    pub fn code(&self) -> &TerminalCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> &DeliveryPolicy {
        &self.policy
    }

    /// Earliest customer delivery for freight arriving here at `arrival`.
    pub fn estimate_delivery(&self, arrival: DateTime<Utc>) -> DateTime<Utc> {
        self.policy.delivery_time(arrival)
    }
}
