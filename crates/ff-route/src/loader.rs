//! CSV network loader.
//!
//! # CSV formats
//!
//! **Terminals** — one row per terminal:
//!
//! ```csv
//! code,name,policy,cutoff,zone
//! CHI,Chicago,standard,06:00,America/Chicago
//! DAL,Dallas,standard,06:00,America/Chicago
//! MEM,Memphis,weekend,18:30,America/Chicago
//! ```
//!
//! **`policy`** is `standard` or `weekend`; **`cutoff`** is `HH:MM` local
//! wall time; **`zone`** is an IANA zone name.
//!
//! **Routes** — one row per segment, grouped by `route_id` and ordered by
//! `seq`:
//!
//! ```csv
//! route_id,seq,from,to,mode
//! 1,0,CHI,MEM,truck
//! 1,1,MEM,DAL,rail
//! ```
//!
//! A route's origin is its first segment's `from`, its destination the last
//! segment's `to`.  Every `from`/`to` must name a terminal from the
//! terminals file.  Segment IDs are assigned in file order.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveTime;
use chrono_tz::Tz;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use ff_core::{RouteId, SegmentId, TransportMode};
use ff_delivery::{DeliveryPolicy, PolicyKind};

use crate::{Route, RouteError, RouteResult, Segment, Terminal, TerminalCode};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TerminalRecord {
    code:   String,
    name:   String,
    policy: String,
    cutoff: String,
    zone:   String,
}

#[derive(Deserialize)]
struct SegmentRecord {
    route_id: u32,
    seq:      u32,
    from:     String,
    to:       String,
    mode:     String,
}

// ── Network ───────────────────────────────────────────────────────────────────

/// The loaded route graph: terminals indexed by code plus all routes.
#[derive(Debug)]
pub struct Network {
    terminals: FxHashMap<TerminalCode, Arc<Terminal>>,
    routes:    Vec<Arc<Route>>,
}

impl Network {
    pub fn terminal(&self, code: &str) -> Option<&Arc<Terminal>> {
        self.terminals.get(code)
    }

    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    pub fn route(&self, id: RouteId) -> Option<&Arc<Route>> {
        self.routes.iter().find(|r| r.id() == id)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Network`] from a terminals CSV and a routes CSV on disk.
pub fn load_network_csv(terminals: &Path, routes: &Path) -> RouteResult<Network> {
    let terminals = std::fs::File::open(terminals).map_err(RouteError::Io)?;
    let routes = std::fs::File::open(routes).map_err(RouteError::Io)?;
    load_network_readers(terminals, routes)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or embedded fixtures.
pub fn load_network_readers<T: Read, R: Read>(terminals: T, routes: R) -> RouteResult<Network> {
    let terminals = load_terminals(terminals)?;
    let routes = load_routes(routes, &terminals)?;
    Ok(Network { terminals, routes })
}

// ── Loading stages ────────────────────────────────────────────────────────────

fn load_terminals<T: Read>(reader: T) -> RouteResult<FxHashMap<TerminalCode, Arc<Terminal>>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut terminals = FxHashMap::default();

    for result in csv_reader.deserialize::<TerminalRecord>() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        let policy = parse_policy(&row.policy, &row.cutoff, &row.zone)?;
        let code = TerminalCode::new(row.code.trim());
        let terminal = Arc::new(Terminal::new(code.clone(), row.name.trim(), policy));
        if terminals.insert(code.clone(), terminal).is_some() {
            return Err(RouteError::Parse(format!("duplicate terminal code {code:?}")));
        }
    }

    Ok(terminals)
}

fn load_routes<R: Read>(
    reader:    R,
    terminals: &FxHashMap<TerminalCode, Arc<Terminal>>,
) -> RouteResult<Vec<Arc<Route>>> {
    // ── Parse and group rows by route ─────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_route: FxHashMap<u32, Vec<SegmentRecord>> = FxHashMap::default();
    let mut route_order: Vec<u32> = Vec::new();

    for result in csv_reader.deserialize::<SegmentRecord>() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        if !by_route.contains_key(&row.route_id) {
            route_order.push(row.route_id);
        }
        by_route.entry(row.route_id).or_default().push(row);
    }

    // ── Build one Route per group ─────────────────────────────────────────
    let mut routes = Vec::with_capacity(route_order.len());
    let mut next_segment_id: u32 = 0;

    for route_id in route_order {
        let mut rows = by_route.remove(&route_id).unwrap_or_default();
        rows.sort_by_key(|r| r.seq);

        let mut segments = Vec::with_capacity(rows.len());
        for row in &rows {
            let from = lookup(terminals, &row.from)?;
            let to = lookup(terminals, &row.to)?;
            let mode = TransportMode::parse(&row.mode)?;
            segments.push(Segment::new(SegmentId(next_segment_id), from, to, mode));
            next_segment_id += 1;
        }

        let origin = match segments.first() {
            Some(s) => Arc::clone(s.from_arc()),
            None => return Err(RouteError::EmptyRoute),
        };
        let destination = Arc::clone(segments[segments.len() - 1].to_arc());

        routes.push(Arc::new(Route::new(RouteId(route_id), origin, destination, segments)?));
    }

    Ok(routes)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn lookup(
    terminals: &FxHashMap<TerminalCode, Arc<Terminal>>,
    code:      &str,
) -> RouteResult<Arc<Terminal>> {
    terminals
        .get(code.trim())
        .cloned()
        .ok_or_else(|| RouteError::UnknownTerminal(code.trim().to_owned()))
}

fn parse_policy(policy: &str, cutoff: &str, zone: &str) -> RouteResult<DeliveryPolicy> {
    let kind = PolicyKind::parse(policy).ok_or_else(|| {
        RouteError::Parse(format!(
            "invalid policy {policy:?}: expected \"standard\" or \"weekend\""
        ))
    })?;
    let cutoff = NaiveTime::parse_from_str(cutoff.trim(), "%H:%M")
        .map_err(|_| RouteError::Parse(format!("invalid cutoff {cutoff:?}: expected HH:MM")))?;
    let zone: Tz = zone
        .trim()
        .parse()
        .map_err(|_| RouteError::Parse(format!("invalid time zone {zone:?}")))?;
    Ok(DeliveryPolicy::new(kind, zone, cutoff))
}
