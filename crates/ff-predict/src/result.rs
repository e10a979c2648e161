//! Prediction outputs.

use chrono::{DateTime, Utc};

use ff_shipment::ShipmentStatus;
use ff_sim::SimulationWorld;

// ── ArrivalEstimate ───────────────────────────────────────────────────────────

/// The two instants the query surface reports for a shipment: when it
/// reaches the terminal, and when the customer can have it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ArrivalEstimate {
    pub terminal_arrival:  DateTime<Utc>,
    pub customer_delivery: DateTime<Utc>,
}

// ── ShipmentPrediction ────────────────────────────────────────────────────────

/// Predicted end-of-horizon state for one shipment.
#[derive(Clone, Debug)]
pub struct ShipmentPrediction {
    tracking_id:        String,
    status:             ShipmentStatus,
    segments_remaining: usize,
}

impl ShipmentPrediction {
    pub fn tracking_id(&self) -> &str {
        &self.tracking_id
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    pub fn segments_remaining(&self) -> usize {
        self.segments_remaining
    }

    pub fn is_complete(&self) -> bool {
        self.segments_remaining == 0
    }
}

// ── PredictionResult ──────────────────────────────────────────────────────────

/// Outcome of one horizon-bounded predictive run.
#[derive(Clone, Debug)]
pub struct PredictionResult {
    predicted_at: DateTime<Utc>,
    predictions:  Vec<ShipmentPrediction>,
}

impl PredictionResult {
    /// Summarize the final state of a prediction world.
    pub(crate) fn from_world(world: &SimulationWorld) -> Self {
        Self {
            predicted_at: world.now(),
            predictions:  world
                .shipments()
                .iter()
                .map(|s| ShipmentPrediction {
                    tracking_id:        s.tracking_id().to_owned(),
                    status:             s.status(),
                    segments_remaining: s.route().segment_count() - s.segment_index(),
                })
                .collect(),
        }
    }

    /// The simulated instant the run ended at.
    pub fn predicted_at(&self) -> DateTime<Utc> {
        self.predicted_at
    }

    pub fn predictions(&self) -> &[ShipmentPrediction] {
        &self.predictions
    }

    /// Risk metrics derived from this result.  Interpretation only — never
    /// feeds back into simulation or prediction behavior.
    pub fn risk(&self) -> RiskAssessment {
        let total = self.predictions.len();
        let outstanding = self.predictions.iter().filter(|p| !p.is_complete()).count();
        let score = if total == 0 {
            0.0
        } else {
            outstanding as f64 / total as f64
        };
        RiskAssessment { delay_risk_score: score }
    }
}

// ── RiskAssessment ────────────────────────────────────────────────────────────

/// The fraction of shipments still short of their terminal at the end of a
/// prediction run, in `[0, 1]`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RiskAssessment {
    delay_risk_score: f64,
}

impl RiskAssessment {
    pub fn delay_risk_score(&self) -> f64 {
        self.delay_risk_score
    }
}
