//! Explicit dashboard state with a pure per-tick update.
//!
//! The hosting loop owns a [`DashboardState`] across ticks and feeds each
//! simulated batch through [`DashboardState::apply_batch`]; rendering reads
//! the state without mutating it. No framework-managed globals.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use homestream_sim::ListingEvent;

/// Number of trailing history records the dashboard renders.
pub const HISTORY_WINDOW: usize = 50;

/// One enriched record: a simulated listing plus its predicted price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// When the listing event was created.
    pub timestamp: DateTime<Utc>,
    /// Sampled feature values.
    pub payload: BTreeMap<String, f64>,
    /// Predicted price for the listing.
    pub prediction: f64,
}

/// Append-only session state for the dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    history: Vec<HistoryRecord>,
    latest_len: usize,
    prediction_sum: f64,
}

impl DashboardState {
    /// Fresh state with empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one batch of events with their predictions, in order.
    ///
    /// Returns the slice of records just appended. `events` and
    /// `predictions` must have equal lengths.
    pub fn apply_batch(
        &mut self,
        events: Vec<ListingEvent>,
        predictions: &[f64],
    ) -> &[HistoryRecord] {
        debug_assert_eq!(events.len(), predictions.len());
        let start = self.history.len();
        for (event, &prediction) in events.into_iter().zip(predictions) {
            self.prediction_sum += prediction;
            self.history.push(HistoryRecord {
                timestamp: event.created_at,
                payload: event.payload,
                prediction,
            });
        }
        self.latest_len = self.history.len() - start;
        &self.history[start..]
    }

    /// Records from the most recent batch.
    pub fn latest_batch(&self) -> &[HistoryRecord] {
        &self.history[self.history.len() - self.latest_len..]
    }

    /// Trailing window of history for display.
    pub fn tail(&self) -> &[HistoryRecord] {
        let start = self.history.len().saturating_sub(HISTORY_WINDOW);
        &self.history[start..]
    }

    /// Total number of events seen this session.
    pub fn total_events(&self) -> usize {
        self.history.len()
    }

    /// Running mean of all predictions this session.
    pub fn mean_prediction(&self) -> f64 {
        if self.history.is_empty() {
            0.0
        } else {
            self.prediction_sum / self.history.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(area: f64) -> ListingEvent {
        ListingEvent {
            payload: BTreeMap::from([("area".to_string(), area)]),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_batch_appends_in_order() {
        let mut state = DashboardState::new();
        let appended = state.apply_batch(vec![event(1000.0), event(2000.0)], &[100.0, 200.0]);
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[0].prediction, 100.0);
        assert_eq!(appended[1].prediction, 200.0);
        assert_eq!(state.total_events(), 2);
    }

    #[test]
    fn test_mean_prediction_is_running_mean() {
        let mut state = DashboardState::new();
        state.apply_batch(vec![event(1.0)], &[100.0]);
        state.apply_batch(vec![event(2.0), event(3.0)], &[200.0, 300.0]);
        assert_eq!(state.mean_prediction(), 200.0);
    }

    #[test]
    fn test_latest_batch_tracks_last_apply() {
        let mut state = DashboardState::new();
        state.apply_batch(vec![event(1.0), event(2.0)], &[1.0, 2.0]);
        state.apply_batch(vec![event(3.0)], &[3.0]);
        let latest = state.latest_batch();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].prediction, 3.0);
    }

    #[test]
    fn test_tail_is_bounded_by_window() {
        let mut state = DashboardState::new();
        for i in 0..(HISTORY_WINDOW + 20) {
            state.apply_batch(vec![event(i as f64)], &[i as f64]);
        }
        assert_eq!(state.tail().len(), HISTORY_WINDOW);
        assert_eq!(state.total_events(), HISTORY_WINDOW + 20);
        // Tail ends with the newest record.
        assert_eq!(
            state.tail().last().unwrap().prediction,
            (HISTORY_WINDOW + 19) as f64
        );
    }

    #[test]
    fn test_empty_state_mean_is_zero() {
        let state = DashboardState::new();
        assert_eq!(state.mean_prediction(), 0.0);
        assert!(state.latest_batch().is_empty());
        assert!(state.tail().is_empty());
    }
}
