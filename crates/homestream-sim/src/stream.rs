//! Timed, infinite batch stream of listing events.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::trace;

use homestream_core::stats::FeatureStats;

use crate::events::{generate_event, ListingEvent};

/// An infinite iterator of event batches paced by a blocking sleep.
///
/// The first batch is produced immediately; every subsequent call to
/// [`Iterator::next`] blocks for the configured interval before sampling.
/// The front end re-implements this pacing inline so it can poll for input
/// while waiting; the stream form exists for headless/scripted consumers.
#[derive(Debug)]
pub struct EventStream {
    stats: FeatureStats,
    interval: Duration,
    batch_size: usize,
    rng: StdRng,
    started: bool,
}

impl EventStream {
    /// Builds a stream over owned statistics.
    pub fn new(stats: FeatureStats, interval: Duration, batch_size: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            stats,
            interval,
            batch_size,
            rng,
            started: false,
        }
    }

    /// Samples one batch without waiting.
    pub fn next_batch(&mut self) -> Vec<ListingEvent> {
        let batch: Vec<ListingEvent> = (0..self.batch_size)
            .map(|_| generate_event(&self.stats, &mut self.rng))
            .collect();
        trace!(batch = batch.len(), "sampled event batch");
        batch
    }
}

impl Iterator for EventStream {
    type Item = Vec<ListingEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            std::thread::sleep(self.interval);
        }
        self.started = true;
        Some(self.next_batch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homestream_core::stats::{FeatureKind, FeatureSummary};
    use std::collections::BTreeMap;

    fn stats() -> FeatureStats {
        let mut features = BTreeMap::new();
        features.insert(
            "area".to_string(),
            FeatureSummary::new("area", 500.0, 4000.0, 1500.0, 400.0, FeatureKind::Continuous)
                .unwrap(),
        );
        FeatureStats::new(features, 0.0, 1.0, 0.2)
    }

    #[test]
    fn test_stream_batches_have_configured_size() {
        let mut stream = EventStream::new(stats(), Duration::from_millis(1), 3, Some(0));
        let first = stream.next().unwrap();
        let second = stream.next().unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn test_stream_is_reproducible_per_seed() {
        let mut a = EventStream::new(stats(), Duration::from_millis(1), 2, Some(9));
        let mut b = EventStream::new(stats(), Duration::from_millis(1), 2, Some(9));
        let batch_a: Vec<_> = a.next().unwrap().into_iter().map(|e| e.payload).collect();
        let batch_b: Vec<_> = b.next().unwrap().into_iter().map(|e| e.payload).collect();
        assert_eq!(batch_a, batch_b);
    }

    #[test]
    fn test_first_batch_is_immediate() {
        let mut stream = EventStream::new(stats(), Duration::from_secs(60), 1, Some(0));
        let start = std::time::Instant::now();
        let _ = stream.next().unwrap();
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
