//! Event sampling primitives.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use homestream_core::stats::{FeatureKind, FeatureStats, FeatureSummary};

/// One synthetic listing: sampled feature values plus a creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingEvent {
    /// Feature name → sampled value.
    pub payload: BTreeMap<String, f64>,
    /// Wall-clock creation time.
    pub created_at: DateTime<Utc>,
}

/// Draws one value for a feature from its summary statistics.
///
/// The draw is Gaussian with the stored mean and standard deviation
/// (substituting 1.0 when the stored deviation is zero), clamped into
/// [min, max]. Binary features are rounded to the nearest indicator value
/// after clamping.
pub fn sample_feature<R: Rng + ?Sized>(summary: &FeatureSummary, rng: &mut R) -> f64 {
    let std = if summary.std == 0.0 { 1.0 } else { summary.std };
    let value = match Normal::new(summary.mean, std) {
        Ok(normal) => normal.sample(rng),
        // Unreachable for validated stats; degrade to the mean.
        Err(_) => summary.mean,
    };
    let value = value.clamp(summary.min, summary.max);
    match summary.kind {
        FeatureKind::Binary => value.round(),
        FeatureKind::Continuous => value,
    }
}

/// Samples one event covering every feature in `stats`.
///
/// Target summaries and the stored test fraction live outside the feature
/// map, so they can never appear in the payload.
pub fn generate_event<R: Rng + ?Sized>(stats: &FeatureStats, rng: &mut R) -> ListingEvent {
    let payload = stats
        .features
        .iter()
        .map(|(name, summary)| (name.clone(), sample_feature(summary, rng)))
        .collect();
    ListingEvent {
        payload,
        created_at: Utc::now(),
    }
}

/// Produces a finite sequence of `count` events.
///
/// With a seed the sampled values are reproducible across calls; without
/// one the RNG is seeded from the OS.
pub fn iter_events(
    stats: &FeatureStats,
    count: usize,
    seed: Option<u64>,
) -> impl Iterator<Item = ListingEvent> + '_ {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..count).map(move |_| generate_event(stats, &mut rng))
}
