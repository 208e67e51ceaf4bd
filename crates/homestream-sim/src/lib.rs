//! Synthetic "new listing" event generation.
//!
//! The simulator reconstructs plausible-looking listings from the persisted
//! feature statistics alone: each feature is drawn independently from a
//! Gaussian parameterized by its stored mean and standard deviation, clamped
//! to the observed [min, max] range. Binary features are rounded to the
//! nearest indicator value. No covariance between features is modeled; this
//! trades statistical fidelity for simplicity.

pub mod events;
pub mod stream;

pub use events::{generate_event, iter_events, sample_feature, ListingEvent};
pub use stream::EventStream;
