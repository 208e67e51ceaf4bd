//! Terminal front end for homestream.
//!
//! On each tick the session samples a batch of synthetic listings, predicts
//! a price for each, appends the enriched records to explicit session state
//! and the JSON-lines event log, and redraws. The loop blocks for the
//! configured interval between batches while staying responsive to input;
//! `q` or `Esc` ends the session.

pub mod error;
pub mod event_log;
pub mod runner;
pub mod state;
pub mod ui;

pub use error::{AppError, Result};
pub use event_log::EventLog;
pub use runner::{run_dashboard, DashboardOptions};
pub use state::{DashboardState, HistoryRecord, HISTORY_WINDOW};
