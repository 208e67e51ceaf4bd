//! The dashboard loop: simulate, predict, render, wait.

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use homestream_core::stats::FeatureStats;
use homestream_core::Settings;
use homestream_predict::{batch_predict, load_model, Pipeline};
use homestream_sim::EventStream;

use crate::error::{AppError, Result};
use crate::event_log::EventLog;
use crate::state::DashboardState;
use crate::ui;

/// Runtime options for the dashboard loop.
#[derive(Debug, Clone, Default)]
pub struct DashboardOptions {
    /// Log to the console instead of drawing a TUI.
    pub headless: bool,
    /// Seed for the event stream (reproducible sessions).
    pub seed: Option<u64>,
    /// Stop after this many batches (mainly for scripted runs).
    pub max_batches: Option<usize>,
}

/// Restores the terminal on drop, whatever path the loop exits through.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().map_err(AppError::Terminal)?;
        execute!(stdout(), EnterAlternateScreen).map_err(AppError::Terminal)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}

/// Runs the interactive (or headless) simulate→predict→render loop.
///
/// Pre-flight checks verify both training artifacts exist and point the
/// user at `homestream train` when they do not.
pub fn run_dashboard(settings: &Settings, options: &DashboardOptions) -> Result<()> {
    let stats_path = settings.paths.stats_file();
    if !stats_path.exists() {
        return Err(AppError::MissingArtifact {
            path: stats_path,
            hint: "run `homestream train` first".to_string(),
        });
    }
    let model_path = settings.paths.model_file();
    if !model_path.exists() {
        return Err(AppError::MissingArtifact {
            path: model_path,
            hint: "run `homestream train` first".to_string(),
        });
    }

    let stats = FeatureStats::load(&stats_path)?;
    let model = load_model(&model_path)?;
    let log = EventLog::open(&settings.paths.event_log())?;
    let interval = Duration::from_secs_f64(settings.simulator.interval_seconds);
    let stream = EventStream::new(
        stats,
        interval,
        settings.simulator.batch_size,
        options.seed,
    );

    let mut session = Session {
        model,
        stream,
        log,
        state: DashboardState::new(),
        interval,
        refresh: Duration::from_secs_f64(settings.app.refresh_rate),
        max_batches: options.max_batches,
    };

    if options.headless {
        session.run_headless()
    } else {
        session.run_tui(&settings.app.title)
    }
}

/// Everything one dashboard session owns.
struct Session {
    model: Pipeline,
    stream: EventStream,
    log: EventLog,
    state: DashboardState,
    interval: Duration,
    refresh: Duration,
    max_batches: Option<usize>,
}

impl Session {
    /// Samples one batch, predicts, updates state, and logs each event.
    fn step(&mut self) -> Result<()> {
        let batch = self.stream.next_batch();
        let rows: Vec<_> = batch.iter().map(|e| e.payload.clone()).collect();
        let predictions = batch_predict(&self.model, &rows)?;
        let appended = self.state.apply_batch(batch, &predictions);
        for record in appended {
            self.log.append(record)?;
            info!(
                prediction = record.prediction,
                payload = %ui::format_payload(&record.payload),
                "new listing"
            );
        }
        Ok(())
    }

    fn done(&self, batches: usize) -> bool {
        self.max_batches.is_some_and(|max| batches >= max)
    }

    fn run_headless(&mut self) -> Result<()> {
        let mut batches = 0;
        loop {
            self.step()?;
            batches += 1;
            println!("{}", ui::format_metrics(&self.state));
            for record in self.state.latest_batch() {
                println!("  {}", ui::format_record(record));
            }
            if self.done(batches) {
                return Ok(());
            }
            std::thread::sleep(self.interval);
        }
    }

    fn run_tui(&mut self, title: &str) -> Result<()> {
        let _guard = TerminalGuard::enter()?;
        let mut terminal =
            Terminal::new(CrosstermBackend::new(io::stdout())).map_err(AppError::Terminal)?;

        let mut batches = 0;
        loop {
            self.step()?;
            batches += 1;
            terminal
                .draw(|frame| ui::draw(frame, title, &self.state))
                .map_err(AppError::Terminal)?;
            if self.done(batches) {
                return Ok(());
            }

            // Wait out the interval while staying responsive to input and
            // redrawing at the configured refresh rate.
            let deadline = Instant::now() + self.interval;
            loop {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    break;
                }
                let wait = remaining.min(self.refresh);
                if event::poll(wait).map_err(AppError::Terminal)? {
                    if let Event::Key(key) = event::read().map_err(AppError::Terminal)? {
                        if key.kind == KeyEventKind::Press
                            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                        {
                            return Ok(());
                        }
                    }
                }
                terminal
                    .draw(|frame| ui::draw(frame, title, &self.state))
                    .map_err(AppError::Terminal)?;
            }
        }
    }
}
