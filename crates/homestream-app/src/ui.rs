//! Ratatui rendering for the dashboard.
//!
//! Rendering is read-only over [`DashboardState`]; the text formatting
//! helpers are split out so they can be tested without a terminal.

use std::collections::BTreeMap;

use chrono::Local;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{DashboardState, HistoryRecord};

/// Formats a payload as `name: value | name: value` with whole-number values.
pub fn format_payload(payload: &BTreeMap<String, f64>) -> String {
    payload
        .iter()
        .map(|(key, value)| format!("{key}: {value:.0}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Formats one history record as a display line.
pub fn format_record(record: &HistoryRecord) -> String {
    let time = record.timestamp.with_timezone(&Local).format("%H:%M:%S");
    format!(
        "{time}  {}  ->  ${:.0}",
        format_payload(&record.payload),
        record.prediction
    )
}

/// Formats the header metric line.
pub fn format_metrics(state: &DashboardState) -> String {
    format!(
        "events: {}   mean predicted price: ${:.0}",
        state.total_events(),
        state.mean_prediction()
    )
}

/// Height of the latest-batch pane: one row per record plus borders,
/// saturating instead of wrapping for oversized batches.
fn latest_pane_height(records: usize) -> u16 {
    u16::try_from(records)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Draws the full dashboard: header, latest batch, trailing history.
pub fn draw(frame: &mut Frame, title: &str, state: &DashboardState) {
    let latest = state.latest_batch();
    let areas = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(latest_pane_height(latest.len())),
        Constraint::Min(0),
    ])
    .split(frame.area());

    let header = Paragraph::new(Line::from(format_metrics(state)))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(header, areas[0]);

    let latest_lines: Vec<Line> = latest.iter().map(|r| Line::from(format_record(r))).collect();
    let latest_widget = Paragraph::new(latest_lines)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("Latest batch"));
    frame.render_widget(latest_widget, areas[1]);

    // Newest record at the top of the history pane.
    let history_lines: Vec<Line> = state
        .tail()
        .iter()
        .rev()
        .map(|r| Line::from(format_record(r)))
        .collect();
    let history_widget = Paragraph::new(history_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Prediction history"),
    );
    frame.render_widget(history_widget, areas[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_payload_rounds_to_whole_numbers() {
        let payload = BTreeMap::from([
            ("Gr Liv Area".to_string(), 1499.7),
            ("Overall Qual".to_string(), 6.2),
        ]);
        assert_eq!(format_payload(&payload), "Gr Liv Area: 1500 | Overall Qual: 6");
    }

    #[test]
    fn test_format_record_includes_prediction() {
        let record = HistoryRecord {
            timestamp: Utc::now(),
            payload: BTreeMap::from([("area".to_string(), 1000.0)]),
            prediction: 123456.7,
        };
        let line = format_record(&record);
        assert!(line.contains("area: 1000"));
        assert!(line.ends_with("$123457"));
    }

    #[test]
    fn test_format_metrics_reports_totals() {
        let state = DashboardState::new();
        assert_eq!(format_metrics(&state), "events: 0   mean predicted price: $0");
    }

    #[test]
    fn test_latest_pane_height_saturates() {
        assert_eq!(latest_pane_height(0), 2);
        assert_eq!(latest_pane_height(2), 4);
        assert_eq!(latest_pane_height(usize::from(u16::MAX)), u16::MAX);
        assert_eq!(latest_pane_height(usize::from(u16::MAX) + 10), u16::MAX);
    }
}
