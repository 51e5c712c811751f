//! Dashboard header component
//!
//! Renders the title, subtitle and the countdown to the next poll

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use std::time::Instant;

pub const DASHBOARD_TITLE: &str = "IoT Analytics Dashboard";
pub const DASHBOARD_SUBTITLE: &str = "Live insights from our simulated sensor network.";

/// Render header with title and refresh countdown.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(area);

    let title = Paragraph::new(DASHBOARD_TITLE.to_uppercase())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, header_chunks[0]);

    let subtitle = Paragraph::new(DASHBOARD_SUBTITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(subtitle, header_chunks[1]);

    // Countdown to the next poll. It only tracks the timer, not whether a
    // request is currently in flight.
    let now = Instant::now();
    let metrics = &state.poll_metrics;
    let remaining = metrics.next_poll_in(state.poll_interval, now);
    let progress = metrics.interval_progress(state.poll_interval, now);
    let label = if remaining.is_zero() {
        "NEXT REFRESH - due now".to_string()
    } else {
        format!("NEXT REFRESH - in {}s", remaining.as_secs_f64().ceil() as u64)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress)
        .label(label);

    f.render_widget(gauge, header_chunks[2]);
}
