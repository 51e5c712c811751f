//! Dashboard main renderer
//!
//! Exactly one of three screens is drawn per frame, chosen by the current
//! display state.

use super::components::{chart, footer, header, info_panel, logs, readings, status, summary};
use super::state::DashboardState;
use crate::analytics::AnalyticsSnapshot;
use crate::refresh::DisplayState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(2)])
        .margin(1)
        .split(f.area());

    match state.display_state() {
        DisplayState::Loading => status::render_loading(f, main_chunks[0], state.tick),
        DisplayState::Failed(message) => status::render_error(f, main_chunks[0], message),
        DisplayState::Ready(snapshot) => render_ready(f, main_chunks[0], state, snapshot),
    }
    footer::render_footer(f, main_chunks[1]);
}

fn render_ready(f: &mut Frame, area: Rect, state: &DashboardState, snapshot: &AnalyticsSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(14),
        ])
        .split(area);

    header::render_header(f, chunks[0], state);
    summary::render_summary_cards(f, chunks[1], snapshot);

    let middle_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ])
        .split(chunks[2]);

    chart::render_records_chart(f, middle_chunks[0], snapshot);
    info_panel::render_info_panel(f, middle_chunks[1], state);
    logs::render_logs_panel(f, middle_chunks[2], state);
    readings::render_readings_table(f, chunks[3], snapshot);
}
