//! Loading and error panels
//!
//! Both replace the whole dashboard body; nothing from an earlier snapshot
//! is shown alongside them.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub const LOADING_TEXT: &str = "Loading Dashboard...";
pub const ERROR_TITLE: &str = "Error!";

/// A box of `height` rows centered in `area`, at most 70 columns wide.
fn centered(area: Rect, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Max(70),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}

pub fn render_loading(f: &mut Frame, area: Rect, tick: usize) {
    let dots = ".".repeat(tick / 4 % 4);
    let loading = Paragraph::new(vec![
        Line::styled(
            LOADING_TEXT,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(dots, Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center);
    f.render_widget(loading, centered(area, 2));
}

pub fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(vec![
        Line::styled(
            ERROR_TITLE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .padding(Padding::uniform(1)),
    );
    f.render_widget(error, centered(area, 9));
}
