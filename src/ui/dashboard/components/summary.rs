//! Summary cards component
//!
//! Renders the four headline numbers of a snapshot

use super::super::utils::format_stat_value;
use crate::analytics::AnalyticsSnapshot;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Label, formatted value and accent color for each card, in display order.
pub fn summary_cards(snapshot: &AnalyticsSnapshot) -> [(&'static str, String, Color); 4] {
    [
        (
            "Average Temp",
            format_stat_value(snapshot.average_temperature, "°C"),
            Color::LightRed,
        ),
        (
            "Max Temp",
            format_stat_value(snapshot.max_temperature, "°C"),
            Color::Red,
        ),
        (
            "Average Humidity",
            format_stat_value(snapshot.average_humidity, "%"),
            Color::LightBlue,
        ),
        (
            "Total Records",
            format_stat_value(snapshot.total_records, ""),
            Color::LightGreen,
        ),
    ]
}

pub fn render_summary_cards(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    snapshot: &AnalyticsSnapshot,
) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value, color), chunk) in summary_cards(snapshot).into_iter().zip(card_chunks.iter())
    {
        let card = Paragraph::new(vec![
            Line::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(card, *chunk);
    }
}
