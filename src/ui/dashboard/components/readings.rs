//! Recent readings table component

use super::super::utils::{READING_COLUMNS, column_header, reading_cells, table_rows};
use crate::analytics::AnalyticsSnapshot;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table};

/// Render the first readings of the snapshot, or a placeholder when there are none.
pub fn render_readings_table(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    snapshot: &AnalyticsSnapshot,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if snapshot.raw_readings.is_empty() {
        let placeholder = Paragraph::new("Waiting for data...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block.title("Raw Sensor Data"));
        f.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(READING_COLUMNS.map(|field| Cell::from(column_header(field)))).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows = table_rows(&snapshot.raw_readings)
        .iter()
        .map(|reading| Row::new(reading_cells(reading)));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(block.title("Recent Sensor Readings"));

    f.render_widget(table, area);
}
