//! Records per sensor chart component

use super::super::utils::chart_entries;
use crate::analytics::AnalyticsSnapshot;

use ratatui::Frame;
use ratatui::layout::Direction;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Padding};

/// Render one bar per sensor, labelled with the sensor name.
pub fn render_records_chart(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    snapshot: &AnalyticsSnapshot,
) {
    let bars: Vec<Bar> = chart_entries(&snapshot.records_per_sensor)
        .into_iter()
        .map(|entry| {
            Bar::default()
                .label(entry.name.into())
                .value(entry.count)
                .style(Style::default().fg(Color::Cyan))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Records Per Sensor")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}
