//! Dashboard info panel component
//!
//! Renders the backend endpoint and poll statistics

use crate::environment::Environment;

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, format_uptime};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn stat_line<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

/// Render backend and poll info.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let metrics = &state.poll_metrics;
    let mut info_lines = Vec::new();

    // Environment with color coding
    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )]));
    info_lines.push(Line::from(vec![Span::styled(
        state.environment.api_url(),
        Style::default().fg(Color::LightBlue),
    )]));
    info_lines.push(Line::from(vec![Span::styled(
        format!("Uptime: {}", format_uptime(state.start_time.elapsed())),
        Style::default().fg(Color::LightGreen),
    )]));
    let (polling, polling_color) = if state.is_polling() {
        ("active", Color::Green)
    } else {
        ("stopped", Color::Red)
    };
    info_lines.push(stat_line("Polling: ", polling.to_string(), polling_color));
    info_lines.push(Line::from(""));

    info_lines.push(stat_line(
        "Polls: ",
        metrics.polls_issued.to_string(),
        Color::White,
    ));
    info_lines.push(stat_line(
        "Succeeded: ",
        metrics.polls_succeeded.to_string(),
        Color::Green,
    ));
    info_lines.push(stat_line(
        "Failed: ",
        format!("{} ({} in a row)", metrics.polls_failed, metrics.consecutive_failures),
        Color::Red,
    ));
    info_lines.push(stat_line(
        "Success: ",
        format!("{:.1}%", metrics.success_rate()),
        metrics.success_rate_color(),
    ));
    if metrics.stale_discarded > 0 {
        info_lines.push(stat_line(
            "Stale: ",
            metrics.stale_discarded.to_string(),
            Color::LightYellow,
        ));
    }

    let last_refresh = metrics
        .last_success_timestamp
        .as_deref()
        .map(format_compact_timestamp)
        .unwrap_or_else(|| "Never".to_string());
    info_lines.push(stat_line("Last Refresh: ", last_refresh, Color::Yellow));

    let info_block = Block::default()
        .title("BACKEND")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
