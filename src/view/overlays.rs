//! Overlay rendering (help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::utils::centered_rect;

pub fn render_help_popup(frame: &mut Frame) {
    let keybindings = [
        ("", "── Lookup ──"),
        ("0-9", "Type pincode"),
        ("Enter", "Look up pincode"),
        ("Backspace", "Delete character"),
        ("Esc", "Clear focused input"),
        ("", ""),
        ("", "── Results ──"),
        ("Tab / Shift+Tab", "Cycle pincode, filter, list"),
        ("↑ / ↓", "Move selection"),
        ("", ""),
        ("", "── General ──"),
        ("F1", "Toggle this help"),
        ("Ctrl+C / Ctrl+Q", "Quit"),
    ];

    let popup_area = centered_rect(frame.area(), 52, keybindings.len() as u16 + 2);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^48}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (F1 or Esc to close) ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(help_text, popup_area);
}
