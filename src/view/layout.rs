//! Form rendering (pincode input, lookup button, filter input, status line)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{Focus, LookupPhase, LookupState};

pub const LOOKUP_LABEL: &str = "Lookup";
pub const FETCHING_LABEL: &str = "Fetching...";
const IDLE_HINT: &str = " Type a 6-digit pincode and press Enter to look it up ";

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

pub fn render_form_bar(frame: &mut Frame, area: Rect, state: &LookupState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Pincode input
            Constraint::Length(16), // Lookup button
        ])
        .split(area);

    let focused = state.focus == Focus::Pincode;
    let (text, style) = if state.pincode_input.is_empty() {
        ("Enter 6-digit pincode", Style::default().fg(Color::DarkGray))
    } else {
        (state.pincode_input.as_str(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Pincode ")
            .padding(Padding::horizontal(1))
            .border_style(border_style(focused)),
    );
    frame.render_widget(input, chunks[0]);

    // Button is dimmed while a request is outstanding
    let loading = state.phase.is_loading();
    let (label, button_style) = if loading {
        (FETCHING_LABEL, Style::default().fg(Color::DarkGray))
    } else {
        (
            LOOKUP_LABEL,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let button = Paragraph::new(label)
        .style(button_style)
        .centered()
        .block(Block::default().borders(Borders::ALL).border_style(button_style));
    frame.render_widget(button, chunks[1]);
}

pub fn render_filter_bar(frame: &mut Frame, area: Rect, state: &LookupState) {
    let focused = state.focus == Focus::Filter;
    let (text, style) = if state.filter_text.is_empty() {
        ("Filter by post office name", Style::default().fg(Color::DarkGray))
    } else {
        (state.filter_text.as_str(), Style::default().fg(Color::White))
    };

    let filter = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filter ")
            .padding(Padding::horizontal(1))
            .border_style(border_style(focused)),
    );
    frame.render_widget(filter, area);
}

pub fn render_status_line(frame: &mut Frame, area: Rect, state: &LookupState) {
    let mut spans = Vec::new();
    if state.phase == LookupPhase::Idle {
        spans.push(Span::styled(IDLE_HINT, Style::default().fg(Color::Yellow)));
    }
    if state.filter_available() {
        spans.push(Span::styled(
            format!(
                " Showing {} of {} post offices ",
                state.filtered_len(),
                state.records().len()
            ),
            Style::default().fg(Color::Cyan),
        ));
    }
    spans.push(Span::styled(
        " Enter: lookup  Tab: focus  F1: help  Ctrl+C: quit ",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
