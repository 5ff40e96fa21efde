//! Results area rendering (cards, loading, error and empty messages)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{
    Focus, LookupState, PostOfficeRecord, ResultsView, NO_DATA_MESSAGE, NO_MATCH_MESSAGE,
};
use super::utils::{render_scrollable_list, truncate_string};

const LOADING_TEXT: &str = "Loading...";

pub fn render_results(frame: &mut Frame, area: Rect, state: &LookupState) {
    let focused = state.focus == Focus::Results;
    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Post Offices ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    match state.results_view() {
        ResultsView::Error(message) => {
            render_message(frame, area, message, Color::Red, block);
        }
        ResultsView::Loading => {
            render_message(frame, area, LOADING_TEXT, Color::Yellow, block);
        }
        ResultsView::Records(records) => {
            let width = area.width.saturating_sub(4) as usize;
            let items: Vec<ListItem> = records
                .iter()
                .enumerate()
                .map(|(i, record)| {
                    render_card(record, i == state.selected, focused, width)
                })
                .collect();
            render_scrollable_list(frame, area, items, state.selected, block);
        }
        ResultsView::NoData => {
            render_message(frame, area, NO_DATA_MESSAGE, Color::White, block);
        }
        ResultsView::NoMatch => {
            render_message(frame, area, NO_MATCH_MESSAGE, Color::White, block);
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color, block: Block) {
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn field<'a>(label: &'a str, value: &'a str) -> Vec<Span<'a>> {
    vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ]
}

/// One card: name on the first line, then pincode, district and state.
/// The selected card also lists whichever optional provider fields exist.
fn render_card<'a>(
    record: &'a PostOfficeRecord,
    selected: bool,
    focused: bool,
    width: usize,
) -> ListItem<'a> {
    let name_style = if selected && focused {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if selected { "▶ " } else { "  " };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, name_style),
        Span::styled("Name: ", Style::default().fg(Color::DarkGray)),
        Span::styled(truncate_string(&record.name, width.saturating_sub(8)), name_style),
    ])];

    let mut facts = vec![Span::raw("  ")];
    facts.extend(field("Pincode", &record.pincode));
    facts.push(Span::raw("  "));
    facts.extend(field("District", &record.district));
    facts.push(Span::raw("  "));
    facts.extend(field("State", &record.state));
    lines.push(Line::from(facts));

    if selected {
        let details = record.details();
        if !details.is_empty() {
            let mut spans = vec![Span::raw("  ")];
            for (i, (label, value)) in details.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.extend(field(label, value));
            }
            lines.push(Line::from(spans));
        }
    }

    lines.push(Line::default());
    ListItem::new(Text::from(lines))
}
