//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//!
//! - `utils`: Shared helpers (scrollable lists, truncation, popup placement)
//! - `layout`: Form inputs, lookup button and status line
//! - `content`: Results area (cards and messages)
//! - `overlays`: Help popup

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::LookupState;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, state: &LookupState) {
        // Filter input only exists once there is something to filter
        let show_filter = state.filter_available();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                              // Pincode + button
                Constraint::Length(if show_filter { 3 } else { 0 }), // Filter
                Constraint::Min(0),                                 // Results
                Constraint::Length(1),                              // Status line
            ])
            .split(frame.area());

        layout::render_form_bar(frame, chunks[0], state);
        if show_filter {
            layout::render_filter_bar(frame, chunks[1], state);
        }
        content::render_results(frame, chunks[2], state);
        layout::render_status_line(frame, chunks[3], state);

        if state.show_help {
            overlays::render_help_popup(frame);
        }
    }
}
