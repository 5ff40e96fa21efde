//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::content::PostOfficeRecord;
use super::error::LookupError;
use super::lookup_state::LookupState;
use super::types::{Focus, LookupQuery};

/// Shared handle to the lookup state.
///
/// The event loop snapshots it for drawing; the controller and the
/// settlement of the in-flight request are its only writers.
#[derive(Clone, Default)]
pub struct AppModel {
    state: Arc<Mutex<LookupState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_state(&self) -> LookupState {
        self.state.lock().await.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub async fn begin_lookup(&self) -> Option<LookupQuery> {
        self.state.lock().await.begin_lookup()
    }

    pub async fn settle_lookup(&self, outcome: Result<Vec<PostOfficeRecord>, LookupError>) {
        self.state.lock().await.settle(outcome);
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.phase.is_loading()
    }

    pub async fn set_pincode(&self, input: &str) {
        self.state.lock().await.set_pincode(input);
    }

    // ========================================================================
    // Text input
    // ========================================================================

    pub async fn append_to_focused(&self, c: char) {
        let mut state = self.state.lock().await;
        match state.focus {
            Focus::Pincode => state.push_pincode_char(c),
            Focus::Filter => state.push_filter_char(c),
            Focus::Results => {}
        }
    }

    pub async fn backspace_focused(&self) {
        let mut state = self.state.lock().await;
        match state.focus {
            Focus::Pincode => state.pop_pincode_char(),
            Focus::Filter => state.pop_filter_char(),
            Focus::Results => {}
        }
    }

    /// Clear the focused input. On the result list this hands focus back to the pincode field.
    pub async fn clear_focused(&self) {
        let mut state = self.state.lock().await;
        match state.focus {
            Focus::Pincode => state.clear_pincode(),
            Focus::Filter => state.set_filter(""),
            Focus::Results => state.set_focus(Focus::Pincode),
        }
    }

    // ========================================================================
    // Focus, selection & help
    // ========================================================================

    pub async fn focus(&self) -> Focus {
        self.state.lock().await.focus
    }

    pub async fn cycle_focus_forward(&self) {
        self.state.lock().await.focus_next();
    }

    pub async fn cycle_focus_backward(&self) {
        self.state.lock().await.focus_prev();
    }

    pub async fn move_selection_up(&self) {
        self.state.lock().await.move_selection_up();
    }

    pub async fn move_selection_down(&self) {
        self.state.lock().await.move_selection_down();
    }

    pub async fn toggle_help_popup(&self) {
        self.state.lock().await.toggle_help();
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.state.lock().await.show_help
    }
}
