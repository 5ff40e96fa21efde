//! Lookup state and its transitions
//!
//! All mutation of the form goes through the methods here so the phase
//! machine (idle, loading, success, empty, error) can be exercised without a
//! terminal or a network.

use super::content::{filter_by_name, PostOfficeRecord};
use super::error::LookupError;
use super::types::{Focus, LookupPhase, LookupQuery, PINCODE_LENGTH};

pub const NO_DATA_MESSAGE: &str = "No data found for the entered pincode.";
pub const NO_MATCH_MESSAGE: &str = "Couldn't find the postal data you're looking for…";

/// What the results area should show, first matching rule wins
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsView<'a> {
    Error(&'a str),
    Loading,
    Records(Vec<&'a PostOfficeRecord>),
    NoData,
    NoMatch,
}

#[derive(Clone, Debug, Default)]
pub struct LookupState {
    pub pincode_input: String,
    pub filter_text: String,
    pub phase: LookupPhase,
    pub focus: Focus,
    pub selected: usize,
    pub show_help: bool,
    pub last_query: Option<LookupQuery>,
    records: Vec<PostOfficeRecord>,
    filtered: Vec<usize>,
}

impl LookupState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Pincode input
    // ========================================================================

    /// Append a character, capped at the pincode length. Shape is checked on submit.
    pub fn push_pincode_char(&mut self, c: char) {
        if self.pincode_input.chars().count() < PINCODE_LENGTH {
            self.pincode_input.push(c);
        }
    }

    pub fn pop_pincode_char(&mut self) {
        self.pincode_input.pop();
    }

    pub fn clear_pincode(&mut self) {
        self.pincode_input.clear();
    }

    pub fn set_pincode(&mut self, input: &str) {
        self.pincode_input = input.chars().take(PINCODE_LENGTH).collect();
    }

    // ========================================================================
    // Lookup lifecycle
    // ========================================================================

    /// Try to start a lookup for the current input.
    ///
    /// Returns the query to send when the state moved to `Loading`. Returns
    /// `None` when a lookup is already in flight, or when validation failed
    /// (the phase then carries the validation message and the result set is
    /// left as it was).
    pub fn begin_lookup(&mut self) -> Option<LookupQuery> {
        if self.phase.is_loading() {
            return None;
        }
        self.focus = Focus::Pincode;
        match LookupQuery::parse(&self.pincode_input) {
            Ok(query) => {
                self.phase = LookupPhase::Loading;
                self.last_query = Some(query.clone());
                Some(query)
            }
            Err(err) => {
                self.phase = LookupPhase::Error {
                    message: err.user_message(),
                };
                None
            }
        }
    }

    /// Apply the outcome of the in-flight lookup.
    ///
    /// A success replaces the result set wholesale; any error clears it.
    /// The filter is reset either way so the fresh result set is shown in full.
    pub fn settle(&mut self, outcome: Result<Vec<PostOfficeRecord>, LookupError>) {
        self.filter_text.clear();
        self.selected = 0;
        match outcome {
            Ok(records) => {
                self.phase = if records.is_empty() {
                    LookupPhase::Empty
                } else {
                    LookupPhase::Success
                };
                self.records = records;
            }
            Err(err) => {
                self.phase = LookupPhase::Error {
                    message: err.user_message(),
                };
                self.records.clear();
            }
        }
        if self.records.is_empty() {
            self.focus = Focus::Pincode;
        }
        self.refilter();
    }

    // ========================================================================
    // Filter
    // ========================================================================

    pub fn set_filter(&mut self, text: &str) {
        if !self.filter_available() {
            return;
        }
        self.filter_text = text.to_string();
        self.refilter();
    }

    pub fn push_filter_char(&mut self, c: char) {
        let mut text = self.filter_text.clone();
        text.push(c);
        self.set_filter(&text);
    }

    pub fn pop_filter_char(&mut self) {
        let mut text = self.filter_text.clone();
        text.pop();
        self.set_filter(&text);
    }

    fn refilter(&mut self) {
        self.filtered = filter_by_name(&self.records, &self.filter_text);
        if self.selected >= self.filtered.len() {
            self.selected = self.filtered.len().saturating_sub(1);
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn records(&self) -> &[PostOfficeRecord] {
        &self.records
    }

    pub fn filtered_records(&self) -> Vec<&PostOfficeRecord> {
        self.filtered
            .iter()
            .filter_map(|&i| self.records.get(i))
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_results(&self) -> bool {
        !self.records.is_empty()
    }

    /// Filter input and result list are shown, and focusable, only while a
    /// successful non-empty lookup is on screen.
    pub fn filter_available(&self) -> bool {
        self.phase == LookupPhase::Success && self.has_results()
    }

    pub fn selected_record(&self) -> Option<&PostOfficeRecord> {
        self.filtered
            .get(self.selected)
            .and_then(|&i| self.records.get(i))
    }

    pub fn results_view(&self) -> ResultsView<'_> {
        if let Some(message) = self.phase.error_message() {
            return ResultsView::Error(message);
        }
        if self.phase.is_loading() {
            return ResultsView::Loading;
        }
        if !self.filtered.is_empty() {
            return ResultsView::Records(self.filtered_records());
        }
        if self.records.is_empty() {
            ResultsView::NoData
        } else {
            ResultsView::NoMatch
        }
    }

    // ========================================================================
    // Focus, selection, help
    // ========================================================================

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.filter_available());
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.filter_available());
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = if self.filter_available() { focus } else { Focus::Pincode };
    }

    pub fn move_selection_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected < self.filtered.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
