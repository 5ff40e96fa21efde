//! Core type definitions for the application

use std::fmt;
use std::str::FromStr;

use super::error::LookupError;

pub const PINCODE_LENGTH: usize = 6;

/// A pincode that has passed validation: exactly six ASCII digits
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LookupQuery(String);

impl LookupQuery {
    pub fn parse(input: &str) -> Result<Self, LookupError> {
        let valid = input.chars().count() == PINCODE_LENGTH
            && input.chars().all(|c| c.is_ascii_digit());
        if valid {
            Ok(Self(input.to_string()))
        } else {
            Err(LookupError::Validation {
                input: input.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LookupQuery {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the lookup currently stands
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LookupPhase {
    #[default]
    Idle,
    Loading,
    Success,
    /// The provider answered successfully with zero records
    Empty,
    Error { message: String },
}

impl LookupPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupPhase::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LookupPhase::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Which part of the form has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Pincode,
    Filter,
    Results,
}

impl Focus {
    /// Next focus target. Filter and results are skipped when there is nothing to filter.
    pub fn next(self, has_results: bool) -> Self {
        if !has_results {
            return Focus::Pincode;
        }
        match self {
            Focus::Pincode => Focus::Filter,
            Focus::Filter => Focus::Results,
            Focus::Results => Focus::Pincode,
        }
    }

    pub fn prev(self, has_results: bool) -> Self {
        if !has_results {
            return Focus::Pincode;
        }
        match self {
            Focus::Pincode => Focus::Results,
            Focus::Filter => Focus::Pincode,
            Focus::Results => Focus::Filter,
        }
    }
}
