use garde::Validate;

use crate::models::query::{Query, SearchRequest};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Please enter a search query")]
    Required,
}

/// What an edit did to the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    Cleared,
    Edited,
}

/// Holds the raw text of the search box and decides whether it may be
/// submitted.
#[derive(Debug, Default, Clone)]
pub struct QueryGate {
    raw: String,
}

impl QueryGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the raw input.
    pub fn edit(&mut self, raw: &str) -> InputChange {
        self.raw = raw.to_string();
        if self.raw.is_empty() {
            InputChange::Cleared
        } else {
            InputChange::Edited
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the field holds nothing the user could search for.
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Turn the current input into a submittable query.
    pub fn accept(&self) -> Result<Query, QueryError> {
        accept(&self.raw)
    }
}

/// Trim `raw` and check it is non-empty.
pub fn accept(raw: &str) -> Result<Query, QueryError> {
    let candidate = SearchRequest {
        request: raw.trim().to_string(),
    };
    candidate.validate().map_err(|_| QueryError::Required)?;
    Ok(Query::new_unchecked(candidate.request))
}
