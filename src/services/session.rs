//! Search session state machine.
//!
//! One [`SearchSession`] backs one search view. It owns the query input and
//! the current [`Phase`]; a submit hands out a [`SearchTicket`] and only the
//! outcome carrying the most recent ticket is ever applied.

use tracing::debug;

use crate::models::item::ClothingItem;
use crate::models::outcome::SearchOutcome;
use crate::models::query::Query;
use crate::services::query_gate::{InputChange, QueryError, QueryGate};

/// Sequence number of one started search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    /// Nothing submitted yet, or the input was cleared.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// Last outcome was a success; `items` may be empty.
    Resolved { items: Vec<ClothingItem> },
    /// Last outcome was a failure.
    Errored { message: String },
}

/// What the view should show. Derived from phase and input, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayState<'a> {
    Guidance,
    Loading,
    NoResults,
    Results(&'a [ClothingItem]),
    Error(&'a str),
    /// Input typed but not submitted, or results of a query since cleared.
    Blank,
}

/// What [`SearchSession::apply`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Resolved,
    Errored,
    /// A newer search was started after this one, or the outcome was
    /// already applied; the outcome was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct SearchSession {
    gate: QueryGate,
    phase: Phase,
    latest: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn input(&self) -> &str {
        self.gate.raw()
    }

    /// Update the query input. Clearing it resets a settled session to
    /// `Idle`; an in-flight search is left alone.
    pub fn set_input(&mut self, raw: &str) {
        if self.gate.edit(raw) == InputChange::Cleared {
            self.input_cleared();
        }
    }

    fn input_cleared(&mut self) {
        match self.phase {
            Phase::Resolved { .. } | Phase::Errored { .. } => {
                debug!("Input cleared, session reset to idle");
                self.phase = Phase::Idle;
            }
            Phase::Idle | Phase::Loading => {}
        }
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase != Phase::Loading && !self.gate.is_blank()
    }

    /// Start a search for the current input.
    ///
    /// A blank input is rejected without touching the session. Otherwise any
    /// previous items or error are dropped and the session enters `Loading`.
    pub fn submit(&mut self) -> Result<(Query, SearchTicket), QueryError> {
        let query = self.gate.accept()?;
        self.latest += 1;
        self.phase = Phase::Loading;
        debug!(sequence = self.latest, query = %query, "Search started");
        Ok((query, SearchTicket(self.latest)))
    }

    /// Apply the outcome of the search identified by `ticket`.
    ///
    /// Only the latest ticket is accepted, and only while `Loading`.
    pub fn apply(&mut self, ticket: SearchTicket, outcome: SearchOutcome) -> Applied {
        if ticket.0 != self.latest || self.phase != Phase::Loading {
            debug!(
                sequence = ticket.0,
                latest = self.latest,
                phase = ?self.phase,
                "Discarding stale search outcome"
            );
            metrics::counter!("search_stale_outcomes_total").increment(1);
            return Applied::Stale;
        }

        match outcome {
            SearchOutcome::Success(items) => {
                self.phase = Phase::Resolved { items };
                Applied::Resolved
            }
            SearchOutcome::Failure(err) => {
                self.phase = Phase::Errored {
                    message: err.user_message(),
                };
                Applied::Errored
            }
        }
    }

    pub fn items(&self) -> &[ClothingItem] {
        match &self.phase {
            Phase::Resolved { items } => items,
            _ => &[],
        }
    }

    pub fn display(&self) -> DisplayState<'_> {
        let query_empty = self.gate.raw().is_empty();
        match &self.phase {
            Phase::Idle if query_empty => DisplayState::Guidance,
            Phase::Idle => DisplayState::Blank,
            Phase::Loading => DisplayState::Loading,
            Phase::Resolved { items } if items.is_empty() && !query_empty => DisplayState::NoResults,
            Phase::Resolved { items } if !items.is_empty() => DisplayState::Results(items),
            Phase::Resolved { .. } => DisplayState::Blank,
            Phase::Errored { message } => DisplayState::Error(message),
        }
    }
}
