use garde::Validate;
use serde::Serialize;
use std::fmt;

/// A search query that passed the gate: non-empty and trimmed.
///
/// The only way to build one is [`crate::services::query_gate::accept`], so
/// holding a `Query` is proof the text is safe to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub(crate) fn new_unchecked(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /api/search`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SearchRequest {
    #[garde(length(min = 1))]
    pub request: String,
}

impl From<&Query> for SearchRequest {
    fn from(query: &Query) -> Self {
        Self {
            request: query.as_str().to_string(),
        }
    }
}
