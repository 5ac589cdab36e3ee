use strum::IntoStaticStr;

use super::item::ClothingItem;

/// Result of exactly one search exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The service answered with a list (possibly empty).
    Success(Vec<ClothingItem>),
    /// The exchange failed; the error keeps the failure kind for diagnostics.
    Failure(SearchError),
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn items(&self) -> &[ClothingItem] {
        match self {
            Self::Success(items) => items,
            Self::Failure(_) => &[],
        }
    }
}

/// Why a search exchange failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SearchError {
    /// No response reached us (connection refused, DNS, transport timeout).
    #[error("network error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("server responded with HTTP status {status}")]
    Protocol { status: u16 },

    /// 2xx response whose body is not valid JSON.
    #[error("could not parse response: {0}")]
    Decode(String),
}

impl SearchError {
    /// Short machine-friendly kind, used as a metrics label.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// The single user-facing envelope for every failure kind.
    pub fn user_message(&self) -> String {
        format!("Search failed: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_message_names_status() {
        let err = SearchError::Protocol { status: 500 };
        assert!(err.user_message().contains("500"));
        assert!(err.user_message().starts_with("Search failed: "));
    }

    #[test]
    fn test_kinds_are_distinct() {
        assert_eq!(SearchError::Transport("refused".into()).kind(), "transport");
        assert_eq!(SearchError::Protocol { status: 404 }.kind(), "protocol");
        assert_eq!(SearchError::Decode("eof".into()).kind(), "decode");
    }

    #[test]
    fn test_failure_has_no_items() {
        let outcome = SearchOutcome::Failure(SearchError::Protocol { status: 502 });
        assert!(!outcome.is_success());
        assert!(outcome.items().is_empty());
    }
}
