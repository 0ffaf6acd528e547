//! Error handling types and utilities.

use crate::search::Category;

/// A specialized Result type for declgrep application code.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods around file and config handling.
pub type Result<T> = anyhow::Result<T>;

/// Failures of the search core itself. All of them are local and pure: no
/// I/O happens behind these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The selected category holds no declarations.
    #[error("no {category} to search in this file")]
    EmptyCandidateSet { category: Category },

    /// A category selector outside the four known categories.
    #[error("unknown declaration category '{input}'{}", did_you_mean(.suggestion))]
    UnknownCategory {
        input: String,
        suggestion: Option<&'static str>,
    },

    /// A result count of zero.
    #[error("result limit must be at least 1")]
    InvalidLimit,
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
    suggestion
        .map(|name| format!(" (did you mean '{}'?)", name))
        .unwrap_or_default()
}
