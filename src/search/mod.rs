//! Fuzzy declaration search.
//!
//! Queries are lexed with C rules and joined into a normalized string, which
//! is compared against each declaration's normal form by Levenshtein distance.

// Module declarations
pub(crate) mod lexer;
pub(crate) mod query;
pub(crate) mod rank;
pub(crate) mod scoring;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use lexer::{Lexer, Token, TokenKind};
pub use query::Category;
pub use rank::{Score, best_match, rank, score_all};
pub use scoring::levenshtein;
pub use tokenize::{normalize, normalize_query, tokenize};
