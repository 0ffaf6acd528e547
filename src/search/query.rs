//! Declaration categories a query can target.

use crate::error::SearchError;
use rapidfuzz::distance::jaro_winkler;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Which collection of an aggregate a query ranks. Normal forms are not
/// comparable across categories, so every query picks exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Functions,
    Typedefs,
    Structs,
    Classes,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Functions, Self::Typedefs, Self::Structs, Self::Classes];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Functions => "functions",
            Self::Typedefs => "typedefs",
            Self::Structs => "structs",
            Self::Classes => "classes",
        }
    }

    /// Section title used by the listing printer.
    pub const fn header(self) -> &'static str {
        match self {
            Self::Functions => "FUNCTIONS",
            Self::Typedefs => "TYPEDEFS",
            Self::Structs => "STRUCTS",
            Self::Classes => "CLASSES",
        }
    }

    fn from_alias(name: &str) -> Option<Self> {
        Some(match name {
            "functions" | "function" | "fn" | "f" => Self::Functions,
            "typedefs" | "typedef" | "t" => Self::Typedefs,
            "structs" | "struct" | "s" => Self::Structs,
            "classes" | "class" | "c" => Self::Classes,
            _ => return None,
        })
    }

    /// Closest category name to a misspelled input.
    fn suggest(input: &str) -> Option<&'static str> {
        Self::ALL
            .iter()
            .map(|category| {
                let name = category.as_str();
                (name, jaro_winkler::similarity(input.chars(), name.chars()))
            })
            .filter(|&(_, score)| score >= SUGGESTION_THRESHOLD)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(name, _)| name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::from_alias(&lowered).ok_or_else(|| SearchError::UnknownCategory {
            input: s.to_string(),
            suggestion: Self::suggest(&lowered),
        })
    }
}
