use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a declaration was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLoc {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLoc {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// Compiler-diagnostic style `file:line:column:`.
impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_display_matches_diagnostic_prefix() {
        let loc = SourceLoc::new("src/net.c", 42, 7);
        check!(loc.to_string() == "src/net.c:42:7:");
    }
}
