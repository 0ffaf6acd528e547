//! The capability shared by every declaration category.

use super::SourceLoc;
use std::borrow::Cow;

/// A declaration that can be scored against a query and reported back.
///
/// The ranking engine only ever talks to declarations through this trait, so
/// one generic code path serves functions, typedefs, structs and classes.
pub trait Declaration {
    /// Location of the declaration in its source file.
    fn source(&self) -> &SourceLoc;

    /// Structural string compared against the normalized query.
    ///
    /// Functions keep their full signature shape; types compare by name.
    fn normal_form(&self) -> Cow<'_, str>;

    /// Human-readable rendering. Never used for scoring.
    fn display_form(&self) -> String;

    /// Display form prefixed with the source location.
    fn full_display_form(&self) -> String {
        format!("{} {}", self.source(), self.display_form())
    }
}
