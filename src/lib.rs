pub mod cli;
pub mod config;
pub mod decl;
pub mod error;
pub mod format;
pub mod input;
pub mod search;
pub mod tracing;

pub use decl::{
    AggregateBuilder, Arg, Attribute, Class, ClassId, Declaration, EntityAggregate, Function,
    FunctionId, SourceLoc, Struct, StructId, Typedef,
};
pub use error::SearchError;
pub use search::{Category, Score, levenshtein, normalize, normalize_query, tokenize};
