//! Declaration model: the records handed over by the extraction step.
//!
//! Every record implements [`Declaration`], which projects it into a
//! *normal form* (compared against queries) and a *display form* (shown to
//! the user). Records are assembled with [`AggregateBuilder`] and frozen into
//! an [`EntityAggregate`] before any ranking happens.

mod aggregate;
mod function;
mod location;
mod record;
mod traits;

pub use aggregate::{AggregateBuilder, ClassId, EntityAggregate, FunctionId, StructId};
pub use function::{Arg, Function};
pub use location::SourceLoc;
pub use record::{Attribute, Class, Struct, Typedef};
pub use traits::Declaration;
