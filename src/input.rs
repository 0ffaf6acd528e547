//! Loading extracted declarations from disk.

use crate::decl::EntityAggregate;
use crate::error::Result;
use anyhow::Context;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Expands a leading tilde (`~`) to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &Path) -> Cow<'_, Path> {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.join(stripped));
    }
    Cow::Borrowed(path)
}

/// Reads the JSON declaration dump produced by the extraction step.
pub fn load_aggregate(path: &Path) -> Result<EntityAggregate> {
    let path: PathBuf = expand_tilde(path).into_owned();
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read declarations from {}", path.display()))?;
    let aggregate = parse_aggregate(&content)
        .with_context(|| format!("Failed to parse declarations in {}", path.display()))?;

    tracing::debug!(
        "Loaded {} functions, {} typedefs, {} structs, {} classes from {}",
        aggregate.functions().len(),
        aggregate.typedefs().len(),
        aggregate.structs().len(),
        aggregate.classes().len(),
        path.display()
    );

    Ok(aggregate)
}

/// Parses a JSON declaration dump held in memory.
pub fn parse_aggregate(json: &str) -> Result<EntityAggregate> {
    Ok(serde_json::from_str(json)?)
}
