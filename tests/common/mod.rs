//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `geometry`: the declarations of `tests/fixtures/geometry.json`, a small
//!   C++ header with functions, typedefs, structs and classes
//! - `workspace`: an empty [`TempWorkspace`] holding a copy of that fixture
//!   and an empty config file, for tests that drive the binary

use declgrep::EntityAggregate;
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns the project root directory (where Cargo.toml lives).
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn geometry_path() -> PathBuf {
    project_root().join("tests/fixtures/geometry.json")
}

#[fixture]
#[allow(dead_code)] // Used by search_test only
pub fn geometry() -> EntityAggregate {
    declgrep::input::load_aggregate(&geometry_path()).expect("geometry fixture should load")
}

/// A temporary directory for test isolation, removed on drop.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content, returning its full path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }

    pub fn decls(&self) -> PathBuf {
        self.root.join("geometry.json")
    }

    pub fn config(&self) -> PathBuf {
        self.root.join("config.toml")
    }
}

#[fixture]
#[allow(dead_code)] // Used by cli_test only
pub fn workspace() -> TempWorkspace {
    let workspace = TempWorkspace::new();
    std::fs::copy(geometry_path(), workspace.decls()).expect("Failed to copy fixture");
    workspace.create_file("config.toml", "");
    workspace
}
