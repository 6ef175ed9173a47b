//! Error types.
//!
//! Only genuine configuration problems are errors here. A module name
//! that matches no resolution strategy is *not* an error — it resolves
//! to [`Resolution::Unresolved`](crate::core::resolver::Resolution) and
//! is surfaced as a warning instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while populating the coordinate registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A mapping value was not `group:artifact[:version]` notation.
    #[error("invalid coordinates '{0}', expected 'group:artifact' or 'group:artifact:version'")]
    BadCoordinates(String),
}

/// Fatal resolution-setup errors: the build graph violated an invariant
/// the naming convention guarantees.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// More than one sibling project's dot-form name equals the derived
    /// module name suffix. Project names are unique, so this indicates a
    /// hyphen/dot collision in the catalog (e.g. `a-b` next to `a.b`).
    #[error("module '{module_name}' matches multiple projects exactly: {candidates:?}")]
    AmbiguousProjectMatch {
        module_name: String,
        candidates: Vec<String>,
    },
}

/// Errors while loading or driving a workspace manifest.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("failed to read manifest {path}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
