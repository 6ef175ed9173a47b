//! Derives build dependency declarations from the `requires` directives
//! of JPMS `module-info.java` descriptors.
//!
//! For each required module name the [`ResolutionEngine`] decides, in
//! strict precedence order, whether the module is supplied by the
//! platform, produced by a sibling project (directly or through a
//! capability), mapped to external coordinates, or unresolved. The
//! [`workspace`] driver wires descriptors, catalog and registry together
//! and feeds the results to a [`traits::DeclarationSink`].

pub mod core;
pub mod error;
pub mod impls;
pub mod testing;
pub mod traits;
pub mod workspace;

pub use crate::core::{
    CoordinateRegistry, Coordinates, Directive, MappingsBuilder, ModuleInfo, ModuleInfoCache,
    ProjectCatalog, Resolution, ResolutionEngine, VariantKey, WarningPolicy,
};
pub use crate::error::{RegistryError, ResolveError, WorkspaceError};
pub use crate::traits::{DeclarationSink, Severity, Warning, WarningSink};
pub use crate::workspace::{Manifest, RunSummary, Workspace};
