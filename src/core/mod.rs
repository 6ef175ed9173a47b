//! Core model, registry, engine and warning policy.

pub mod cache;
pub mod diagnostics;
pub mod module_info;
pub mod naming;
pub mod registry;
pub mod resolver;

pub use cache::{ModuleInfoCache, VariantKey};
pub use diagnostics::WarningPolicy;
pub use module_info::{Directive, ModuleInfo};
pub use registry::{CoordinateRegistry, Coordinates, MappingsBuilder};
pub use resolver::{ProjectCatalog, Resolution, ResolutionEngine};
