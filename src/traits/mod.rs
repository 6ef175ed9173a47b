//! Trait seams decoupling the resolution core from its collaborators.
//!
//! The build-system side (declaring dependency edges) and the logging
//! side (rendering warnings) both sit behind traits so the engine can be
//! driven by the real binary, by tests, or by an embedding build tool
//! without changes.

pub mod sink;
pub mod warnings;

pub use sink::DeclarationSink;
pub use warnings::{Severity, Warning, WarningSink};
