//! Concrete implementations of the collaborator traits.

pub mod console;

pub use console::{ConsoleDeclarationSink, TracingWarningSink};
