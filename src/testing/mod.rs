//! Test support: recording implementations of the collaborator traits.

pub mod mocks;

pub use mocks::{DeclaredEdge, RecordingDeclarationSink, RecordingWarningSink};
