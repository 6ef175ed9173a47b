//! Declaration sink seam.
//!
//! The engine produces [`Resolution`] values; persisting them as build
//! dependency edges is the consumer's job behind this trait. The
//! originating module name travels with every declaration so the created
//! edge can be tagged for later inspection.

use crate::core::resolver::Resolution;

/// Consumer of resolution results: creates dependency edges in the build
/// graph (or records them, or ignores them — the engine does not care).
pub trait DeclarationSink {
    /// Persist one resolved dependency.
    ///
    /// `scope` is the dependency scope the directive kind maps to
    /// (`implementation`, `api`, ...); `because_module` is the module
    /// name as written in the descriptor. Platform-supplied and
    /// unresolved outcomes are *not* passed here — no edge exists for
    /// them.
    fn declare(&mut self, scope: &str, resolution: &Resolution, because_module: &str);
}
