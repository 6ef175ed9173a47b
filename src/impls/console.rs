//! Default collaborator implementations used by the binary.

use crate::core::resolver::Resolution;
use crate::traits::{DeclarationSink, Severity, Warning, WarningSink};

/// Prints declared dependency edges to stdout, one line per edge, in a
/// form close to build-script dependency notation.
#[derive(Debug, Default)]
pub struct ConsoleDeclarationSink {
    declared: usize,
}

impl ConsoleDeclarationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges declared so far.
    pub fn declared(&self) -> usize {
        self.declared
    }
}

impl DeclarationSink for ConsoleDeclarationSink {
    fn declare(&mut self, scope: &str, resolution: &Resolution, because_module: &str) {
        match resolution {
            Resolution::Project { path, .. } => {
                println!("{scope} project(\"{path}\")  // {because_module}");
            }
            Resolution::ProjectWithCapability {
                path, capability, ..
            } => {
                println!(
                    "{scope} project(\"{path}\") capability \"{capability}\"  // {because_module}"
                );
            }
            Resolution::External(coordinates) => {
                println!("{scope} \"{coordinates}\"  // {because_module}");
            }
            // no edge exists for these; drivers do not pass them in
            Resolution::PlatformSupplied | Resolution::Unresolved => return,
        }
        self.declared += 1;
    }
}

/// Routes warnings to `tracing` at the matching level.
#[derive(Debug, Default)]
pub struct TracingWarningSink;

impl WarningSink for TracingWarningSink {
    fn emit(&mut self, warning: &Warning) {
        match warning.severity {
            Severity::Warning => tracing::warn!("{}", warning.message),
            Severity::Info => tracing::info!("{}", warning.message),
        }
    }
}
