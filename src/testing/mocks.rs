//! Recording sinks for testing without a real build graph or logger.

use crate::core::resolver::Resolution;
use crate::traits::{DeclarationSink, Warning, WarningSink};

/// One recorded dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredEdge {
    pub scope: String,
    pub resolution: Resolution,
    pub because_module: String,
}

/// Records every declaration for later assertions.
#[derive(Debug, Default)]
pub struct RecordingDeclarationSink {
    pub edges: Vec<DeclaredEdge>,
}

impl RecordingDeclarationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edges declared under the given scope.
    pub fn in_scope(&self, scope: &str) -> Vec<&DeclaredEdge> {
        self.edges.iter().filter(|e| e.scope == scope).collect()
    }

    /// The edge tagged with the given module name, if declared.
    pub fn for_module(&self, module_name: &str) -> Option<&DeclaredEdge> {
        self.edges.iter().find(|e| e.because_module == module_name)
    }
}

impl DeclarationSink for RecordingDeclarationSink {
    fn declare(&mut self, scope: &str, resolution: &Resolution, because_module: &str) {
        self.edges.push(DeclaredEdge {
            scope: scope.to_string(),
            resolution: resolution.clone(),
            because_module: because_module.to_string(),
        });
    }
}

/// Records every warning for later assertions.
#[derive(Debug, Default)]
pub struct RecordingWarningSink {
    pub warnings: Vec<Warning>,
}

impl RecordingWarningSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|w| w.message.as_str()).collect()
    }
}

impl WarningSink for RecordingWarningSink {
    fn emit(&mut self, warning: &Warning) {
        self.warnings.push(warning.clone());
    }
}
