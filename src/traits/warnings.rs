//! Warning records and the sink seam for surfacing them.
//!
//! The engine fixes only the triggering conditions and content of
//! warnings; how they are rendered (log lines, collected reports) is the
//! consumer's choice behind [`WarningSink`].

use std::fmt;

/// Severity of an advisory warning. Warnings never abort resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Should be addressed (e.g. a coordinate without a version).
    Warning,
    /// Informational (e.g. an unmapped module name and how to map it).
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// One advisory warning produced during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub severity: Severity,
    pub message: String,
}

impl Warning {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }
}

/// Consumer of warning records.
pub trait WarningSink {
    fn emit(&mut self, warning: &Warning);
}
