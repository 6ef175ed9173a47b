//! Naming convention between build-system project names and JPMS module names.
//!
//! Project names use hyphen-separated tokens (`event-bus`), module names use
//! dot-separated tokens (`com.example.event.bus`). Source sets other than
//! `main` contribute their own trailing segment, so the `test-fixtures`
//! source set of project `event-bus` produces the module name suffix
//! `event.bus.test.fixtures`.

/// Name of the primary source set, which maps to the bare project name.
pub const MAIN_SOURCE_SET: &str = "main";

/// Compute the module name suffix a (project, source set) pair produces
/// by convention.
///
/// The `main` source set yields the dot-form of the project name; any other
/// source set appends its own name as additional segments.
pub fn source_set_to_module_name(project_name: &str, source_set_name: &str) -> String {
    if source_set_name == MAIN_SOURCE_SET {
        dotted(project_name)
    } else {
        dotted(&format!("{project_name}-{source_set_name}"))
    }
}

/// Convert a hyphen-separated project name to its dot-separated module form.
pub fn dotted(project_name: &str) -> String {
    project_name.replace('-', ".")
}

/// Convert a dot-separated module name fragment to its hyphen-separated form
/// (used when synthesizing capability names).
pub fn hyphenated(module_name: &str) -> String {
    module_name.replace('.', "-")
}
