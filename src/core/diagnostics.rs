//! Warning policy: when an unresolved or partially-resolved mapping is
//! surfaced to the user.
//!
//! Two warning kinds exist. An external coordinate found without a
//! version produces a `Warning`-severity record, gated by the
//! `warn_for_missing_versions` flag and emitted at most once per
//! (module, group, artifact). A module name matching no strategy produces
//! an `Info`-severity record once per name, telling the user how to
//! register a manual mapping. Both are advisory: resolution always
//! completes, and whether an unresolved dependency fails a later build
//! phase is the consumer's decision.

use crate::core::resolver::Resolution;
use crate::traits::warnings::Warning;
use std::collections::HashSet;
use std::path::Path;

/// Deduplicating warning policy for one resolution run.
#[derive(Debug)]
pub struct WarningPolicy {
    warn_for_missing_versions: bool,
    seen_missing_versions: HashSet<(String, String, String)>,
    seen_unmapped: HashSet<String>,
}

impl WarningPolicy {
    /// `warn_for_missing_versions` defaults to true in the workspace
    /// settings; passing false silences missing-version records entirely.
    pub fn new(warn_for_missing_versions: bool) -> Self {
        Self {
            warn_for_missing_versions,
            seen_missing_versions: HashSet::new(),
            seen_unmapped: HashSet::new(),
        }
    }

    /// Inspect one resolution outcome and produce the warnings it
    /// warrants, applying gating and once-per-key deduplication.
    ///
    /// `descriptor_path` is the declaring descriptor's file, relativized
    /// against `build_root` for the message.
    pub fn report(
        &mut self,
        module_name: &str,
        resolution: &Resolution,
        descriptor_path: &Path,
        build_root: &Path,
    ) -> Vec<Warning> {
        match resolution {
            Resolution::External(coordinates) if coordinates.version.is_none() => {
                if !self.warn_for_missing_versions {
                    return Vec::new();
                }
                let key = (
                    module_name.to_string(),
                    coordinates.group.clone(),
                    coordinates.artifact.clone(),
                );
                if !self.seen_missing_versions.insert(key) {
                    return Vec::new();
                }
                vec![Warning::warning(format!(
                    "no version defined in catalog - {} - {}",
                    coordinates.ga(),
                    module_debug_info(module_name, descriptor_path, build_root),
                ))]
            }
            Resolution::Unresolved => {
                if !self.seen_unmapped.insert(module_name.to_string()) {
                    return Vec::new();
                }
                vec![Warning::info(format!(
                    "mapping for module '{module_name}' is missing; add \
                     mappings.\"{module_name}\" = \"group:artifact\" to the workspace manifest",
                ))]
            }
            _ => Vec::new(),
        }
    }
}

impl Default for WarningPolicy {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Render the module name with underscores for readability and point at
/// the declaring descriptor, relativized to the build root.
fn module_debug_info(module_name: &str, descriptor_path: &Path, build_root: &Path) -> String {
    let shown = descriptor_path
        .strip_prefix(build_root)
        .unwrap_or(descriptor_path);
    format!(
        "{} (required in {})",
        module_name.replace('.', "_"),
        shown.display()
    )
}
