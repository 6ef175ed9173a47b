//! The module-name resolution engine.
//!
//! Given one required module name and the requesting module's own name
//! prefix, the engine selects exactly one resolution strategy, in strict
//! precedence order:
//!
//! 1. platform module (no dependency needed)
//! 2. exact project match on the derived name suffix
//! 3. longest-prefix project match (capability-qualified)
//! 4. external coordinate lookup in the registry
//! 5. unresolved
//!
//! The strategies are mutually exclusive by construction; the first match
//! wins and no further strategy is attempted. Resolution is a pure
//! computation over read-only inputs — warnings for the external and
//! unresolved outcomes are decided separately by
//! [`WarningPolicy`](crate::core::diagnostics::WarningPolicy).

use crate::core::naming::{dotted, hyphenated};
use crate::core::registry::{CoordinateRegistry, Coordinates};
use crate::error::ResolveError;
use std::collections::BTreeMap;

/// All sibling build units visible to the engine: project name → group,
/// plus the parent path of the requesting project (empty for root-level
/// projects). Read-only to the engine.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: BTreeMap<String, String>,
    parent_path: String,
}

impl ProjectCatalog {
    pub fn new(parent_path: impl Into<String>) -> Self {
        Self {
            projects: BTreeMap::new(),
            parent_path: parent_path.into(),
        }
    }

    /// Register a sibling project and its coordinate group.
    pub fn insert(&mut self, project_name: impl Into<String>, group: impl Into<String>) {
        self.projects.insert(project_name.into(), group.into());
    }

    pub fn group_of(&self, project_name: &str) -> Option<&str> {
        self.projects.get(project_name).map(String::as_str)
    }

    /// The build-graph path of a project under this catalog's parent.
    pub fn path_of(&self, project_name: &str) -> String {
        format!("{}:{project_name}", self.parent_path)
    }

    fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.projects
            .iter()
            .map(|(name, group)| (name.as_str(), group.as_str()))
    }
}

/// The outcome of resolving one required module name.
///
/// A tagged variant per strategy gives the declaration sink an
/// exhaustive-match surface; the sink receives the originating module
/// name alongside, so every created edge stays traceable to its
/// directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Supplied by the platform; no dependency edge is created.
    PlatformSupplied,
    /// Another project in the same build.
    Project { path: String, name: String },
    /// Another project, selected through one of its capabilities
    /// (a project exposing several modules from different source sets).
    ProjectWithCapability {
        path: String,
        name: String,
        capability: String,
    },
    /// An external artifact. A missing version is tolerated here and
    /// surfaced through the warning policy.
    External(Coordinates),
    /// No strategy matched. Not an error: the consumer decides whether a
    /// later build phase fails.
    Unresolved,
}

/// Resolves required module names against a project catalog and a
/// coordinate registry. Stateless apart from its borrowed inputs; safe to
/// invoke repeatedly and independently per directive instance.
#[derive(Debug)]
pub struct ResolutionEngine<'a> {
    registry: &'a CoordinateRegistry,
}

impl<'a> ResolutionEngine<'a> {
    pub fn new(registry: &'a CoordinateRegistry) -> Self {
        Self { registry }
    }

    /// Resolve one required module name.
    ///
    /// `own_prefix` is the requesting module's name prefix: `None` when it
    /// could not be derived (project matching is skipped entirely), empty
    /// when the requester is a root module (the full name is used as the
    /// suffix).
    ///
    /// Longest-prefix ties of equal length are broken by picking the
    /// lexicographically smallest project name, so resolution is
    /// deterministic regardless of catalog iteration order.
    ///
    /// Errors only on a broken catalog invariant (two projects matching
    /// the same suffix exactly); "no match" is the `Unresolved` variant.
    pub fn resolve(
        &self,
        module_name: &str,
        own_prefix: Option<&str>,
        catalog: &ProjectCatalog,
    ) -> Result<Resolution, ResolveError> {
        if self.registry.is_platform_module(module_name) {
            return Ok(Resolution::PlatformSupplied);
        }

        let suffix = derive_suffix(module_name, own_prefix);

        if let Some(suffix) = suffix.as_deref() {
            // A project matches exactly when its dot-form name equals the
            // suffix, or when its group-qualified conventional module name
            // does (root modules require siblings by their full name).
            let exact: Vec<&str> = catalog
                .entries()
                .filter(|(name, group)| {
                    let dot_form = dotted(name);
                    dot_form == suffix || format!("{group}.{dot_form}") == suffix
                })
                .map(|(name, _)| name)
                .collect();
            match exact.as_slice() {
                [] => {}
                [project] => {
                    return Ok(Resolution::Project {
                        path: catalog.path_of(project),
                        name: (*project).to_string(),
                    });
                }
                many => {
                    return Err(ResolveError::AmbiguousProjectMatch {
                        module_name: module_name.to_string(),
                        candidates: many.iter().map(|p| p.to_string()).collect(),
                    });
                }
            }

            // A project can own a namespace that is itself a prefix of a
            // sibling's namespace; the longest match attributes a nested
            // module to its closest owner.
            let owner = catalog
                .entries()
                .map(|(name, _)| name)
                .filter(|p| suffix.starts_with(&format!("{}.", dotted(p))))
                .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| b.cmp(a)));

            if let Some(project) = owner {
                let remainder = &suffix[dotted(project).len() + 1..];
                // group is present for every catalog entry by construction
                let group = catalog.group_of(project).unwrap_or_default();
                return Ok(Resolution::ProjectWithCapability {
                    path: catalog.path_of(project),
                    name: project.to_string(),
                    capability: format!("{group}:{}", hyphenated(remainder)),
                });
            }
        }

        if let Some(coordinates) = self.registry.lookup(module_name) {
            return Ok(Resolution::External(coordinates.clone()));
        }

        Ok(Resolution::Unresolved)
    }
}

/// Derive the module name suffix relative to the requester's own prefix.
///
/// `None` means project matching does not apply: either the prefix itself
/// is unknown, or the required name does not extend it.
fn derive_suffix(module_name: &str, own_prefix: Option<&str>) -> Option<String> {
    let prefix = own_prefix?;
    if let Some(rest) = module_name.strip_prefix(&format!("{prefix}.")) {
        if !prefix.is_empty() {
            return Some(rest.to_string());
        }
    }
    if prefix.is_empty() {
        return Some(module_name.to_string());
    }
    None
}
