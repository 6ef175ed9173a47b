//! Workspace manifest and the driver that feeds the resolution engine.
//!
//! A TOML manifest describes the multi-module build: the sibling projects
//! with their groups and source sets, manual module-name mappings, and
//! the resolution settings. The driver walks every (project, source set)
//! variant, pulls the parsed descriptor from the cache, resolves each
//! `requires` directive and hands the outcome to the declaration sink —
//! the stand-in for the build system that would persist real dependency
//! edges.

use crate::core::cache::{ModuleInfoCache, VariantKey};
use crate::core::diagnostics::WarningPolicy;
use crate::core::module_info::Directive;
use crate::core::registry::MappingsBuilder;
use crate::core::resolver::{ProjectCatalog, Resolution, ResolutionEngine};
use crate::error::WorkspaceError;
use crate::traits::{DeclarationSink, WarningSink};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn default_true() -> bool {
    true
}

/// Resolution settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Gate for missing-version warnings.
    #[serde(default = "default_true")]
    pub warn_for_missing_versions: bool,

    /// When true, descriptors are still parsed and cached but no
    /// resolution or declaration happens (pure analysis scenarios).
    #[serde(default)]
    pub analyse_only: bool,

    /// Build-graph path of the parent of all listed projects
    /// (empty for root-level projects).
    #[serde(default)]
    pub parent_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            warn_for_missing_versions: true,
            analyse_only: false,
            parent_path: String::new(),
        }
    }
}

/// One source set of a project.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSetDecl {
    pub name: String,
    /// Descriptor path relative to the workspace root. When omitted the
    /// conventional `<project>/src/<source set>/java/module-info.java`
    /// location is used.
    #[serde(default)]
    pub module_info: Option<String>,
}

fn default_source_sets() -> Vec<SourceSetDecl> {
    vec![SourceSetDecl {
        name: "main".to_string(),
        module_info: None,
    }]
}

/// One sibling build unit.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDecl {
    pub name: String,
    pub group: String,
    #[serde(default = "default_source_sets")]
    pub source_sets: Vec<SourceSetDecl>,
}

/// The parsed workspace manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default, rename = "project")]
    pub projects: Vec<ProjectDecl>,
    /// Manual module name → `group:artifact[:version]` mappings.
    #[serde(default)]
    pub mappings: BTreeMap<String, String>,
}

/// Counters from one driver run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Dependency edges handed to the sink.
    pub declared: usize,
    /// Directives satisfied by the platform (no edge).
    pub platform: usize,
    /// Directives no strategy matched (no edge, warned).
    pub unresolved: usize,
}

/// A loaded workspace: manifest plus the per-variant descriptor cache.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    manifest: Manifest,
    cache: ModuleInfoCache,
}

impl Workspace {
    /// Load a manifest file; the workspace root is the manifest's parent
    /// directory.
    pub fn load(manifest_path: &Path) -> Result<Self, WorkspaceError> {
        let text =
            std::fs::read_to_string(manifest_path).map_err(|source| WorkspaceError::ManifestRead {
                path: manifest_path.to_path_buf(),
                source,
            })?;
        let manifest: Manifest =
            toml::from_str(&text).map_err(|source| WorkspaceError::ManifestParse {
                path: manifest_path.to_path_buf(),
                source,
            })?;
        let root = manifest_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        Ok(Self::with_root(manifest, root))
    }

    /// Build a workspace from an already-parsed manifest.
    pub fn with_root(manifest: Manifest, root: PathBuf) -> Self {
        Self {
            root,
            manifest,
            cache: ModuleInfoCache::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    fn descriptor_path(&self, project: &ProjectDecl, source_set: &SourceSetDecl) -> PathBuf {
        match &source_set.module_info {
            Some(relative) => self.root.join(relative),
            None => self
                .root
                .join(&project.name)
                .join("src")
                .join(&source_set.name)
                .join("java")
                .join("module-info.java"),
        }
    }

    /// Resolve every directive of every variant and feed the sinks.
    ///
    /// Registry population happens up front from the manifest mappings;
    /// the registry is immutable once resolution starts. With
    /// `analyse_only` set, nothing is resolved or declared.
    pub fn declare_all(
        &self,
        sink: &mut dyn DeclarationSink,
        warnings: &mut dyn WarningSink,
    ) -> Result<RunSummary, WorkspaceError> {
        let mut summary = RunSummary::default();
        if self.manifest.settings.analyse_only {
            tracing::debug!("analyse_only is set; skipping dependency declaration");
            return Ok(summary);
        }

        let mut builder = MappingsBuilder::new();
        builder.add_source(
            "workspace manifest",
            self.manifest
                .mappings
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        )?;
        let registry = builder.build();
        let engine = ResolutionEngine::new(&registry);

        let mut catalog = ProjectCatalog::new(self.manifest.settings.parent_path.clone());
        for project in &self.manifest.projects {
            catalog.insert(&project.name, &project.group);
        }

        let mut policy = WarningPolicy::new(self.manifest.settings.warn_for_missing_versions);

        for project in &self.manifest.projects {
            for source_set in &project.source_sets {
                let descriptor = self.descriptor_path(project, source_set);
                let key = VariantKey::new(&project.name, &source_set.name);
                let info = self.cache.get_or_parse(&key, &descriptor);
                let prefix = info.module_name_prefix(&project.name, &source_set.name);

                for directive in Directive::ALL {
                    for module_name in info.get(directive) {
                        let resolution =
                            engine.resolve(module_name, prefix.as_deref(), &catalog)?;
                        for warning in
                            policy.report(module_name, &resolution, info.file_path(), &self.root)
                        {
                            warnings.emit(&warning);
                        }
                        match &resolution {
                            Resolution::PlatformSupplied => summary.platform += 1,
                            Resolution::Unresolved => summary.unresolved += 1,
                            _ => {
                                sink.declare(directive.scope(), &resolution, module_name);
                                summary.declared += 1;
                            }
                        }
                    }
                }
            }
        }

        tracing::info!(
            declared = summary.declared,
            platform = summary.platform,
            unresolved = summary.unresolved,
            "dependency declaration finished"
        );
        Ok(summary)
    }
}
