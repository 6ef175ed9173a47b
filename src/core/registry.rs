//! Module name ↔ external coordinate registry.
//!
//! Mappings are contributed additively from multiple named sources during
//! the setup phase (manifest declarations, bridged registrations from
//! other tooling) and then frozen: [`MappingsBuilder`] collects entries,
//! [`MappingsBuilder::build`] produces the immutable [`CoordinateRegistry`]
//! used during resolution. Duplicate entries are tolerated by a
//! first-entry-wins presence check, never overwritten, so contribution
//! order between sources must not matter for keys they do not share.

use crate::error::RegistryError;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// External group/artifact/version coordinates for a module name.
///
/// The version is optional: catalog-less setups declare only
/// `group:artifact` and let a platform or catalog supply the version,
/// which resolution surfaces as a missing-version warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub group: String,
    pub artifact: String,
    pub version: Option<String>,
}

impl Coordinates {
    /// Parse `group:artifact` or `group:artifact:version` notation.
    pub fn parse(notation: &str) -> Result<Self, RegistryError> {
        let parts: Vec<&str> = notation.split(':').collect();
        match parts.as_slice() {
            [group, artifact] if !group.is_empty() && !artifact.is_empty() => Ok(Self {
                group: group.to_string(),
                artifact: artifact.to_string(),
                version: None,
            }),
            [group, artifact, version]
                if !group.is_empty() && !artifact.is_empty() && !version.is_empty() =>
            {
                Ok(Self {
                    group: group.to_string(),
                    artifact: artifact.to_string(),
                    version: Some(version.to_string()),
                })
            }
            _ => Err(RegistryError::BadCoordinates(notation.to_string())),
        }
    }

    /// `group:artifact` without the version.
    pub fn ga(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}:{}:{v}", self.group, self.artifact),
            None => write!(f, "{}:{}", self.group, self.artifact),
        }
    }
}

/// Module names supplied by the Java platform itself. Requiring one of
/// these never produces a dependency declaration.
static PLATFORM_MODULES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "java.base",
        "java.compiler",
        "java.datatransfer",
        "java.desktop",
        "java.instrument",
        "java.logging",
        "java.management",
        "java.management.rmi",
        "java.naming",
        "java.net.http",
        "java.prefs",
        "java.rmi",
        "java.scripting",
        "java.se",
        "java.security.jgss",
        "java.security.sasl",
        "java.smartcardio",
        "java.sql",
        "java.sql.rowset",
        "java.transaction.xa",
        "java.xml",
        "java.xml.crypto",
        "jdk.accessibility",
        "jdk.attach",
        "jdk.charsets",
        "jdk.compiler",
        "jdk.crypto.cryptoki",
        "jdk.crypto.ec",
        "jdk.dynalink",
        "jdk.editpad",
        "jdk.hotspot.agent",
        "jdk.httpserver",
        "jdk.incubator.vector",
        "jdk.jartool",
        "jdk.javadoc",
        "jdk.jcmd",
        "jdk.jconsole",
        "jdk.jdeps",
        "jdk.jdi",
        "jdk.jdwp.agent",
        "jdk.jfr",
        "jdk.jlink",
        "jdk.jpackage",
        "jdk.jshell",
        "jdk.jsobject",
        "jdk.jstatd",
        "jdk.localedata",
        "jdk.management",
        "jdk.management.agent",
        "jdk.management.jfr",
        "jdk.naming.dns",
        "jdk.naming.rmi",
        "jdk.net",
        "jdk.nio.mapmode",
        "jdk.sctp",
        "jdk.security.auth",
        "jdk.security.jgss",
        "jdk.unsupported",
        "jdk.unsupported.desktop",
        "jdk.xml.dom",
        "jdk.zipfs",
    ]
    .into_iter()
    .collect()
});

/// Well-known module name → coordinates defaults, merged in at the lowest
/// precedence so user declarations always win the presence check.
const DEFAULT_MAPPINGS: &[(&str, &str)] = &[
    ("com.fasterxml.jackson.annotation", "com.fasterxml.jackson.core:jackson-annotations"),
    ("com.fasterxml.jackson.core", "com.fasterxml.jackson.core:jackson-core"),
    ("com.fasterxml.jackson.databind", "com.fasterxml.jackson.core:jackson-databind"),
    ("com.google.common", "com.google.guava:guava"),
    ("com.google.gson", "com.google.code.gson:gson"),
    ("jakarta.annotation", "jakarta.annotation:jakarta.annotation-api"),
    ("jakarta.inject", "jakarta.inject:jakarta.inject-api"),
    ("org.apache.commons.io", "commons-io:commons-io"),
    ("org.apache.commons.lang3", "org.apache.commons:commons-lang3"),
    ("org.apache.logging.log4j", "org.apache.logging.log4j:log4j-api"),
    ("org.apache.logging.log4j.core", "org.apache.logging.log4j:log4j-core"),
    ("org.apiguardian.api", "org.apiguardian:apiguardian-api"),
    ("org.assertj.core", "org.assertj:assertj-core"),
    ("org.jetbrains.annotations", "org.jetbrains:annotations"),
    ("org.junit.jupiter.api", "org.junit.jupiter:junit-jupiter-api"),
    ("org.junit.jupiter.engine", "org.junit.jupiter:junit-jupiter-engine"),
    ("org.junit.jupiter.params", "org.junit.jupiter:junit-jupiter-params"),
    ("org.junit.platform.commons", "org.junit.platform:junit-platform-commons"),
    ("org.junit.platform.engine", "org.junit.platform:junit-platform-engine"),
    ("org.junit.platform.launcher", "org.junit.platform:junit-platform-launcher"),
    ("org.mockito", "org.mockito:mockito-core"),
    ("org.opentest4j", "org.opentest4j:opentest4j"),
    ("org.slf4j", "org.slf4j:slf4j-api"),
    ("org.slf4j.simple", "org.slf4j:slf4j-simple"),
    ("org.yaml.snakeyaml", "org.yaml:snakeyaml"),
];

/// Accumulates module-name → coordinate mappings from named sources.
#[derive(Debug, Default)]
pub struct MappingsBuilder {
    mappings: HashMap<String, Coordinates>,
}

impl MappingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one mapping. The first registration for a module name wins;
    /// later duplicates are ignored (sources merge additively).
    pub fn add(&mut self, module_name: &str, coordinates: Coordinates) {
        self.mappings
            .entry(module_name.to_string())
            .or_insert(coordinates);
    }

    /// Register every mapping from one named source, parsing
    /// `group:artifact[:version]` notation. The source name only appears
    /// in error and trace output.
    pub fn add_source<'a>(
        &mut self,
        source: &str,
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<(), RegistryError> {
        for (module_name, notation) in entries {
            let coordinates = Coordinates::parse(notation).map_err(|e| {
                tracing::error!("bad mapping for '{module_name}' from source '{source}'");
                e
            })?;
            self.add(module_name, coordinates);
        }
        tracing::debug!("merged mappings from source '{source}'");
        Ok(())
    }

    /// Freeze into an immutable registry. Built-in defaults for well-known
    /// modules are merged last, so every explicit registration wins.
    pub fn build(mut self) -> CoordinateRegistry {
        for (module_name, notation) in DEFAULT_MAPPINGS {
            // Coordinates in DEFAULT_MAPPINGS are well-formed by construction.
            if let Ok(coordinates) = Coordinates::parse(notation) {
                self.add(module_name, coordinates);
            }
        }
        CoordinateRegistry {
            mappings: self.mappings,
        }
    }
}

/// Immutable module-name → coordinates lookup, plus the fixed platform
/// module set. Read-only for the lifetime of resolution.
#[derive(Debug)]
pub struct CoordinateRegistry {
    mappings: HashMap<String, Coordinates>,
}

impl CoordinateRegistry {
    /// Look up external coordinates for a module name. Absence is not an
    /// error; it means "no external coordinate known".
    pub fn lookup(&self, module_name: &str) -> Option<&Coordinates> {
        self.mappings.get(module_name)
    }

    /// Whether the module is supplied by the platform and therefore never
    /// needs a declared dependency.
    pub fn is_platform_module(&self, module_name: &str) -> bool {
        PLATFORM_MODULES.contains(module_name)
    }

    /// Number of known mappings (including built-in defaults).
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
