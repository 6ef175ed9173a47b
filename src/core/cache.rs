//! Keyed memoization of parsed module descriptors.
//!
//! Descriptors are parsed once per (project, source set) pair and reused
//! for every directive processed during a build evaluation. Population is
//! lazy with at-most-once parsing per key: the map lock is held across
//! the parse, which is acceptable because parsing is a short, local
//! computation during the configuration phase. Entries are never
//! replaced, so a handed-out `Arc<ModuleInfo>` stays valid for the life
//! of the cache.

use crate::core::module_info::ModuleInfo;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Identity of one source variant: the (project, source set) pair that
/// owns a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey {
    pub project: String,
    pub source_set: String,
}

impl VariantKey {
    pub fn new(project: impl Into<String>, source_set: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            source_set: source_set.into(),
        }
    }
}

/// Hit/miss counters for observability.
#[derive(Debug, Default, Clone, Copy)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<VariantKey, Arc<ModuleInfo>>,
    stats: CacheStats,
}

/// Cache of parsed [`ModuleInfo`] keyed by variant identity.
#[derive(Debug, Default)]
pub struct ModuleInfoCache {
    inner: Mutex<Inner>,
}

impl ModuleInfoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the descriptor for a variant, parsing the file on first access.
    /// A missing descriptor file yields an empty `ModuleInfo`, cached like
    /// any other entry.
    pub fn get_or_parse(&self, key: &VariantKey, descriptor_path: &Path) -> Arc<ModuleInfo> {
        let mut inner = self.inner.lock();
        if let Some(info) = inner.entries.get(key) {
            let info = Arc::clone(info);
            inner.stats.hits += 1;
            return info;
        }
        inner.stats.misses += 1;
        let info = Arc::new(ModuleInfo::from_file(descriptor_path));
        inner.entries.insert(key.clone(), Arc::clone(&info));
        info
    }

    /// Insert a pre-built descriptor (used by analysis-only callers and
    /// tests). A later `get_or_parse` for the same key returns this entry
    /// without touching the filesystem; an existing entry is kept.
    pub fn put(&self, key: VariantKey, info: ModuleInfo) -> Arc<ModuleInfo> {
        let mut inner = self.inner.lock();
        let entry = inner
            .entries
            .entry(key)
            .or_insert_with(|| Arc::new(info));
        Arc::clone(entry)
    }

    /// Snapshot of hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats
    }

    /// Number of cached variants.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }
}
