// Explicit name -> file path mapping for the build's resolved reference set

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Authoritative mapping from reference name to module file path, supplied
/// once at resolver construction.
///
/// Lookup is exact on the supplied key casing. Value iteration order is the
/// first-insertion order of names; that order fixes the directory-search
/// order, so it must stay deterministic.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDictionary {
    by_name: HashMap<String, PathBuf>,
    ordered_names: Vec<String>,
}

impl ReferenceDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, N, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<PathBuf>,
    {
        let mut dictionary = Self::new();
        for (name, path) in pairs {
            dictionary.insert(name, path);
        }
        dictionary
    }

    /// Map `name` to `path`. A re-supplied name takes over the new path but
    /// keeps its original position in the value order.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        let name = name.into();
        if self.by_name.insert(name.clone(), path.into()).is_none() {
            self.ordered_names.push(name);
        }
    }

    /// Exact, case-sensitive-as-supplied key match. Absence is the expected
    /// fall-through to directory search, not a failure.
    pub fn lookup(&self, name: &str) -> Option<&Path> {
        self.by_name.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ordered_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_names.is_empty()
    }

    /// Mapped paths, in first-insertion order of their names.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.by_name.get(name))
            .map(PathBuf::as_path)
    }

    /// Distinct parent directories of the mapped paths, in value order,
    /// deduplicated by literal path equality only.
    pub fn search_directories(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut directories = Vec::new();
        for path in self.paths() {
            let Some(parent) = path.parent() else {
                continue;
            };
            if seen.insert(parent.to_path_buf()) {
                directories.push(parent.to_path_buf());
            }
        }
        directories
    }
}
