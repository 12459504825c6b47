// Reference resolver - main resolution entry point
// Dictionary lookup first, directory search second; every path that reaches
// a file is loaded through the module store

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use weft_module::{
    ModuleDef, ModuleLoadError, ModuleReader, ModuleReference, ModuleResolver, ReadOptions,
};

use crate::diagnostics::{unresolved_message, DiagnosticSink, LogSink};
use crate::dictionary::ReferenceDictionary;
use crate::search::{candidate_paths, select_candidate};
use crate::store::ModuleStore;

/// Resolves module references against the build's resolved reference set.
///
/// Owns the module store for its whole lifetime. The set of search
/// directories is derived from the dictionary's values once, here, and
/// never changes afterward. Dropping the resolver (or calling
/// [`dispose`](Self::dispose)) releases every cached module's backing.
pub struct ReferenceResolver {
    dictionary: ReferenceDictionary,
    search_dirs: Vec<PathBuf>,
    display_references: Vec<String>,
    sink: Box<dyn DiagnosticSink>,
    store: ModuleStore,
}

impl ReferenceResolver {
    pub fn new(
        dictionary: ReferenceDictionary,
        display_references: Vec<String>,
        reader: Box<dyn ModuleReader>,
        sink: Box<dyn DiagnosticSink>,
    ) -> Self {
        let search_dirs = dictionary.search_directories();
        Self {
            dictionary,
            search_dirs,
            display_references,
            sink,
            store: ModuleStore::new(reader),
        }
    }

    /// Construct with the default log-forwarding sink.
    pub fn with_log_sink(
        dictionary: ReferenceDictionary,
        display_references: Vec<String>,
        reader: Box<dyn ModuleReader>,
    ) -> Self {
        Self::new(dictionary, display_references, reader, Box::new(LogSink))
    }

    /// Build the dictionary by probing each reference file for the name it
    /// reports for itself. A later file re-declaring a name takes over the
    /// mapping but keeps the first declaration's search position.
    pub fn from_reference_paths(
        paths: Vec<PathBuf>,
        reader: Box<dyn ModuleReader>,
        sink: Box<dyn DiagnosticSink>,
    ) -> Result<Self> {
        let mut dictionary = ReferenceDictionary::new();
        let mut display_references = Vec::with_capacity(paths.len());
        for path in paths {
            let identity = reader
                .probe(&path)
                .with_context(|| format!("Failed to probe reference '{}'", path.display()))?;
            display_references.push(path.display().to_string());
            dictionary.insert(identity.name, path);
        }
        Ok(Self::new(dictionary, display_references, reader, sink))
    }

    /// Resolve with the baseline empty options.
    pub fn resolve(
        &self,
        reference: &ModuleReference,
    ) -> Result<Option<Rc<ModuleDef>>, ModuleLoadError> {
        self.resolve_with(reference, &ReadOptions::default())
    }

    /// Resolve a reference: dictionary lookup, then directory search.
    ///
    /// The dictionary is authoritative: a hit is loaded even when the
    /// mapped file's version differs from the request, and a load failure
    /// there propagates instead of falling back to the search. A miss on
    /// both paths returns `Ok(None)`; the caller decides whether an
    /// unresolved reference aborts the run.
    pub fn resolve_with(
        &self,
        reference: &ModuleReference,
        options: &ReadOptions,
    ) -> Result<Option<Rc<ModuleDef>>, ModuleLoadError> {
        if let Some(path) = self.dictionary.lookup(&reference.name) {
            return self.fetch(path, options).map(Some);
        }
        self.search_known_dirs(reference, options)
    }

    /// Tear down the store, releasing every cached module's backing. Safe
    /// to call more than once; also runs on drop.
    pub fn dispose(&self) {
        self.store.dispose_all();
    }

    pub fn store(&self) -> &ModuleStore {
        &self.store
    }

    fn fetch(
        &self,
        path: &Path,
        options: &ReadOptions,
    ) -> Result<Rc<ModuleDef>, ModuleLoadError> {
        self.store.fetch_or_load(path, options, self)
    }

    fn search_known_dirs(
        &self,
        reference: &ModuleReference,
        options: &ReadOptions,
    ) -> Result<Option<Rc<ModuleDef>>, ModuleLoadError> {
        let file_name = reference.expected_file_name();
        let candidates = candidate_paths(&self.search_dirs, &file_name);
        if candidates.is_empty() {
            self.sink
                .debug(&unresolved_message(reference, &self.display_references));
            return Ok(None);
        }

        match select_candidate(candidates, reference.version, self.store.reader())? {
            Some(path) => self.fetch(&path, options).map(Some),
            None => Ok(None),
        }
    }
}

impl ModuleResolver for ReferenceResolver {
    fn resolve(
        &self,
        reference: &ModuleReference,
        options: &ReadOptions,
    ) -> Result<Option<Rc<ModuleDef>>, ModuleLoadError> {
        self.resolve_with(reference, options)
    }
}

impl Drop for ReferenceResolver {
    fn drop(&mut self) {
        self.store.dispose_all();
    }
}
