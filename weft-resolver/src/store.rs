// Path-keyed cache of parsed modules
// At most one parse per distinct file for the store's lifetime; disposal
// releases every cached module's backing exactly once

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::rc::Rc;

use weft_module::{ModuleDef, ModuleLoadError, ModuleReader, ModuleResolver, ReadOptions};

/// Cache key: the file path normalized once at insertion/query time.
/// Case is folded and `\` separators become `/`, so every spelling of the
/// same file lands on the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathKey(String);

impl PathKey {
    pub fn new(path: &Path) -> Self {
        let lossy = path.to_string_lossy();
        let mut normalized = String::with_capacity(lossy.len());
        for ch in lossy.chars() {
            match ch {
                '\\' => normalized.push('/'),
                c => normalized.extend(c.to_lowercase()),
            }
        }
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Process-lifetime cache of parsed modules, keyed by normalized file path.
///
/// Owns the external reader it feeds. Entries are added, never evicted or
/// updated; `dispose_all` is the only teardown. Interior mutability keeps
/// fetches re-entrant: a reader may resolve nested references, and those
/// resolutions fetch from this same store, mid-load.
pub struct ModuleStore {
    reader: Box<dyn ModuleReader>,
    cache: RefCell<HashMap<PathKey, Rc<ModuleDef>>>,
    in_flight: RefCell<HashSet<PathKey>>,
}

impl ModuleStore {
    pub fn new(reader: Box<dyn ModuleReader>) -> Self {
        Self {
            reader,
            cache: RefCell::new(HashMap::new()),
            in_flight: RefCell::new(HashSet::new()),
        }
    }

    /// The reader this store parses and probes with.
    pub fn reader(&self) -> &dyn ModuleReader {
        self.reader.as_ref()
    }

    /// Number of cached modules.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Cached module for `path`, if it has been loaded.
    pub fn get(&self, path: &Path) -> Option<Rc<ModuleDef>> {
        self.cache.borrow().get(&PathKey::new(path)).cloned()
    }

    /// Return the cached module for `path`, parsing the file first on a
    /// miss.
    ///
    /// The reader is handed `options.resolver` when the caller supplied
    /// one, otherwise `fallback_resolver`. Failures are not cached: a later
    /// call for the same path parses again.
    pub fn fetch_or_load(
        &self,
        path: &Path,
        options: &ReadOptions,
        fallback_resolver: &dyn ModuleResolver,
    ) -> Result<Rc<ModuleDef>, ModuleLoadError> {
        let key = PathKey::new(path);
        if let Some(module) = self.cache.borrow().get(&key) {
            log::trace!("module cache hit for '{}'", path.display());
            return Ok(Rc::clone(module));
        }

        if !self.in_flight.borrow_mut().insert(key.clone()) {
            return Err(ModuleLoadError::CyclicLoad {
                path: path.to_path_buf(),
            });
        }

        log::debug!("reading module '{}'", path.display());
        let resolver = match options.resolver.as_deref() {
            Some(supplied) => supplied,
            None => fallback_resolver,
        };
        let outcome = self.reader.read(path, options, resolver);
        self.in_flight.borrow_mut().remove(&key);

        let module = Rc::new(outcome.map_err(|source| ModuleLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?);
        self.cache.borrow_mut().insert(key, Rc::clone(&module));
        Ok(module)
    }

    /// Release every cached module's backing and clear the store.
    /// Idempotent; safe on an empty store.
    pub fn dispose_all(&self) {
        for (_, module) in self.cache.borrow_mut().drain() {
            module.release();
        }
    }
}
