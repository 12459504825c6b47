// Parsed binary-module representation
// The module owns its backing resources until the store releases them

use std::cell::{Ref, RefCell};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::identity::{ModuleIdentity, ModuleReference};

/// Backing storage a parsed module holds until it is released.
#[derive(Debug)]
pub enum ModuleBacking {
    /// Whole module image held in memory.
    Bytes(Vec<u8>),
    /// Open handle for sections read on demand.
    File(File),
}

/// A parsed binary module: identity, declared references, and the backing
/// image the weaving passes rewrite.
#[derive(Debug)]
pub struct ModuleDef {
    identity: ModuleIdentity,
    path: PathBuf,
    references: Vec<ModuleReference>,
    backing: RefCell<Option<ModuleBacking>>,
}

impl ModuleDef {
    pub fn new(
        identity: ModuleIdentity,
        path: impl Into<PathBuf>,
        references: Vec<ModuleReference>,
        backing: Option<ModuleBacking>,
    ) -> Self {
        Self {
            identity,
            path: path.into(),
            references,
            backing: RefCell::new(backing),
        }
    }

    pub fn identity(&self) -> &ModuleIdentity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// File this module was parsed from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// References this module declares, in declaration order.
    pub fn references(&self) -> &[ModuleReference] {
        &self.references
    }

    /// In-memory image bytes, while the backing is held and byte-based.
    pub fn image(&self) -> Option<Ref<'_, [u8]>> {
        Ref::filter_map(self.backing.borrow(), |backing| match backing {
            Some(ModuleBacking::Bytes(bytes)) => Some(bytes.as_slice()),
            _ => None,
        })
        .ok()
    }

    /// Drop the backing resources. Returns true only on the call that
    /// actually released something; later calls are no-ops.
    pub fn release(&self) -> bool {
        self.backing.borrow_mut().take().is_some()
    }

    pub fn is_released(&self) -> bool {
        self.backing.borrow().is_none()
    }
}
