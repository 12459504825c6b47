// Capability seams between the resolver and the binary-module reader

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use crate::error::ModuleLoadError;
use crate::identity::{ModuleIdentity, ModuleReference};
use crate::module::ModuleDef;

/// Per-load configuration. `Default` is the baseline empty configuration.
#[derive(Clone, Default)]
pub struct ReadOptions {
    /// Resolver the reader must use for nested references. A caller that
    /// supplies one keeps it; otherwise the orchestrating resolver hands
    /// itself to the reader explicitly.
    pub resolver: Option<Rc<dyn ModuleResolver>>,
}

impl fmt::Debug for ReadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadOptions")
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

/// Parses binary module files into their structured representation.
///
/// `read` may resolve nested references through the resolver it is handed;
/// it must not resolve the module currently being read (the store answers
/// that with a cyclic-load error).
pub trait ModuleReader {
    /// Parse the module at `path`.
    fn read(
        &self,
        path: &Path,
        options: &ReadOptions,
        resolver: &dyn ModuleResolver,
    ) -> anyhow::Result<ModuleDef>;

    /// Read only the identity a module file reports for itself, without a
    /// full parse.
    fn probe(&self, path: &Path) -> anyhow::Result<ModuleIdentity>;
}

/// Resolves symbolic references to parsed modules.
pub trait ModuleResolver {
    /// `Ok(None)` means the reference could not be located anywhere known;
    /// the caller decides whether that aborts the run.
    fn resolve(
        &self,
        reference: &ModuleReference,
        options: &ReadOptions,
    ) -> Result<Option<Rc<ModuleDef>>, ModuleLoadError>;
}
