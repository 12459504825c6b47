// weft-module - parsed binary-module model for the weft toolchain
// Shared between the resolver and every weaving pass

pub mod error;
pub mod identity;
pub mod module;
pub mod reader;
pub mod version;

pub use error::ModuleLoadError;
pub use identity::{ModuleIdentity, ModuleReference, MODULE_EXTENSION};
pub use module::{ModuleBacking, ModuleDef};
pub use reader::{ModuleReader, ModuleResolver, ReadOptions};
pub use version::{Version, VersionParseError};
