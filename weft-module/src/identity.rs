// Module identities and symbolic references

use std::fmt;

use crate::version::Version;

/// File extension carried by compiled binary modules.
pub const MODULE_EXTENSION: &str = "bmod";

/// A requested dependency: logical module name plus an optional version.
///
/// An absent version means any version is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleReference {
    pub name: String,
    pub version: Option<Version>,
}

impl ModuleReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn with_version(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version: Some(version),
        }
    }

    /// File name a module with this name is expected to carry on disk.
    pub fn expected_file_name(&self) -> String {
        format!("{}.{}", self.name, MODULE_EXTENSION)
    }
}

impl fmt::Display for ModuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Identity a module file reports for itself in its metadata header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleIdentity {
    pub name: String,
    pub version: Option<Version>,
}

impl ModuleIdentity {
    pub fn new(name: impl Into<String>, version: Option<Version>) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

impl fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
