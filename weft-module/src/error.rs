// Fatal resolution errors
// A reference that is simply not found anywhere is not an error; resolvers
// report that outcome as None

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while loading a module file that was selected for resolution.
#[derive(Debug, Error)]
pub enum ModuleLoadError {
    /// The file exists and was selected, but reading or parsing it failed.
    /// Wraps the underlying cause and names the offending file.
    #[error("could not read module '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A nested resolution re-entered a file whose own parse has not
    /// returned yet.
    #[error("cyclic load of module '{path}'")]
    CyclicLoad { path: PathBuf },
}

impl ModuleLoadError {
    /// File the failure is attributed to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } => path,
            Self::CyclicLoad { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_the_file() {
        let error = ModuleLoadError::Read {
            path: PathBuf::from("/build/out/core.bmod"),
            source: anyhow::anyhow!("truncated header"),
        };
        assert!(error.to_string().contains("core.bmod"));
        assert_eq!(error.path(), Path::new("/build/out/core.bmod"));
    }
}
