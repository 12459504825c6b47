// Directory search and version disambiguation
// Fallback for references the dictionary does not know about

use std::fs;
use std::path::PathBuf;

use weft_module::{ModuleLoadError, ModuleReader, Version};

/// A discovered module file together with its probed version metadata.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    pub version: Option<Version>,
}

/// Existing `<dir>/<file_name>` files, in search-directory order.
///
/// Any I/O failure while testing a path counts as "does not exist" for that
/// candidate; existence testing is idempotent and never aborts the search.
pub fn candidate_paths(search_dirs: &[PathBuf], file_name: &str) -> Vec<PathBuf> {
    search_dirs
        .iter()
        .map(|dir| dir.join(file_name))
        .filter(|path| fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false))
        .collect()
}

/// Apply the version policy to the discovered candidates.
///
/// Without a requested version the first candidate wins, whatever version
/// it carries. With one, the first candidate whose probed version is an
/// exact match wins; failing that, the highest probed version wins, ties
/// keeping discovery order. Probing is the only step that can fail: an
/// existing candidate whose metadata cannot be read is a fatal load error.
pub fn select_candidate(
    candidates: Vec<PathBuf>,
    requested: Option<Version>,
    reader: &dyn ModuleReader,
) -> Result<Option<PathBuf>, ModuleLoadError> {
    let Some(wanted) = requested else {
        return Ok(candidates.into_iter().next());
    };

    let mut probed = Vec::with_capacity(candidates.len());
    for path in candidates {
        let identity = reader.probe(&path).map_err(|source| ModuleLoadError::Read {
            path: path.clone(),
            source,
        })?;
        if identity.version == Some(wanted) {
            return Ok(Some(path));
        }
        probed.push(Candidate {
            path,
            version: identity.version,
        });
    }

    // Stable sort: equal versions keep discovery order.
    probed.sort_by(|a, b| b.version.cmp(&a.version));
    Ok(probed.into_iter().next().map(|candidate| candidate.path))
}
