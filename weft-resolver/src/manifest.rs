// Reference manifest - weft.refs.json
// Serialized form of the build's resolved reference set

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dictionary::ReferenceDictionary;

/// Manifest listing every reference the build resolved ahead of weaving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceManifest {
    #[serde(default)]
    pub references: Vec<ReferenceEntry>,
}

/// One resolved reference: logical name and the module file it maps to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub name: String,
    pub path: String,
}

impl ReferenceManifest {
    /// Parse weft.refs.json from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;

        Self::from_str(&content)
    }

    /// Parse weft.refs.json from string
    pub fn from_str(content: &str) -> Result<Self> {
        let manifest: ReferenceManifest =
            serde_json::from_str(content).context("Failed to parse reference manifest")?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Write manifest to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize reference manifest")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Validate manifest
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.references {
            if entry.name.is_empty() {
                anyhow::bail!("Reference name cannot be empty");
            }
            if entry.path.is_empty() {
                anyhow::bail!("Reference '{}' has an empty path", entry.name);
            }
            if !seen.insert(entry.name.as_str()) {
                anyhow::bail!("Duplicate reference name: {}", entry.name);
            }
        }

        Ok(())
    }

    /// Split into the resolver's construction inputs: the authoritative
    /// dictionary and the display list used in not-found diagnostics.
    pub fn into_parts(self) -> (ReferenceDictionary, Vec<String>) {
        let display: Vec<String> = self
            .references
            .iter()
            .map(|entry| entry.path.clone())
            .collect();
        let dictionary =
            ReferenceDictionary::from_pairs(self.references.into_iter().map(|e| (e.name, e.path)));
        (dictionary, display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_manifest() {
        let json = r#"{
            "references": [
                { "name": "core-runtime", "path": "/build/out/core-runtime.bmod" },
                { "name": "codec", "path": "/build/deps/codec.bmod" }
            ]
        }"#;

        let manifest = ReferenceManifest::from_str(json).unwrap();
        assert_eq!(manifest.references.len(), 2);
        assert_eq!(manifest.references[0].name, "core-runtime");
    }

    #[test]
    fn test_missing_references_key_defaults_to_empty() {
        let manifest = ReferenceManifest::from_str("{}").unwrap();
        assert!(manifest.references.is_empty());
    }

    #[test]
    fn test_validation_rejects_duplicates_and_blanks() {
        let duplicate = r#"{
            "references": [
                { "name": "codec", "path": "/a/codec.bmod" },
                { "name": "codec", "path": "/b/codec.bmod" }
            ]
        }"#;
        assert!(ReferenceManifest::from_str(duplicate).is_err());

        let blank = r#"{ "references": [ { "name": "", "path": "/a/x.bmod" } ] }"#;
        assert!(ReferenceManifest::from_str(blank).is_err());
    }

    #[test]
    fn test_into_parts_preserves_order_and_display_list() {
        let json = r#"{
            "references": [
                { "name": "b", "path": "/dir/b.bmod" },
                { "name": "a", "path": "/dir/a.bmod" }
            ]
        }"#;
        let (dictionary, display) = ReferenceManifest::from_str(json).unwrap().into_parts();

        assert_eq!(dictionary.lookup("a"), Some(Path::new("/dir/a.bmod")));
        let paths: Vec<_> = dictionary.paths().collect();
        assert_eq!(paths, vec![Path::new("/dir/b.bmod"), Path::new("/dir/a.bmod")]);
        assert_eq!(display, vec!["/dir/b.bmod", "/dir/a.bmod"]);
    }
}
