#![allow(dead_code)]
// Shared fixtures for resolver integration tests
//
// TextReader is a line-oriented stand-in for the binary module format:
//   module <name> [version]
//   ref <name> [version]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use weft_module::{
    ModuleBacking, ModuleDef, ModuleIdentity, ModuleReader, ModuleReference, ModuleResolver,
    ReadOptions, Version,
};
use weft_resolver::DiagnosticSink;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Write a fixture module file, creating the directory as needed.
pub fn write_module(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(file_name);
    fs::write(&path, content).unwrap();
    path
}

/// Test reader over the text fixture format. Clones share read counters,
/// so a test can keep a handle after boxing the reader into a resolver.
#[derive(Clone)]
pub struct TextReader {
    resolve_refs: bool,
    reads: Rc<RefCell<HashMap<PathBuf, usize>>>,
}

impl TextReader {
    pub fn new() -> Self {
        Self {
            resolve_refs: false,
            reads: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Reader that resolves every declared reference while still parsing,
    /// the way a weaver inspecting dependency exports mid-read would.
    pub fn eager() -> Self {
        Self {
            resolve_refs: true,
            reads: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn reads_of(&self, path: &Path) -> usize {
        self.reads.borrow().get(path).copied().unwrap_or(0)
    }

    pub fn total_reads(&self) -> usize {
        self.reads.borrow().values().sum()
    }
}

fn split_name_version(line: &str, keyword: &str) -> Result<(String, Option<Version>)> {
    let mut words = line.split_whitespace();
    if words.next() != Some(keyword) {
        bail!("expected '{}' line, got '{}'", keyword, line);
    }
    let name = words
        .next()
        .with_context(|| format!("'{}' line missing a name", keyword))?
        .to_string();
    let version = words.next().map(str::parse::<Version>).transpose()?;
    if words.next().is_some() {
        bail!("trailing tokens in '{}'", line);
    }
    Ok((name, version))
}

impl ModuleReader for TextReader {
    fn read(
        &self,
        path: &Path,
        options: &ReadOptions,
        resolver: &dyn ModuleResolver,
    ) -> Result<ModuleDef> {
        *self
            .reads
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_insert(0) += 1;

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut lines = content.lines().filter(|line| !line.trim().is_empty());

        let header = lines.next().context("empty module file")?;
        let (name, version) = split_name_version(header, "module")?;

        let mut references = Vec::new();
        for line in lines {
            let (ref_name, ref_version) = split_name_version(line, "ref")?;
            references.push(match ref_version {
                Some(v) => ModuleReference::with_version(ref_name, v),
                None => ModuleReference::new(ref_name),
            });
        }

        if self.resolve_refs {
            for reference in &references {
                resolver.resolve(reference, options)?;
            }
        }

        Ok(ModuleDef::new(
            ModuleIdentity::new(name, version),
            path,
            references,
            Some(ModuleBacking::Bytes(content.into_bytes())),
        ))
    }

    fn probe(&self, path: &Path) -> Result<ModuleIdentity> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let header = content
            .lines()
            .find(|line| !line.trim().is_empty())
            .context("empty module file")?;
        let (name, version) = split_name_version(header, "module")?;
        Ok(ModuleIdentity::new(name, version))
    }
}

/// Sink that records every debug message; clones share the buffer.
#[derive(Clone, Default)]
pub struct RecordingSink {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn debug(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
