//! Template corpus loading.
//! A template directory holds the schema document next to a `template/` directory;
//! the corpus is everything below `template/`, read into memory so that resolution
//! never touches the filesystem.
use crate::constants::{PREAMBLE_FILE, TEMPLATE_DIR};
use crate::error::{Error, Result};
use log::debug;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// A single corpus file. `path` is relative to the corpus root and always uses `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub path: String,
    pub content: Vec<u8>,
}

impl CorpusEntry {
    pub fn new<S: Into<String>, C: Into<Vec<u8>>>(path: S, content: C) -> Self {
        Self { path: path.into(), content: content.into() }
    }
}

/// The in-memory template corpus.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    preamble: Option<String>,
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Builds a corpus from entries. An entry named `__preamble.tmpl` becomes the
    /// preamble; entries are kept sorted by path.
    pub fn from_entries<I: IntoIterator<Item = CorpusEntry>>(entries: I) -> Result<Self> {
        let mut corpus = Corpus::default();
        for entry in entries {
            if entry.path == PREAMBLE_FILE {
                let preamble = String::from_utf8(entry.content).map_err(|e| {
                    Error::TemplateError(format!("{PREAMBLE_FILE} is not valid UTF-8: {e}"))
                })?;
                corpus.preamble = Some(preamble);
            } else {
                corpus.entries.push(entry);
            }
        }
        corpus.entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(corpus)
    }

    pub fn preamble(&self) -> Option<&str> {
        self.preamble.as_deref()
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }
}

/// Trait for loading a template corpus.
pub trait CorpusLoader {
    fn load(&self) -> Result<Corpus>;
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader for a template directory.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

fn relative_path(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|e| Error::TemplateError(format!("{}: {e}", path.display())))?;
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str().ok_or_else(|| {
                Error::TemplateError(format!("non UTF-8 path in corpus: {}", path.display()))
            })?),
            _ => {
                return Err(Error::TemplateError(format!(
                    "unexpected path component in corpus: {}",
                    path.display()
                )))
            }
        }
    }
    Ok(parts.join("/"))
}

impl<P: AsRef<Path>> CorpusLoader for LocalLoader<P> {
    /// Reads every file below `<template>/template`.
    ///
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the template or its corpus directory
    ///   is missing
    fn load(&self) -> Result<Corpus> {
        let root = load_template_root(self.path.as_ref())?.join(TEMPLATE_DIR);
        if !root.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: root.display().to_string(),
            });
        }

        let mut entries = Vec::new();
        for dir_entry in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
            let dir_entry = dir_entry.map_err(|e| Error::TemplateError(e.to_string()))?;
            if !dir_entry.file_type().is_file() {
                continue;
            }
            let path = relative_path(&root, dir_entry.path())?;
            debug!("Loading corpus entry '{path}'");
            let content = std::fs::read(dir_entry.path())?;
            entries.push(CorpusEntry::new(path, content));
        }
        Corpus::from_entries(entries)
    }
}

/// Checks that a template directory exists and returns it.
pub fn load_template_root<P: AsRef<Path>>(template: P) -> Result<PathBuf> {
    let path = template.as_ref();
    if !path.is_dir() {
        return Err(Error::TemplateDoesNotExistsError { template_dir: path.display().to_string() });
    }
    Ok(path.to_path_buf())
}
