//! The generated file tree and writing it to disk.
use crate::error::{Error, Result};
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered map of relative output path to file content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    files: BTreeMap<String, Vec<u8>>,
}

impl FileTree {
    /// Adds a file.
    ///
    /// # Errors
    /// * `Error::TemplateError` if two corpus entries resolve to the same path
    pub fn insert<S: Into<String>>(&mut self, path: S, content: Vec<u8>) -> Result<()> {
        let path = path.into();
        if self.files.contains_key(&path) {
            return Err(Error::TemplateError(format!(
                "more than one corpus entry resolves to '{path}'"
            )));
        }
        self.files.insert(path, content);
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Content of a file as text, if present and valid UTF-8.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|content| std::str::from_utf8(content).ok())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// True when at least one file lives below `dir`.
    pub fn contains_dir(&self, dir: &str) -> bool {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        self.files.keys().any(|path| path.starts_with(&prefix))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.files.iter().map(|(path, content)| (path.as_str(), content.as_slice()))
    }

    /// Writes every file below `output_dir`.
    ///
    /// All targets are checked before anything is written, so an existing file
    /// without `force` leaves the output directory untouched.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Paths of the written files
    ///
    /// # Errors
    /// * `Error::OutputExistsError` if a target exists and `force` is false
    pub fn write_to<P: AsRef<Path>>(&self, output_dir: P, force: bool) -> Result<Vec<PathBuf>> {
        let output_dir = output_dir.as_ref();
        let targets: Vec<(PathBuf, &[u8])> = self
            .iter()
            .map(|(path, content)| (output_dir.join(path), content))
            .collect();

        if !force {
            if let Some((existing, _)) = targets.iter().find(|(target, _)| target.exists()) {
                return Err(Error::OutputExistsError { path: existing.display().to_string() });
            }
        }

        let mut written = Vec::with_capacity(targets.len());
        for (target, content) in targets {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, content)?;
            debug!("Wrote '{}'", target.display());
            written.push(target);
        }
        Ok(written)
    }
}
