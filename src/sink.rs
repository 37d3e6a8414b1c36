//! Output locations for generated artifacts.

use crate::error::{CookbookError, Result};
use log::debug;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Destination for named artifacts. Paths are relative and use `/`;
/// parent directories are created as needed.
pub trait Sink {
    fn write_binary(&self, relative_path: &str, bytes: &[u8]) -> Result<()>;

    fn write_text(&self, relative_path: &str, content: &str) -> Result<()> {
        self.write_binary(relative_path, content.as_bytes())
    }
}

/// Writes artifacts below a root directory on disk
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative_path: &str) -> PathBuf {
        relative_path
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |path, part| path.join(part))
    }
}

impl Sink for DirSink {
    fn write_binary(&self, relative_path: &str, bytes: &[u8]) -> Result<()> {
        let path = self.resolve(relative_path);
        let wrap = |source| CookbookError::ArtifactWrite {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(wrap)?;
        }
        std::fs::write(&path, bytes).map_err(wrap)?;
        debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

/// Keeps artifacts in memory, keyed by relative path
#[derive(Debug, Default)]
pub struct MemorySink {
    files: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, relative_path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(relative_path).cloned()
    }

    pub fn text(&self, relative_path: &str) -> Option<String> {
        self.get(relative_path)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    pub fn into_files(self) -> BTreeMap<String, Vec<u8>> {
        self.files.into_inner()
    }
}

impl Sink for MemorySink {
    fn write_binary(&self, relative_path: &str, bytes: &[u8]) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(relative_path.trim_start_matches('/').to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Sink that writes below a fixed sub-directory of another sink
pub struct Prefixed<'a> {
    inner: &'a dyn Sink,
    prefix: String,
}

impl<'a> Prefixed<'a> {
    pub fn new(inner: &'a dyn Sink, prefix: &str) -> Self {
        Self {
            inner,
            prefix: prefix.trim_matches('/').to_string(),
        }
    }
}

impl Sink for Prefixed<'_> {
    fn write_binary(&self, relative_path: &str, bytes: &[u8]) -> Result<()> {
        if self.prefix.is_empty() {
            self.inner.write_binary(relative_path, bytes)
        } else {
            self.inner
                .write_binary(&format!("{}/{}", self.prefix, relative_path), bytes)
        }
    }
}
