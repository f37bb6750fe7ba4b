// src/source.rs
//! Document sources: how a corpus snapshot gets into memory.
//!
//! The analysis core consumes a complete name-to-text mapping and never
//! retries or paginates; a remote source (object storage, crawler output)
//! would own its own retry policy behind the same trait.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{RankError, Result};

/// Supplies a complete corpus snapshot: entry name (`<digits>.html`) to
/// full document text.
pub trait DocumentSource {
    /// Materializes the whole corpus in memory.
    ///
    /// # Errors
    /// Returns error if the corpus cannot be read in full.
    fn load(&self) -> Result<BTreeMap<String, String>>;
}

/// Reads a corpus from a local directory of `.html` files.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for DirSource {
    fn load(&self) -> Result<BTreeMap<String, String>> {
        let paths = collect_html_paths(&self.root)?;
        let docs: Vec<(String, String)> = paths
            .par_iter()
            .map(|path| read_entry(path))
            .collect::<Result<_>>()?;
        Ok(docs.into_iter().collect())
    }
}

fn collect_html_paths(root: &Path) -> Result<Vec<PathBuf>> {
    // The corpus is a flat directory of numbered files. Nested entries are
    // not part of it and could shadow a top-level basename, so the walk
    // stops at the first level.
    let mut paths = Vec::new();
    for item in WalkDir::new(root).follow_links(false).max_depth(1) {
        let entry = item?;
        if entry.file_type().is_file() && is_html(entry.path()) {
            paths.push(entry.path().to_path_buf());
        }
    }
    // Sorted so the snapshot is reproducible across filesystems.
    paths.sort();
    Ok(paths)
}

fn is_html(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "html")
}

fn read_entry(path: &Path) -> Result<(String, String)> {
    let name = path
        .file_name()
        .map_or_else(String::new, |f| f.to_string_lossy().into_owned());
    let text = fs::read_to_string(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok((name, text))
}
