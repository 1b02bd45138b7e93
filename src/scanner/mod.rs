pub mod classify;

use classify::{Category, classify};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Test assets bucketed by category, each list in discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub oggs: Vec<PathBuf>,
    pub weems: Vec<PathBuf>,
    pub wisps: Vec<PathBuf>,
    pub banks: Vec<PathBuf>,
    pub autos: Vec<PathBuf>,
}

impl ScanResult {
    pub fn files(&self, category: Category) -> &[PathBuf] {
        match category {
            Category::Ogg => &self.oggs,
            Category::Weem => &self.weems,
            Category::Wisp => &self.wisps,
            Category::Bank => &self.banks,
            Category::Auto => &self.autos,
        }
    }

    fn files_mut(&mut self, category: Category) -> &mut Vec<PathBuf> {
        match category {
            Category::Ogg => &mut self.oggs,
            Category::Weem => &mut self.weems,
            Category::Wisp => &mut self.wisps,
            Category::Bank => &mut self.banks,
            Category::Auto => &mut self.autos,
        }
    }

    /// Add a file, classified by its own name.
    pub fn push(&mut self, path: PathBuf) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let category = classify(&name);
        log::trace!("{} -> {}", path.display(), category.label());
        self.files_mut(category).push(path);
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|&c| self.files(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Recursively scan `root` for test assets.
///
/// Top-down: a directory's regular files come first, sorted by raw name,
/// then its subdirectories in sorted order. A symlink to a file counts as
/// a file; symlinked directories are not descended into.
/// Paths keep `root` as their prefix (`test/a.ogg`). An empty directory
/// yields an empty result; a missing or unreadable root is an error.
pub fn scan(root: &Path) -> Result<ScanResult, ScanError> {
    let meta = std::fs::metadata(root).map_err(|source| ScanError::Filesystem {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut result = ScanResult::default();

    for entry in WalkDir::new(root).follow_links(false).sort_by(files_first) {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !is_file(&entry) {
            continue;
        }
        result.push(entry.into_path());
    }

    for category in Category::ALL {
        log::info!("{:>4}: {} files", category.label(), result.files(category).len());
    }

    Ok(result)
}

fn walk_error(root: &Path, e: walkdir::Error) -> ScanError {
    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
    let source = match e.into_io_error() {
        Some(source) => source,
        None => std::io::Error::other("walk failed"),
    };
    ScanError::Filesystem { path, source }
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
