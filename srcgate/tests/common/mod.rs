//! Common test utilities for integration tests.
//!
//! This module provides a temporary workspace fixture that acts as the
//! working directory of an ingestion run.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use srcgate::{FileIngestor, IngestOptions, IngestionResult, WorkingDirectory};
use tempfile::TempDir;

/// A temporary directory used as the working directory of a run.
///
/// The directory is canonicalized up front so that expected allowed
/// directories can be compared exactly, even where the temp root is a
/// symlink.
pub struct Workspace {
    dir: TempDir,
    root: PathBuf,
    cwd: WorkingDirectory,
}

#[allow(dead_code)]
impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();
        let cwd = WorkingDirectory::new(&root).unwrap();
        Self { dir, root, cwd }
    }

    /// The canonical root of the workspace.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The workspace as a working directory.
    pub fn cwd(&self) -> &WorkingDirectory {
        &self.cwd
    }

    /// The normalized root as text, for building expected names.
    pub fn normalized(&self) -> &str {
        self.cwd.normalized().as_str()
    }

    /// Writes `content` to `relative`, creating parent directories.
    pub fn file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Creates the directory `relative`.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a symlink at `link` pointing to `target`, both relative.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, link: &str) {
        std::os::unix::fs::symlink(self.root.join(target), self.root.join(link)).unwrap();
    }

    /// The canonical form of `relative`, which must exist.
    pub fn canonical(&self, relative: &str) -> PathBuf {
        dunce::canonicalize(self.root.join(relative)).unwrap()
    }

    /// Runs ingestion with `stdin` as standard input.
    pub fn ingest(&self, options: &IngestOptions, stdin: &str) -> IngestionResult {
        FileIngestor::new(&self.cwd, Cursor::new(stdin.as_bytes().to_vec())).ingest(options)
    }

    /// Keeps the directory alive for the lifetime of the workspace.
    pub fn temp_dir(&self) -> &TempDir {
        &self.dir
    }
}

/// Converts a list of string slices to owned arguments.
#[allow(dead_code)]
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
