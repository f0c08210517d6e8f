// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository discovery.

use crate::error::Result;
use git2::Repository;
use std::path::{Path, PathBuf};

/// Locations inside a discovered repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitPaths {
    git_dir: PathBuf,
    common_dir: PathBuf,
}

impl GitPaths {
    /// Discover the repository containing the current directory.
    pub fn discover_current() -> Result<Self> {
        Self::discover(&std::env::current_dir()?)
    }

    /// Discover the repository containing `start`, walking up parent directories.
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start)?;
        let paths = Self {
            git_dir: repo.path().to_path_buf(),
            common_dir: common_dir(&repo)?,
        };
        tracing::debug!("Discovered git directory: {:?}", paths.git_dir);
        Ok(paths)
    }

    /// The per-worktree git directory.
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// Directory holding the hooks shared by all worktrees.
    pub fn hooks_dir(&self) -> PathBuf {
        self.common_dir.join("hooks")
    }

    /// Message file git writes before running `commit-msg`.
    pub fn commit_editmsg(&self) -> PathBuf {
        self.git_dir.join("COMMIT_EDITMSG")
    }
}

/// Linked worktrees record the shared git directory in a `commondir` file.
fn common_dir(repo: &Repository) -> Result<PathBuf> {
    let git_dir = repo.path();
    if !repo.is_worktree() {
        return Ok(git_dir.to_path_buf());
    }

    let recorded = std::fs::read_to_string(git_dir.join("commondir"))?;
    Ok(git_dir.join(recorded.trim()).canonicalize()?)
}
