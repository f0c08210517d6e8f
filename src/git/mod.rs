// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Only repository discovery is needed: hooks and the pending commit message
//! are plain files inside the git directory.

mod repo;

pub use repo::GitPaths;
