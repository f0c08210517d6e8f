// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds the full git SHA and commit date reported by `commitlint version`.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()?;
    Ok(())
}
