//! # Sync Mtime Command Module / Mtime 同步命令模块
//!
//! This module implements the `sync-mtime` command.
//!
//! 此模块实现 `sync-mtime` 命令。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::{
    core::mtime::{resolve_repo_root, sync_tree, GitCommitTime},
    infra::t,
    reporting::console,
};

/// Stamps every tracked file under the repository root with its last commit time.
///
/// # Arguments
/// * `root` - Repository root given on the command line; defaults to the git top level
pub async fn execute(root: Option<PathBuf>) -> Result<()> {
    let root = resolve_repo_root(root.as_deref()).await?;
    println!("{}", t!("mtime.walking", path = root.display()).cyan());

    let source = GitCommitTime::new(&root);
    let report = sync_tree(&root, &source).await?;

    console::print_sync_summary(&report);
    Ok(())
}
