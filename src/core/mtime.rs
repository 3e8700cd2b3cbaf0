//! # Mtime Synchronization Module / Mtime 同步模块
//!
//! After a fresh checkout every file carries the checkout time, which defeats
//! mtime-based staleness checks. This module walks a repository and sets each
//! tracked file's access and modification time to the time of its most
//! recent commit.
//!
//! 全新检出后，每个文件都带有检出时间，这会使基于 mtime 的过期检查失效。
//! 此模块遍历仓库，并将每个被跟踪文件的访问时间和修改时间设置为其最近一次提交的时间。

use anyhow::{bail, Context, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use walkdir::{DirEntry, WalkDir};

use crate::{
    core::models::SyncReport,
    infra::{command, fs, t},
    reporting::console,
};

/// Looks up the last commit time of a file.
///
/// Implementations return `Ok(None)` for files without history (untracked or
/// never committed) and `Err` when the lookup itself cannot be performed.
pub trait CommitTimeSource {
    /// Unix timestamp, in seconds, of the most recent commit touching `path`.
    fn last_commit_timestamp(&self, path: &Path) -> impl Future<Output = Result<Option<i64>>>;
}

/// [`CommitTimeSource`] backed by `git log`, run from the repository root.
#[derive(Debug, Clone)]
pub struct GitCommitTime {
    root: PathBuf,
}

impl GitCommitTime {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CommitTimeSource for GitCommitTime {
    async fn last_commit_timestamp(&self, path: &Path) -> Result<Option<i64>> {
        let relative = fs::relative_to(&self.root, path);

        let mut cmd = Command::new("git");
        cmd.args(["log", "--pretty=%at", "-1", "--"])
            .arg(relative)
            .current_dir(&self.root);

        let output = command::run_captured(cmd)
            .await
            .with_context(|| t!("mtime.git_spawn_failed", path = relative.display()).to_string())?;

        if !output.success() {
            bail!(
                "{}",
                t!(
                    "mtime.git_failed",
                    path = relative.display(),
                    stderr = output.stderr.trim()
                )
            );
        }

        parse_commit_timestamp(&output.stdout, relative)
    }
}

/// Parses the output of `git log --pretty=%at -1`.
/// Empty output means the file has no history.
pub fn parse_commit_timestamp(output: &str, path: &Path) -> Result<Option<i64>> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let secs = trimmed.parse::<i64>().with_context(|| {
        t!("mtime.bad_timestamp", value = trimmed, path = path.display()).to_string()
    })?;
    Ok(Some(secs))
}

/// Resolves the directory to synchronize.
///
/// An explicit root must exist. Without one, the top level of the git
/// repository containing the current directory is used.
pub async fn resolve_repo_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        if !fs::is_directory(root) {
            bail!("{}", t!("mtime.root_not_found", path = root.display()));
        }
        return fs::absolute_path(root);
    }

    let mut cmd = Command::new("git");
    cmd.args(["rev-parse", "--show-toplevel"]);
    let output = command::run_captured(cmd)
        .await
        .with_context(|| t!("mtime.root_detect_failed").to_string())?;
    if !output.success() {
        bail!("{} {}", t!("mtime.root_detect_failed"), output.stderr.trim());
    }
    Ok(PathBuf::from(output.stdout.trim()))
}

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == ".git"
}

/// Walks `root` and stamps every file that has commit history.
///
/// Files are visited in file-name order. Directories are walked but never
/// stamped, and `.git` directories are skipped. Symlinks are not followed or
/// stamped. The first failing lookup aborts the walk; files stamped before it
/// keep their new times.
///
/// # Arguments
/// * `root` - Repository root to walk
/// * `source` - Where commit times come from
///
/// # Returns
/// A `SyncReport` with the number of stamped and untouched files
pub async fn sync_tree<S: CommitTimeSource>(root: &Path, source: &S) -> Result<SyncReport> {
    let mut report = SyncReport::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_git_dir(entry));

    for entry in walker {
        let entry = entry.with_context(|| t!("mtime.walk_failed", path = root.display()).to_string())?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        match source.last_commit_timestamp(path).await? {
            Some(secs) => {
                fs::set_file_times(path, secs)
                    .with_context(|| t!("mtime.set_failed", path = path.display()).to_string())?;
                console::print_stamped(secs, fs::relative_to(root, path));
                report.stamped += 1;
            }
            None => report.untouched += 1,
        }
    }

    Ok(report)
}
