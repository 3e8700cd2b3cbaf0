//! # Mtime Module Unit Tests / Mtime 模块单元测试
//!
//! These tests drive `sync_tree` with in-memory commit time sources, so the
//! walk and stamping logic is exercised without git.
//!
//! 这些测试使用内存中的提交时间源驱动 `sync_tree`，
//! 从而在不依赖 git 的情况下测试遍历和时间戳设置逻辑。

use anyhow::{anyhow, Result};
use golden_check::core::mtime::{sync_tree, CommitTimeSource};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const COMMIT_TIME: i64 = 1_539_000_000;
const ORIGINAL_TIME: i64 = 1_000_000_000;

/// Serves timestamps from a map keyed by path relative to the walk root.
/// Records every path it is asked about.
struct MapSource {
    root: PathBuf,
    times: HashMap<PathBuf, i64>,
    asked: RefCell<Vec<PathBuf>>,
}

impl MapSource {
    fn new(root: &Path, entries: &[(&str, i64)]) -> Self {
        Self {
            root: root.to_path_buf(),
            times: entries
                .iter()
                .map(|(path, secs)| (PathBuf::from(path), *secs))
                .collect(),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl CommitTimeSource for MapSource {
    async fn last_commit_timestamp(&self, path: &Path) -> Result<Option<i64>> {
        let relative = path.strip_prefix(&self.root).unwrap().to_path_buf();
        self.asked.borrow_mut().push(relative.clone());
        Ok(self.times.get(&relative).copied())
    }
}

/// Fails for one file name, succeeds with a fixed time for every other file.
struct FailingSource {
    fail_on: &'static str,
}

impl CommitTimeSource for FailingSource {
    async fn last_commit_timestamp(&self, path: &Path) -> Result<Option<i64>> {
        if path.file_name().and_then(|n| n.to_str()) == Some(self.fail_on) {
            return Err(anyhow!("lookup failed for {}", path.display()));
        }
        Ok(Some(COMMIT_TIME))
    }
}

/// Creates files under `root` and gives each a known modification time.
fn create_files(root: &Path, names: &[&str]) {
    for name in names {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, name).unwrap();
        let time = filetime::FileTime::from_unix_time(ORIGINAL_TIME, 0);
        filetime::set_file_times(&path, time, time).unwrap();
    }
}

fn mtime(path: &Path) -> i64 {
    let metadata = fs::metadata(path).unwrap();
    filetime::FileTime::from_last_modification_time(&metadata).unix_seconds()
}

fn atime(path: &Path) -> i64 {
    let metadata = fs::metadata(path).unwrap();
    filetime::FileTime::from_last_access_time(&metadata).unix_seconds()
}

#[tokio::test]
async fn test_stamps_files_with_history() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(root, &["tracked.txt", "src/lib.rs", "untracked.txt"]);

    let source = MapSource::new(root, &[("tracked.txt", COMMIT_TIME), ("src/lib.rs", COMMIT_TIME + 60)]);
    let report = sync_tree(root, &source).await.unwrap();

    assert_eq!(report.stamped, 2);
    assert_eq!(report.untouched, 1);
    assert_eq!(mtime(&root.join("tracked.txt")), COMMIT_TIME);
    assert_eq!(atime(&root.join("tracked.txt")), COMMIT_TIME);
    assert_eq!(mtime(&root.join("src/lib.rs")), COMMIT_TIME + 60);
    assert_eq!(mtime(&root.join("untracked.txt")), ORIGINAL_TIME);
}

#[tokio::test]
async fn test_directories_are_not_looked_up() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(root, &["a/b/c.txt"]);
    fs::create_dir_all(root.join("empty_dir")).unwrap();

    let source = MapSource::new(root, &[]);
    sync_tree(root, &source).await.unwrap();

    assert_eq!(*source.asked.borrow(), vec![PathBuf::from("a/b/c.txt")]);
}

#[tokio::test]
async fn test_git_directory_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(root, &[".git/HEAD", ".git/objects/ab/cdef", "main.rs"]);

    let source = MapSource::new(root, &[]);
    sync_tree(root, &source).await.unwrap();

    assert_eq!(*source.asked.borrow(), vec![PathBuf::from("main.rs")]);
}

#[tokio::test]
async fn test_files_are_visited_in_name_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(root, &["c.txt", "a.txt", "b.txt"]);

    let source = MapSource::new(root, &[]);
    sync_tree(root, &source).await.unwrap();

    assert_eq!(
        *source.asked.borrow(),
        vec![
            PathBuf::from("a.txt"),
            PathBuf::from("b.txt"),
            PathBuf::from("c.txt")
        ]
    );
}

/// A failing lookup aborts the walk. Files visited before it keep their new
/// times; files after it are never touched.
///
/// 查找失败会中止遍历。之前访问的文件保留新时间；之后的文件不会被改动。
#[tokio::test]
async fn test_failing_lookup_aborts_walk() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(root, &["a.txt", "b.txt", "c.txt"]);

    let source = FailingSource { fail_on: "b.txt" };
    let err = sync_tree(root, &source).await.unwrap_err();

    assert!(err.to_string().contains("b.txt"));
    assert_eq!(mtime(&root.join("a.txt")), COMMIT_TIME);
    assert_eq!(mtime(&root.join("c.txt")), ORIGINAL_TIME);
}

#[tokio::test]
async fn test_empty_tree() {
    let temp_dir = TempDir::new().unwrap();
    let source = MapSource::new(temp_dir.path(), &[]);

    let report = sync_tree(temp_dir.path(), &source).await.unwrap();
    assert_eq!(report.stamped, 0);
    assert_eq!(report.untouched, 0);
}
