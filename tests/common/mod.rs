// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::{tempdir, TempDir};

/// Shell used as the executable under test; fixture scripts are shell scripts.
pub const SHELL: &str = "/bin/sh";

/// Writes a fixture script and its golden `.out` file into `dir`.
pub fn write_fixture(dir: &Path, name: &str, script: &str, golden: &str) {
    fs::write(dir.join(name), script).expect("Failed to write fixture script");
    fs::write(dir.join(format!("{name}.out")), golden).expect("Failed to write golden file");
}

/// A fixture directory holding one passing and one expected-error fixture.
pub fn setup_passing_fixtures() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write_fixture(
        temp_dir.path(),
        "hello",
        "printf 'Hello, world!\\n'\n",
        "Hello, world!\n",
    );
    write_fixture(
        temp_dir.path(),
        "throw_error",
        "echo 'Uncaught boom'\necho 'at line 1' >&2\nexit 1\n",
        "Uncaught [WILDCARD]\n",
    );
    temp_dir
}

/// `check-output` pointed at `tests_dir`, with English, uncolored output.
pub fn check_output_cmd(tests_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("check-output").unwrap();
    cmd.arg(SHELL)
        .arg("--tests-dir")
        .arg(tests_dir)
        .arg("--lang")
        .arg("en")
        .env("NO_COLOR", "1");
    cmd
}

/// `sync-mtime` with English, uncolored output.
pub fn sync_mtime_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sync-mtime").unwrap();
    cmd.arg("--lang").arg("en").env("NO_COLOR", "1");
    cmd
}

/// Whether a usable `git` is on the PATH. Git-backed tests skip themselves otherwise.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Runs git inside `repo` with a fixed identity and commit date.
pub fn git(repo: &Path, args: &[&str], unix_secs: i64) {
    let date = format!("@{unix_secs} +0000");
    let status = Command::new("git")
        .args(["-c", "commit.gpgsign=false", "-c", "init.defaultBranch=main"])
        .args(args)
        .current_dir(repo)
        .env("GIT_AUTHOR_NAME", "Fixture Author")
        .env("GIT_AUTHOR_EMAIL", "author@example.com")
        .env("GIT_COMMITTER_NAME", "Fixture Author")
        .env("GIT_COMMITTER_EMAIL", "author@example.com")
        .env("GIT_AUTHOR_DATE", &date)
        .env("GIT_COMMITTER_DATE", &date)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

/// Creates an empty git repository in a fresh temporary directory.
pub fn init_repo() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    git(temp_dir.path(), &["init", "-q"], 0);
    temp_dir
}

/// Writes `content` to `relative` inside `repo` and commits it at `unix_secs`.
pub fn commit_file(repo: &Path, relative: &str, content: &str, unix_secs: i64) {
    let path = repo.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    git(repo, &["add", relative], unix_secs);
    git(repo, &["commit", "-q", "-m", relative], unix_secs);
}

/// Sets the modification and access time of `path` to `unix_secs`.
pub fn set_mtime(path: &Path, unix_secs: i64) {
    let time = filetime::FileTime::from_unix_time(unix_secs, 0);
    filetime::set_file_times(path, time, time).unwrap();
}

/// Modification time of `path` in whole seconds since the Unix epoch.
pub fn mtime_secs(path: &Path) -> i64 {
    let metadata = fs::metadata(path).unwrap();
    filetime::FileTime::from_last_modification_time(&metadata).unix_seconds()
}
