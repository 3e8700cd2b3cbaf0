//! # Fixture Discovery Module / 测试夹具发现模块
//!
//! A fixture is a script paired with a golden `<script>.out` file holding the
//! stdout the executable under test must produce for it.
//!
//! 测试夹具是一个脚本与一个黄金文件 `<script>.out` 的配对，
//! 后者保存被测可执行文件针对该脚本必须产生的标准输出。

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Suffix marking a golden output file.
pub const GOLDEN_SUFFIX: &str = ".out";

/// Minimum number of golden files a fixture directory must hold.
pub const MIN_FIXTURES: usize = 2;

/// A script fixture and the golden file describing its expected stdout.
/// 脚本测试夹具及描述其期望标准输出的黄金文件。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixture {
    /// Script identifier: the golden filename without its `.out` suffix.
    /// 脚本标识符：去掉 `.out` 后缀的黄金文件名。
    pub script: String,
    /// Golden filename, relative to the fixture directory.
    /// 黄金文件名，相对于测试夹具目录。
    pub out_file: String,
}

impl Fixture {
    /// Builds a fixture from a golden filename. Returns `None` if the name
    /// does not end in `.out`.
    pub fn from_out_file(out_file: &str) -> Option<Self> {
        let script = out_file.strip_suffix(GOLDEN_SUFFIX)?;
        Some(Self {
            script: script.to_string(),
            out_file: out_file.to_string(),
        })
    }

    /// Whether the executable is expected to exit with status zero.
    ///
    /// Fixtures whose identifier contains `error` are expected to fail. Only
    /// the name is inspected, so a passing script named e.g.
    /// `error_handling_ok` is classified as an expected failure.
    pub fn expects_success(&self) -> bool {
        !self.script.contains("error")
    }

    /// Absolute location of the script inside `tests_dir`.
    pub fn script_path(&self, tests_dir: &Path) -> PathBuf {
        tests_dir.join(&self.script)
    }

    /// Absolute location of the golden file inside `tests_dir`.
    pub fn out_path(&self, tests_dir: &Path) -> PathBuf {
        tests_dir.join(&self.out_file)
    }
}

/// Enumerates the fixtures in `tests_dir`, sorted by golden filename.
///
/// # Arguments
/// * `tests_dir` - Directory holding the scripts and their `.out` files
///
/// # Returns
/// The fixtures in lexicographic order, or an error if the directory cannot
/// be read or holds fewer than two `.out` files.
pub fn discover_fixtures(tests_dir: &Path) -> Result<Vec<Fixture>> {
    let entries = fs::read_dir(tests_dir)
        .with_context(|| t!("check.tests_dir_read_failed", path = tests_dir.display()).to_string())?;

    let mut out_files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| t!("check.tests_dir_read_failed", path = tests_dir.display()).to_string())?;
        if !entry.path().is_file() {
            continue;
        }
        // Non UTF-8 names can never be a fixture identifier.
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(GOLDEN_SUFFIX) {
                out_files.push(name.to_string());
            }
        }
    }

    if out_files.len() < MIN_FIXTURES {
        bail!(
            "{}",
            t!(
                "check.too_few_fixtures",
                path = tests_dir.display(),
                count = out_files.len()
            )
        );
    }

    out_files.sort();
    Ok(out_files
        .iter()
        .filter_map(|name| Fixture::from_out_file(name))
        .collect())
}
