//! # Configuration Module / 配置模块
//!
//! Optional TOML configuration for `check-output`. Every field has a default,
//! so a missing config file and an empty one behave the same.
//!
//! `check-output` 的可选 TOML 配置。每个字段都有默认值，
//! 因此缺少配置文件与空配置文件的行为相同。

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// The wildcard token understood by the golden-output matcher.
pub const DEFAULT_WILDCARD: &str = "[WILDCARD]";

/// Settings for a golden-output run, loaded from a TOML file.
/// 黄金输出运行的设置，从 TOML 文件加载。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// `None` means the system locale is used.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// `None` 表示使用系统语言。
    #[serde(default)]
    pub language: Option<String>,

    /// Directory holding the fixture scripts and their `.out` files.
    /// `~` and environment variables are expanded.
    /// 存放测试夹具脚本及其 `.out` 文件的目录。会展开 `~` 和环境变量。
    #[serde(default = "default_tests_dir")]
    pub tests_dir: String,

    /// Arguments appended after the script path on every invocation.
    /// 每次调用时附加在脚本路径之后的参数。
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Placeholder token in golden files that matches any text.
    /// 黄金文件中可匹配任意文本的占位标记。
    #[serde(default = "default_wildcard")]
    pub wildcard: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            language: None,
            tests_dir: default_tests_dir(),
            args: default_args(),
            wildcard: default_wildcard(),
        }
    }
}

impl RunnerConfig {
    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RunnerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the runner cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.wildcard.is_empty() {
            bail!("{}", t!("config.empty_wildcard"));
        }
        Ok(())
    }

    /// Resolves `tests_dir`, expanding `~` and `$VARS`.
    /// 解析 `tests_dir`，展开 `~` 和 `$VARS`。
    pub fn resolved_tests_dir(&self) -> Result<PathBuf> {
        let expanded = shellexpand::full(&self.tests_dir)
            .with_context(|| t!("config.expand_failed", path = &self.tests_dir).to_string())?;
        Ok(PathBuf::from(expanded.into_owned()))
    }
}

/// Loads the configuration at `path`, or the defaults when no path is given.
///
/// # Arguments
/// * `path` - Optional path to a TOML configuration file
///
/// # Returns
/// The parsed and validated `RunnerConfig`
pub fn load_config(path: Option<&Path>) -> Result<RunnerConfig> {
    let Some(path) = path else {
        return Ok(RunnerConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
    RunnerConfig::from_toml_str(&content)
        .with_context(|| t!("config.parse_failed", path = path.display()).to_string())
}

fn default_tests_dir() -> String {
    "tests".to_string()
}

fn default_args() -> Vec<String> {
    vec!["--reload".to_string()]
}

fn default_wildcard() -> String {
    DEFAULT_WILDCARD.to_string()
}
