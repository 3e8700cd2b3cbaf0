//! # Check Output Command Module / 输出检查命令模块
//!
//! This module implements the `check-output` command, which runs the
//! executable under test against every fixture and compares its stdout with
//! the golden files.
//!
//! 此模块实现 `check-output` 命令，针对每个测试夹具运行被测可执行文件，
//! 并将其标准输出与黄金文件进行比较。

use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::{
    core::{
        config::{self, RunnerConfig},
        execution::{collect_runs, launch_all},
        fixture::discover_fixtures,
    },
    infra::{fs, t},
    reporting::console,
};

/// Executes the check command with the provided arguments.
///
/// # Arguments
/// * `executable` - Path to the executable under test
/// * `tests_dir` - Fixture directory given on the command line, if any
/// * `config_path` - Optional path to a TOML configuration file
/// * `explicit_lang` - Whether `--lang` was given; if so it wins over the config
///
/// # Returns
/// `Ok` when every fixture passed; otherwise the first error encountered
pub async fn execute(
    executable: PathBuf,
    tests_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    explicit_lang: bool,
) -> Result<()> {
    let runner_config = config::load_config(config_path.as_deref())?;
    if !explicit_lang {
        if let Some(language) = &runner_config.language {
            rust_i18n::set_locale(crate::resolve_locale(language));
        }
    }

    let tests_dir = resolve_tests_dir(tests_dir, &runner_config)?;

    if !fs::is_file(&executable) {
        bail!("{}", t!("check.executable_not_found", path = executable.display()));
    }

    let fixtures = discover_fixtures(&tests_dir)?;
    console::print_discovered(fixtures.len(), &tests_dir);

    let runs = launch_all(&executable, &tests_dir, &fixtures, &runner_config.args)?;
    let summary = collect_runs(runs, &tests_dir, &runner_config.wildcard).await?;

    console::print_all_passed(summary.passed);
    Ok(())
}

/// The command-line directory wins over the configured one.
fn resolve_tests_dir(cli_dir: Option<PathBuf>, runner_config: &RunnerConfig) -> Result<PathBuf> {
    match cli_dir {
        Some(dir) => Ok(dir),
        None => runner_config.resolved_tests_dir(),
    }
}
