//! # Golden Output Execution Module / 黄金输出执行模块
//!
//! This module runs the executable under test against every fixture in two
//! phases. The launch phase starts one process per fixture without waiting on
//! any of them, so they run side by side under the OS scheduler. The
//! collection phase then waits on each process in launch order and validates
//! it, stopping at the first failure.
//!
//! 此模块分两个阶段针对每个测试夹具运行被测可执行文件。
//! 启动阶段为每个测试夹具启动一个进程且不等待任何进程，因此它们由操作系统并行调度。
//! 收集阶段随后按启动顺序等待每个进程并进行验证，遇到第一个失败即停止。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::{
    core::{
        fixture::Fixture,
        models::{CapturedOutput, CheckFailure, CheckSummary, LaunchedRun},
        pattern::pattern_match,
    },
    infra::{command, t},
    reporting::console,
};

/// Builds the invocation for one fixture: `[executable, script_path, extra_args...]`.
pub fn build_command(
    executable: &Path,
    tests_dir: &Path,
    fixture: &Fixture,
    extra_args: &[String],
) -> Vec<String> {
    let mut cmd = Vec::with_capacity(2 + extra_args.len());
    cmd.push(executable.display().to_string());
    cmd.push(fixture.script_path(tests_dir).display().to_string());
    cmd.extend(extra_args.iter().cloned());
    cmd
}

/// Starts a process for every fixture and returns the runs in launch order.
///
/// No process is awaited here and the number of concurrent processes is not
/// bounded.
///
/// # Arguments
/// * `executable` - The executable under test
/// * `tests_dir` - Directory holding the fixtures
/// * `fixtures` - Fixtures to run, in the order they should be collected
/// * `extra_args` - Arguments appended after the script path
///
/// # Returns
/// One `LaunchedRun` per fixture, or an error if a process could not be started
pub fn launch_all(
    executable: &Path,
    tests_dir: &Path,
    fixtures: &[Fixture],
    extra_args: &[String],
) -> Result<Vec<LaunchedRun>> {
    let mut runs = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        let cmd = build_command(executable, tests_dir, fixture, extra_args);
        let child = command::spawn_piped(&cmd[0], &cmd[1..]).with_context(|| {
            t!("check.spawn_failed", command = command::format_command_line(&cmd)).to_string()
        })?;
        runs.push(LaunchedRun {
            command: cmd,
            fixture: fixture.clone(),
            child,
        });
    }
    Ok(runs)
}

/// Waits on every run in order and validates it against its golden file.
///
/// The command line of each run is printed before it is validated. On the
/// first failure the diagnostic is printed and the failure is returned as a
/// [`CheckFailure`] inside the error; runs not yet collected keep running.
///
/// # Arguments
/// * `runs` - Runs returned by [`launch_all`]
/// * `tests_dir` - Directory holding the golden files
/// * `wildcard` - Wildcard token understood by the pattern matcher
pub async fn collect_runs(
    runs: Vec<LaunchedRun>,
    tests_dir: &Path,
    wildcard: &str,
) -> Result<CheckSummary> {
    let mut passed = 0;

    for run in runs {
        let LaunchedRun {
            command: cmd,
            fixture,
            child,
        } = run;

        let captured = command::wait_captured(child).await.with_context(|| {
            t!("check.wait_failed", command = command::format_command_line(&cmd)).to_string()
        })?;

        let out_path = fixture.out_path(tests_dir);
        let expected = fs::read_to_string(&out_path)
            .with_context(|| t!("check.golden_read_failed", path = out_path.display()).to_string())?;

        console::print_command_line(&cmd);

        if let Err(failure) = validate(&fixture, &expected, &captured, wildcard) {
            console::print_failure(&failure, &captured.stderr);
            return Err(failure.into());
        }
        passed += 1;
    }

    Ok(CheckSummary { passed })
}

/// Decides whether a finished fixture passed.
///
/// The exit status is checked against [`Fixture::expects_success`] first;
/// only when it agrees is stdout compared with the golden text.
pub fn validate(
    fixture: &Fixture,
    expected: &str,
    captured: &CapturedOutput,
    wildcard: &str,
) -> Result<(), CheckFailure> {
    let should_succeed = fixture.expects_success();
    let errored = !captured.success();

    if should_succeed && errored {
        return Err(CheckFailure::UnexpectedError {
            script: fixture.script.clone(),
            output: captured.stdout.clone(),
        });
    }
    if !should_succeed && !errored {
        return Err(CheckFailure::UnexpectedSuccess {
            script: fixture.script.clone(),
            output: captured.stdout.clone(),
        });
    }
    if !pattern_match(expected, &captured.stdout, wildcard) {
        return Err(CheckFailure::OutputMismatch {
            script: fixture.script.clone(),
            expected: expected.to_string(),
            actual: captured.stdout.clone(),
        });
    }
    Ok(())
}
