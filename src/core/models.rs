//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures passed between the launch and
//! collection phases of a golden-output run, and the failure type that ends
//! a run.
//!
//! 此模块定义了在黄金输出运行的启动阶段和收集阶段之间传递的数据结构，
//! 以及终止运行的失败类型。

use std::fmt;
use std::process::ExitStatus;
use tokio::process::Child;

use crate::core::fixture::Fixture;
use crate::infra::t;

/// A fixture whose process has been started but not yet collected.
/// Each run is consumed exactly once by the collection phase.
///
/// 已启动但尚未收集结果的测试夹具进程。
/// 每个运行在收集阶段恰好被消费一次。
#[derive(Debug)]
pub struct LaunchedRun {
    /// The full invocation: executable, script path, then extra arguments.
    /// 完整的调用：可执行文件、脚本路径，然后是额外参数。
    pub command: Vec<String>,
    /// The fixture being exercised / 正在运行的测试夹具
    pub fixture: Fixture,
    /// Handle of the running process, with stdout and stderr piped.
    /// 运行中进程的句柄，stdout 和 stderr 已通过管道捕获。
    pub child: Child,
}

/// Everything a finished process produced.
/// 已结束进程产生的全部内容。
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    /// Stdout decoded as UTF-8 (lossy) with `\r\n` normalized to `\n`.
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Enumerates the ways a fixture can fail once its process has finished.
/// The first failure stops the whole run.
///
/// 枚举测试夹具进程结束后可能失败的方式。
/// 第一个失败会终止整个运行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    /// The fixture was expected to succeed but the process exited non-zero.
    /// 期望测试夹具成功，但进程以非零状态退出。
    UnexpectedError { script: String, output: String },
    /// The fixture name marks it as failing, yet the process exited zero.
    /// 测试夹具名称表明其应失败，但进程以零状态退出。
    UnexpectedSuccess { script: String, output: String },
    /// Exit status was as expected but stdout does not satisfy the golden file.
    /// 退出状态符合期望，但标准输出与黄金文件不匹配。
    OutputMismatch {
        script: String,
        expected: String,
        actual: String,
    },
}

impl CheckFailure {
    /// Identifier of the fixture that failed.
    pub fn script(&self) -> &str {
        match self {
            CheckFailure::UnexpectedError { script, .. }
            | CheckFailure::UnexpectedSuccess { script, .. }
            | CheckFailure::OutputMismatch { script, .. } => script,
        }
    }

    /// Short, translated description of the failure kind.
    pub fn reason(&self) -> String {
        match self {
            CheckFailure::UnexpectedError { .. } => t!("check.reason_unexpected_error").to_string(),
            CheckFailure::UnexpectedSuccess { .. } => {
                t!("check.reason_unexpected_success").to_string()
            }
            CheckFailure::OutputMismatch { .. } => t!("check.reason_output_mismatch").to_string(),
        }
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            t!("check.fixture_failed", name = self.script(), reason = self.reason())
        )
    }
}

impl std::error::Error for CheckFailure {}

/// Result of a run in which every fixture passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub passed: usize,
}

/// Counts reported at the end of an mtime synchronization.
/// mtime 同步结束时报告的计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Files whose times were set to their last commit time.
    /// 时间被设置为最后提交时间的文件数。
    pub stamped: usize,
    /// Files without commit history, left as they were.
    /// 没有提交历史、保持原样的文件数。
    pub untouched: usize,
}
