//! # Console Reporting Module / 控制台报告模块
//!
//! Colored, translated console output. Everything here writes to stdout.
//!
//! 带颜色和翻译的控制台输出。此处所有内容都写入标准输出。

use colored::*;
use std::path::Path;

use crate::core::models::{CheckFailure, SyncReport};
use crate::infra::command::format_command_line;
use crate::infra::t;

/// Prints how many fixtures were found and where.
pub fn print_discovered(count: usize, tests_dir: &Path) {
    println!(
        "{}",
        t!("check.discovered", count = count, path = tests_dir.display()).cyan()
    );
}

/// Prints the invocation of a fixture as it is collected.
pub fn print_command_line(command: &[String]) {
    println!("{}", format_command_line(command).blue());
}

/// Prints the diagnostic for the failure that ends a run.
///
/// 打印终止运行的失败诊断信息。
///
/// # Arguments / 参数
/// * `failure` - The failure to describe
///               要描述的失败
/// * `stderr` - What the process wrote to stderr, shown when non-empty
///              进程写入 stderr 的内容，非空时显示
///
/// # Output Format / 输出格式
/// ```text
/// Expected success but got error. Output:
/// <stdout>
///
/// Expected output does not match actual.
/// Expected: <golden text>
/// Actual:   <stdout>
/// ```
pub fn print_failure(failure: &CheckFailure, stderr: &str) {
    match failure {
        CheckFailure::UnexpectedError { output, .. } => {
            println!("{}", t!("check.expected_success").red().bold());
            println!("{}", output);
        }
        CheckFailure::UnexpectedSuccess { output, .. } => {
            println!("{}", t!("check.expected_error").red().bold());
            println!("{}", output);
        }
        CheckFailure::OutputMismatch {
            expected, actual, ..
        } => {
            println!("{}", t!("check.mismatch").red().bold());
            println!("{}{}", t!("check.expected_label").yellow(), expected);
            println!("{}{}", t!("check.actual_label").yellow(), actual);
        }
    }

    if !stderr.trim().is_empty() {
        println!("{}", t!("check.stderr_label").yellow());
        println!("{}", stderr.trim_end());
    }
}

/// Prints the closing line of a run in which every fixture passed.
pub fn print_all_passed(count: usize) {
    println!("\n{}", t!("check.all_passed", count = count).green().bold());
}

/// Prints the line for a file whose times were set: `<timestamp> <path>`,
/// followed by the UTC date when the timestamp is representable.
pub fn print_stamped(unix_secs: i64, path: &Path) {
    let date = chrono::DateTime::from_timestamp(unix_secs, 0)
        .map(|dt| format!("({})", dt.format("%Y-%m-%d %H:%M:%S UTC")))
        .unwrap_or_default();
    println!("{} {} {}", unix_secs, path.display(), date.dimmed());
}

/// Prints the counts at the end of an mtime synchronization.
pub fn print_sync_summary(report: &SyncReport) {
    println!(
        "{}",
        t!(
            "mtime.summary",
            stamped = report.stamped,
            untouched = report.untouched
        )
        .green()
    );
}
