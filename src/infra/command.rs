//! # Command Execution Module / 命令执行模块
//!
//! Helpers for starting child processes with captured output and turning
//! their results into [`CapturedOutput`].
//!
//! 用于启动捕获输出的子进程并将其结果转换为 [`CapturedOutput`] 的辅助工具。

use std::process::Stdio;
use tokio::process::{Child, Command};

use crate::core::models::CapturedOutput;

/// Starts `program` with `args`, stdout and stderr piped separately.
/// Returns as soon as the process is running; nothing is awaited.
///
/// # Arguments
/// * `program` - The program to execute
/// * `args` - Arguments passed to the program, in order
///
/// # Returns
/// The `Child` handle, or the OS error if the process could not be started.
///
/// 启动 `program` 并传入 `args`，stdout 和 stderr 分别通过管道捕获。
/// 进程启动后立即返回，不等待任何结果。
pub fn spawn_piped(program: &str, args: &[String]) -> std::io::Result<Child> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
}

/// Waits for `child` to exit and reads everything it wrote.
///
/// 等待 `child` 退出并读取其写出的全部内容。
pub async fn wait_captured(child: Child) -> std::io::Result<CapturedOutput> {
    let output = child.wait_with_output().await?;
    Ok(CapturedOutput {
        status: output.status,
        stdout: decode_text(&output.stdout),
        stderr: decode_text(&output.stderr),
    })
}

/// Runs `cmd` to completion and captures its output.
/// Used for short helper invocations such as `git`.
pub async fn run_captured(mut cmd: Command) -> std::io::Result<CapturedOutput> {
    let output = cmd.stdin(Stdio::null()).output().await?;
    Ok(CapturedOutput {
        status: output.status,
        stdout: decode_text(&output.stdout),
        stderr: decode_text(&output.stderr),
    })
}

/// Decodes process output as text, normalizing Windows line endings.
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace("\r\n", "\n")
}

/// Renders an invocation as a single shell-quoted line for display.
///
/// ```
/// use golden_check::infra::command::format_command_line;
///
/// let cmd = vec!["deno".to_string(), "tests/hello world".to_string(), "--reload".to_string()];
/// let line = format_command_line(&cmd);
/// assert!(line.starts_with("deno "));
/// assert!(line.contains("hello world"));
/// ```
pub fn format_command_line(command: &[String]) -> String {
    shlex::try_join(command.iter().map(String::as_str)).unwrap_or_else(|_| command.join(" "))
}
