//! # Reporting Module / 报告模块
//!
//! This module handles console output for both tools: the per-fixture command
//! lines and failure reports of `check-output`, and the per-file stamp lines
//! of `sync-mtime`.
//!
//! 此模块处理两个工具的控制台输出：`check-output` 的逐个测试夹具命令行和失败报告，
//! 以及 `sync-mtime` 的逐文件时间戳行。

pub mod console;

// Re-export common reporting functions
pub use console::{print_all_passed, print_command_line, print_failure, print_stamped, print_sync_summary};
