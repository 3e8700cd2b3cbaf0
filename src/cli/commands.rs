//! # Commands Module / 命令模块
//!
//! - `check` - The `check-output` golden-output run
//! - `mtime` - The `sync-mtime` timestamp synchronization
//!
//! - `check` - `check-output` 黄金输出运行
//! - `mtime` - `sync-mtime` 时间戳同步

pub mod check;
pub mod mtime;
