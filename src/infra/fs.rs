//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as resolving paths and rewriting file timestamps.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如解析路径和重写文件时间戳。

use anyhow::{Context, Result};
use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Checks if a path exists and is a regular file.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a file, `false` otherwise
pub fn is_file(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}

/// Sets both the access and the modification time of `path` to `unix_secs`.
///
/// # Arguments
/// * `path` - File to stamp
/// * `unix_secs` - Seconds since the Unix epoch
pub fn set_file_times(path: &Path, unix_secs: i64) -> std::io::Result<()> {
    let time = FileTime::from_unix_time(unix_secs, 0);
    filetime::set_file_times(path, time, time)
}

/// Renders `path` relative to `root` when possible, for display and for
/// passing to tools that run inside `root`.
pub fn relative_to<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
