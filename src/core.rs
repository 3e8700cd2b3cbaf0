//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Golden Check,
//! including data models, configuration, fixture discovery, output matching,
//! the golden-output runner and the mtime synchronizer.
//!
//! 此模块包含 Golden Check 的核心功能，
//! 包括数据模型、配置、测试夹具发现、输出匹配、黄金输出运行器和 mtime 同步器。

pub mod models;
pub mod config;
pub mod execution;
pub mod fixture;
pub mod mtime;
pub mod pattern;

// Re-exports
pub use config::RunnerConfig;
pub use execution::{collect_runs, launch_all};
pub use fixture::{discover_fixtures, Fixture};
pub use models::CheckFailure;
pub use mtime::{sync_tree, CommitTimeSource, GitCommitTime};
pub use pattern::pattern_match;
