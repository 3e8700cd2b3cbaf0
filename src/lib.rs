//! # Golden Check Library / Golden Check 库
//!
//! This library provides the functionality behind two developer tools for an
//! executable's script test suite: `check-output`, a golden-output test runner,
//! and `sync-mtime`, which stamps files with their last git commit time.
//!
//! 此库为可执行文件的脚本测试套件提供两个开发者工具的功能：
//! `check-output`（黄金输出测试运行器）和 `sync-mtime`（将文件时间戳设置为最后一次 git 提交时间）。
//!
//! ## Modules / 模块
//!
//! - `core` - Fixtures, pattern matching, the two-phase runner and the mtime synchronizer
//! - `infra` - Process spawning and file system helpers
//! - `reporting` - Console output
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 测试夹具、模式匹配、两阶段运行器和 mtime 同步器
//! - `infra` - 进程派生和文件系统辅助工具
//! - `reporting` - 控制台输出
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::fixture;
pub use crate::core::models;
pub use crate::core::pattern;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    rust_i18n::set_locale(resolve_locale(&locale));
}

/// Maps a requested locale onto one that has a translation file.
/// 将请求的语言区域映射到存在翻译文件的语言区域。
pub fn resolve_locale(requested: &str) -> &str {
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    if available_locales.contains(&requested) {
        requested
    } else {
        requested
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    }
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
