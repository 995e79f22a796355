//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the file system lookups behind tool resolution:
//! detecting the isolated tool environment and turning bare tool names into
//! invocable program paths.
//!
//! 此模块提供工具解析背后的文件系统查询：
//! 检测隔离工具环境，并将裸工具名称转换为可调用的程序路径。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::EnvironmentConfig;

/// Determines the executable prefix for tool invocations.
///
/// When `<project_root>/<env.dir>` exists and is a directory, tools are
/// invoked through its executable subdirectory and the returned path is that
/// subdirectory. Absence is not an error; it simply means tools resolve from
/// the ambient search path.
///
/// 确定工具调用的可执行文件前缀。
///
/// 当 `<project_root>/<env.dir>` 存在且为目录时，工具通过其可执行文件
/// 子目录调用，返回值即该子目录。目录不存在不是错误；
/// 这只意味着工具将从环境搜索路径解析。
pub fn resolve_tool_prefix(project_root: &Path, env: &EnvironmentConfig) -> Option<PathBuf> {
    let env_dir = project_root.join(&env.dir);
    if is_directory(&env_dir) {
        Some(env_dir.join(&env.bin_dir))
    } else {
        None
    }
}

/// Turns a bare tool name into the program string to execute: the prefixed
/// absolute path when an environment prefix is present, the bare name
/// otherwise.
///
/// 将裸工具名称转换为要执行的程序字符串：存在环境前缀时为带前缀的
/// 绝对路径，否则为裸名称。
pub fn resolve_tool(prefix: Option<&Path>, tool: &str) -> String {
    match prefix {
        Some(prefix) => prefix.join(tool).display().to_string(),
        None => tool.to_string(),
    }
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
