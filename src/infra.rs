//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Suite Runner,
//! including command execution and file system lookups.
//!
//! 此模块为 Suite Runner 提供基础设施服务，
//! 包括命令执行和文件系统查询。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
