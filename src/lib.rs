//! # Suite Runner Library / Suite Runner 库
//!
//! This library provides the core functionality for the Suite Runner tool,
//! a configuration-driven verification gate for Python projects. It runs the
//! project's test suite under coverage enforcement and, when the interpreter
//! version allows it, a formatter style check.
//!
//! 此库为 Suite Runner 工具提供核心功能，
//! 这是一个面向 Python 项目、配置驱动的验证门控工具。它在覆盖率约束下运行
//! 项目的测试套件，并在解释器版本允许时执行格式化风格检查。
//!
//! ## Modules / 模块
//!
//! - `core` - Suite configuration, data models and the check pipeline
//! - `infra` - Infrastructure services like command execution and file system lookups
//! - `reporting` - Check result reporting and visualization
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 套件配置、数据模型和检查管道
//! - `infra` - 基础设施服务，如命令执行和文件系统查询
//! - `reporting` - 检查结果报告和可视化
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use self::core::config;
pub use self::core::models;
pub use self::core::pipeline;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
