//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Suite Runner,
//! including the suite configuration, data models, interpreter version
//! handling and the check pipeline itself.
//!
//! 此模块包含 Suite Runner 的核心功能，
//! 包括套件配置、数据模型、解释器版本处理以及检查管道本身。

pub mod config;
pub mod models;
pub mod pipeline;
pub mod version;

// Re-exports
pub use config::SuiteConfig;
pub use models::{StepOutcome, SuiteOutcome};
pub use pipeline::run_suite;
pub use version::InterpreterVersion;
