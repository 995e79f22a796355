//! # CLI Commands Module / 命令行子命令模块
//!
//! Implementations of the `run` and `init` subcommands.
//! `run` 和 `init` 子命令的实现。

pub mod init;
pub mod run;
