//! # Command Execution Module / 命令执行模块
//!
//! This module provides the process-invocation plumbing of the suite runner:
//! spawning a tool, capturing its combined output, rendering a command line
//! for echo tracing, and splitting a user-supplied custom command.
//!
//! 此模块提供套件运行器的进程调用管道：
//! 启动工具、捕获其合并输出、为回显跟踪渲染命令行，
//! 以及拆分用户提供的自定义命令。

use anyhow::{anyhow, Context, Result};
use colored::*;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::infra::t;

/// Renders a program and its arguments as a single shell-quoted command
/// line, suitable for echo tracing.
///
/// 将程序及其参数渲染为单个经过 shell 引用的命令行，适用于回显跟踪。
pub fn render_command_line(program: &str, args: &[String]) -> String {
    let mut rendered = quote_token(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&quote_token(arg));
    }
    rendered
}

fn quote_token(token: &str) -> String {
    match shlex::try_quote(token) {
        Ok(quoted) => quoted.into_owned(),
        // Tokens with interior NULs cannot be quoted; show them raw.
        // 含有内部 NUL 的词元无法被引用；按原样显示。
        Err(_) => token.to_string(),
    }
}

/// Prints the resolved command line before it is executed, in the style of
/// a shell running with command tracing enabled.
///
/// 在执行前打印解析出的命令行，风格类似启用了命令跟踪的 shell。
pub fn echo_command(program: &str, args: &[String]) {
    println!(
        "{} {}",
        t!("run.command_prefix").blue(),
        render_command_line(program, args)
    );
}

/// Expands and splits a custom command string into its program and argument
/// tokens. Environment variables and `~` are expanded first, then the result
/// is split with shell-like word rules.
///
/// 将自定义命令字符串展开并拆分为程序和参数词元。
/// 先展开环境变量和 `~`，再按类 shell 的分词规则拆分。
pub fn split_custom_command(raw: &str) -> Result<Vec<String>> {
    let expanded = shellexpand::full(raw)
        .with_context(|| format!("Failed to expand command: {raw}"))?
        .to_string();

    let parts = shlex::split(&expanded)
        .ok_or_else(|| anyhow!("Failed to parse command: {}", expanded))?;

    if parts.is_empty() {
        return Err(anyhow!("Empty command after parsing."));
    }

    Ok(parts)
}

/// Spawns a command and captures its stdout and stderr.
/// The output streams are read concurrently and combined into a single
/// string, in the order lines become available.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined stdout and stderr as a `String`.
///
/// 启动一个命令并捕获其 stdout 和 stderr。
/// 两个输出流被并发读取，并按行可用的顺序合并到一个字符串中。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
///
/// # Returns
/// 一个元组，包含：
/// - 进程的 `ExitStatus`（包装在 `io::Result` 中）。
/// - 合并后的 stdout 和 stderr，为一个 `String`。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, String) {
    let mut child = match cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            // Spawning failed, so there is no output to report.
            // 启动失败，因此没有输出可报告。
            return (Err(e), String::new());
        }
    };

    let stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return (
                Err(std::io::Error::other("Failed to capture child stdout")),
                String::new(),
            );
        }
    };
    let stderr = match child.stderr.take() {
        Some(stderr) => stderr,
        None => {
            return (
                Err(std::io::Error::other("Failed to capture child stderr")),
                String::new(),
            );
        }
    };

    // Both reader tasks append to the same buffer.
    // 两个读取任务向同一个缓冲区追加内容。
    let output = Arc::new(tokio::sync::Mutex::new(String::new()));

    let stdout_output = Arc::clone(&output);
    let stdout_handle = tokio::spawn(async move {
        let reader = BufReader::new(stdout);
        let mut lines = reader.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let mut output = stdout_output.lock().await;
            output.push_str(&line);
            output.push('\n');
        }
    });

    let stderr_output = Arc::clone(&output);
    let stderr_handle = tokio::spawn(async move {
        let reader = BufReader::new(stderr);
        let mut lines = reader.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let mut output = stderr_output.lock().await;
            output.push_str(&line);
            output.push('\n');
        }
    });

    let status = child.wait().await;

    // Join the reader tasks so the buffer holds everything the child wrote.
    // 等待读取任务结束，使缓冲区包含子进程写出的全部内容。
    if let Err(e) = stdout_handle.await {
        eprintln!("Failed to join stdout task: {}", e);
    }
    if let Err(e) = stderr_handle.await {
        eprintln!("Failed to join stderr task: {}", e);
    }

    (status, output.lock().await.clone())
}
