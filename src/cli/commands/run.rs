//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command of the Suite Runner CLI,
//! which executes the check pipeline described by the suite configuration
//! and propagates the first failing step's exit code.
//!
//! 此模块实现 Suite Runner CLI 的 `run` 命令，
//! 执行套件配置所描述的检查管道，并传播第一个失败步骤的退出码。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::{
    core::{
        config::{self, SuiteConfig},
        pipeline::run_suite,
    },
    infra::{fs, t},
    reporting::{
        console::{print_failure_details, print_summary},
        html::generate_html_report,
    },
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `config` - Path to the suite configuration file
/// * `project_dir` - Path to the project directory
/// * `html` - Optional path for HTML report output
/// * `runner_args` - Arguments forwarded verbatim to the test runner
/// * `lang_flag` - The `--lang` value when it was given explicitly
///
/// # Returns
/// The process exit code: 0 on success, otherwise the failing step's child
/// exit code.
pub async fn execute(
    config: PathBuf,
    project_dir: PathBuf,
    html: Option<PathBuf>,
    runner_args: Vec<String>,
    lang_flag: Option<String>,
) -> Result<ExitCode> {
    let (suite_config, config_path) = setup_and_parse_config(&config)?;

    // An explicit --lang wins over the configured language.
    // 显式的 --lang 优先于配置中的语言。
    let locale = lang_flag.unwrap_or_else(|| suite_config.language.clone());
    rust_i18n::set_locale(&locale);

    let project_root = fs::absolute_path(&project_dir).with_context(|| {
        t!(
            "project_dir_not_found",
            locale = &locale,
            path = project_dir.display()
        )
    })?;

    println!(
        "{}",
        t!(
            "project_root_detected",
            locale = &locale,
            path = project_root.display()
        )
    );
    println!(
        "{}",
        t!(
            "loading_suite_config",
            locale = &locale,
            path = config_path.display()
        )
    );

    let outcome = run_suite(&suite_config, &project_root, &runner_args).await?;

    print_summary(&outcome.steps, &locale);

    if let Some(report_path) = &html {
        println!("\nGenerating HTML report at: {}", report_path.display());
        if let Err(e) = generate_html_report(&outcome.steps, report_path, &locale) {
            eprintln!("{} {}", "Failed to generate HTML report:".red(), e);
        }
    }

    if outcome.has_failures() {
        let failures: Vec<_> = outcome.steps.iter().filter(|s| s.is_failure()).collect();
        print_failure_details(&failures, &locale);
        println!("\n{}", t!("run.suite_failed", locale = &locale).red().bold());
    } else {
        println!(
            "\n{}",
            t!("run.all_checks_passed", locale = &locale).green().bold()
        );
    }

    Ok(ExitCode::from(outcome.exit_code()))
}

/// Sets up and parses the suite configuration file.
/// 定位并解析套件配置文件。
fn setup_and_parse_config(config_path_arg: &PathBuf) -> Result<(SuiteConfig, PathBuf)> {
    // For config parsing, we don't have the locale yet. Use English as a default.
    let locale = "en";
    let config_path = std::fs::canonicalize(config_path_arg).with_context(|| {
        t!(
            "config_read_failed_path",
            locale = locale,
            path = config_path_arg.display()
        )
    })?;

    let suite_config = config::load_suite_config(&config_path)
        .with_context(|| t!("config_parse_failed", locale = locale))?;

    Ok((suite_config, config_path))
}
