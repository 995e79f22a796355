//! # Suite Initialization Module / 套件初始化模块
//!
//! This module provides functionality for initializing a new check suite
//! configuration through an interactive command-line wizard. It helps users
//! create a `CheckSuite.toml` file seeded with the project's package name
//! and the conventional coverage and formatting settings.
//!
//! 此模块通过交互式命令行向导提供初始化新检查套件配置的功能。
//! 它帮助用户创建以项目包名以及常规覆盖率和格式化设置为种子的
//! `CheckSuite.toml` 文件。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Step-by-step guidance for configuration setup
//! - **Package Detection**: Automatic detection of the package name from `pyproject.toml`
//! - **Overwrite Protection**: Confirmation prompts before overwriting existing configurations
//!
//! - **交互式向导**: 配置设置的逐步指导
//! - **包名检测**: 从 `pyproject.toml` 自动检测包名
//! - **覆盖保护**: 覆盖现有配置前的确认提示

use anyhow::{anyhow, Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::config::{FormatConfig, SuiteConfig, TestsConfig};
use crate::infra::t;

/// Represents the `[project]` table of a `pyproject.toml` manifest.
/// Used to detect the package name during initialization.
///
/// 代表 `pyproject.toml` 清单的 `[project]` 表。
/// 用于在初始化期间检测包名。
#[derive(Deserialize)]
struct ProjectSection {
    /// The distribution name of the package / 包的发行名称
    name: String,
}

/// Represents the top-level structure of a `pyproject.toml` manifest.
/// 代表 `pyproject.toml` 清单的顶级结构。
#[derive(Deserialize)]
struct PyProject {
    /// The project table containing package metadata / 包含包元数据的 project 表
    project: Option<ProjectSection>,
}

/// Runs the interactive wizard to generate a `CheckSuite.toml` file.
///
/// This function provides a step-by-step guided process for creating a new
/// suite configuration file seeded with the detected package layout.
///
/// 运行交互式向导以生成 `CheckSuite.toml` 文件。
///
/// 此函数提供逐步指导过程，用于创建以检测到的包布局为种子的
/// 新套件配置文件。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new("CheckSuite.toml");
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!(
            "\n{}",
            t!("init_wizard_welcome", locale = language).cyan().bold()
        );
        println!("{}", t!("init_wizard_description", locale = language));
    }

    if config_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(
                t!(
                    "init_overwrite_prompt",
                    locale = language,
                    path = config_path.display()
                )
                .to_string(),
            )
            .default(false)
            .interact()
            .context(t!("init_user_input_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    if non_interactive {
        let config = default_suite_config(language, "src");
        return write_config(config_path, &config, language);
    }

    // Interactive part starts here
    let detected = match detect_package_name() {
        Ok(name) => {
            println!(
                "{}",
                t!("init_detected_package", locale = language, name = name.green())
            );
            name
        }
        Err(_) => String::new(),
    };

    let package_dir: String = Input::with_theme(&theme)
        .with_prompt(t!("init_package_dir_prompt", locale = language).to_string())
        .default(if detected.is_empty() {
            "src".to_string()
        } else {
            detected
        })
        .interact_text()?;

    let tests_dir: String = Input::with_theme(&theme)
        .with_prompt(t!("init_tests_dir_prompt", locale = language).to_string())
        .default("tests".to_string())
        .interact_text()?;

    let fail_under: f64 = Input::with_theme(&theme)
        .with_prompt(t!("init_fail_under_prompt", locale = language).to_string())
        .default(100.0)
        .interact_text()?;

    let include_format = Confirm::with_theme(&theme)
        .with_prompt(t!("init_include_format_prompt", locale = language).to_string())
        .default(true)
        .interact()
        .context(t!("init_user_input_failed", locale = language).to_string())?;

    let mut config = default_suite_config(language, &package_dir);
    config.tests.coverage_targets = vec![package_dir.clone(), tests_dir.clone()];
    config.tests.fail_under = fail_under;
    if !include_format {
        config.format = None;
    } else if let Some(format) = config.format.as_mut() {
        format.paths = vec![package_dir, tests_dir];
    }

    write_config(config_path, &config, language)
}

/// Builds the default suite configuration used by `--non-interactive` runs
/// and as the baseline for the wizard.
///
/// 构建 `--non-interactive` 运行所用的默认套件配置，
/// 同时作为向导的基线。
fn default_suite_config(language: &str, package_dir: &str) -> SuiteConfig {
    let base = SuiteConfig::default();
    SuiteConfig {
        language: language.to_string(),
        tests: TestsConfig {
            args: vec!["--ignore".to_string(), base.environment.dir.clone()],
            coverage_targets: vec![package_dir.to_string(), "tests".to_string()],
            ..TestsConfig::default()
        },
        format: Some(FormatConfig {
            paths: vec![package_dir.to_string(), "tests".to_string()],
            // Known formatter defect on this interpreter release.
            // 该解释器版本上存在已知的格式化工具缺陷。
            skip_interpreter_versions: vec!["3.8".to_string()],
            ..FormatConfig::default()
        }),
        ..base
    }
}

fn write_config(path: &Path, config: &SuiteConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string).with_context(|| {
        t!("init_write_failed", locale = language, path = path.display())
    })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!(
            "init_success_created",
            locale = language,
            path = path.display()
        )
        .bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}

/// Tries to detect the package name from the local `pyproject.toml`.
/// Returns an error when the manifest is absent, unreadable or has no
/// `[project]` table; the wizard then falls back to a generic default.
///
/// 尝试从本地 `pyproject.toml` 检测包名。
/// 当清单不存在、不可读或没有 `[project]` 表时返回错误；
/// 此时向导会回退到通用默认值。
fn detect_package_name() -> Result<String> {
    let manifest_path = "pyproject.toml";
    let manifest_content = fs::read_to_string(manifest_path)
        .context(t!("init_pyproject_not_found", locale = "en").to_string())?;
    let manifest: PyProject = toml::from_str(&manifest_content)
        .context(t!("init_pyproject_parse_failed", locale = "en").to_string())?;
    manifest
        .project
        .map(|p| p.name)
        .ok_or_else(|| anyhow!("pyproject.toml has no [project] table"))
}
