//! # Error Handling Integration Tests / 错误处理集成测试
//!
//! This module contains integration tests for error handling scenarios:
//! broken configurations, missing tools and the `init` escape hatch.
//!
//! 此模块包含错误处理场景的集成测试：
//! 损坏的配置、缺失的工具以及 `init` 的非交互模式。
#![cfg(unix)]

mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

use common::{setup_project_with_venv, venv_argv_path};

fn suite_runner_run(project: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("suite-runner").unwrap();
    cmd.arg("run")
        .arg("--config")
        .arg(project.join("CheckSuite.toml"))
        .arg("--project-dir")
        .arg(project);
    cmd
}

#[cfg(test)]
mod config_error_tests {
    use super::*;

    /// A missing config file is a wrapper error, reported on stderr.
    /// 缺失的配置文件是包装器错误，在 stderr 上报告。
    #[test]
    fn test_nonexistent_config_file() {
        let mut cmd = Command::cargo_bin("suite-runner").unwrap();
        cmd.arg("run")
            .arg("--config")
            .arg("definitely_missing_config.toml");

        cmd.assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Could not locate config file"));
    }

    /// Malformed TOML never starts the pipeline.
    /// 格式错误的 TOML 不会启动管道。
    #[test]
    fn test_invalid_toml_config() {
        let project = TempDir::new().unwrap();
        let content = r#"
language = "en"
# Invalid TOML - missing closing bracket
[tests
runner = "pytest"
"#;
        fs::write(project.path().join("CheckSuite.toml"), content).unwrap();

        suite_runner_run(project.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "Failed to load the suite configuration",
            ));
    }

    /// A malformed version in the exception list is a configuration error,
    /// not a silently ignored entry.
    /// 例外列表中格式错误的版本是配置错误，而不是被静默忽略的条目。
    #[test]
    fn test_invalid_skip_version_entry() {
        let project = setup_project_with_venv("3.10", 0, 0);
        let content = r#"
language = "en"

[tests]
runner = "pytest"
coverage_targets = ["app"]

[format]
checker = "black"
paths = ["app"]
skip_interpreter_versions = ["3.x"]
"#;
        fs::write(project.path().join("CheckSuite.toml"), content).unwrap();

        suite_runner_run(project.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("skip_interpreter_versions"));
    }
}

#[cfg(test)]
mod tool_error_tests {
    use super::*;

    /// A runner missing from the environment directory aborts with the
    /// command-not-found exit code, and the formatter never runs.
    /// 环境目录中缺失的运行器会以"命令未找到"退出码中止，
    /// 且格式化工具不会运行。
    #[test]
    fn test_missing_runner_exits_127() {
        let project = setup_project_with_venv("3.10", 0, 0);
        fs::remove_file(project.path().join("venv").join("bin").join("pytest")).unwrap();

        suite_runner_run(project.path())
            .assert()
            .failure()
            .code(127)
            .stdout(predicate::str::contains("Could not start"));

        assert!(!venv_argv_path(project.path(), "black").exists());
    }

    /// A missing interpreter stops the pipeline before any tool runs.
    /// 缺失的解释器会在任何工具运行之前停止管道。
    #[test]
    fn test_missing_interpreter_exits_127() {
        let project = setup_project_with_venv("3.10", 0, 0);
        fs::remove_file(project.path().join("venv").join("bin").join("python")).unwrap();

        suite_runner_run(project.path())
            .assert()
            .failure()
            .code(127);

        assert!(!venv_argv_path(project.path(), "pytest").exists());
        assert!(!venv_argv_path(project.path(), "black").exists());
    }

    /// Garbage from the version probe is a wrapper error.
    /// 版本探测输出的无效内容是包装器错误。
    #[test]
    fn test_unparseable_probe_output() {
        let project = setup_project_with_venv("not-a-version", 0, 0);

        suite_runner_run(project.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("version probe output"));
    }

    /// An empty custom command is rejected before anything is spawned.
    /// 空的自定义命令会在启动任何进程之前被拒绝。
    #[test]
    fn test_empty_custom_command_is_wrapper_error() {
        let project = setup_project_with_venv("3.10", 0, 0);
        let content = r#"
language = "en"

[tests]
command = "   "
"#;
        fs::write(project.path().join("CheckSuite.toml"), content).unwrap();

        suite_runner_run(project.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Empty command"));
    }
}

#[cfg(test)]
mod init_tests {
    use super::*;
    use suite_runner::config::SuiteConfig;

    /// `init --non-interactive` writes a loadable default configuration.
    /// `init --non-interactive` 会写出一个可加载的默认配置。
    #[test]
    fn test_init_non_interactive_creates_config() {
        let dir = TempDir::new().unwrap();

        let mut cmd = Command::cargo_bin("suite-runner").unwrap();
        cmd.current_dir(dir.path())
            .arg("--lang")
            .arg("en")
            .arg("init")
            .arg("--non-interactive");
        cmd.assert().success();

        let content = fs::read_to_string(dir.path().join("CheckSuite.toml"))
            .expect("CheckSuite.toml not created");
        let config: SuiteConfig = toml::from_str(&content).expect("Generated config must parse");

        assert_eq!(config.language, "en");
        assert_eq!(config.tests.fail_under, 100.0);
        assert_eq!(config.environment.dir, "venv");
        let format = config.format.expect("Default config includes a format step");
        assert_eq!(format.skip_interpreter_versions, vec!["3.8".to_string()]);
    }

    /// Non-interactive initialization replaces an existing file without
    /// prompting.
    /// 非交互式初始化会在不提示的情况下替换现有文件。
    #[test]
    fn test_init_non_interactive_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CheckSuite.toml"), "stale = true\n").unwrap();

        let mut cmd = Command::cargo_bin("suite-runner").unwrap();
        cmd.current_dir(dir.path())
            .arg("--lang")
            .arg("en")
            .arg("init")
            .arg("--non-interactive");
        cmd.assert().success();

        let content = fs::read_to_string(dir.path().join("CheckSuite.toml")).unwrap();
        assert!(toml::from_str::<SuiteConfig>(&content).is_ok());
        assert!(!content.contains("stale"));
    }
}
