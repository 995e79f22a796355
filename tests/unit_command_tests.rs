//! # Command Module Unit Tests / 命令模块单元测试
//!
//! This module contains unit tests for command-line rendering, custom
//! command splitting and the spawn-and-capture plumbing.
//!
//! 此模块包含命令行渲染、自定义命令拆分以及进程启动与捕获管道的单元测试。

use suite_runner::infra::command::{render_command_line, split_custom_command, spawn_and_capture};

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn test_render_plain_tokens() {
        let rendered = render_command_line("pytest", &["--cov=app".to_string()]);
        assert_eq!(rendered, "pytest --cov=app");
    }

    #[test]
    fn test_render_quotes_tokens_with_spaces() {
        let rendered = render_command_line("pytest", &["-k".to_string(), "a and b".to_string()]);
        // The exact quoting style is up to the shell lexer; the rendered
        // line must split back into the original tokens.
        // 具体的引用风格由 shell 词法决定；渲染出的行必须能拆回原始词元。
        let reparsed = shlex::split(&rendered).unwrap();
        assert_eq!(reparsed, vec!["pytest", "-k", "a and b"]);
    }

    #[test]
    fn test_render_program_without_args() {
        assert_eq!(render_command_line("black", &[]), "black");
    }
}

#[cfg(test)]
mod split_tests {
    use super::*;

    #[test]
    fn test_split_basic_command() {
        let parts = split_custom_command("pytest -x tests").unwrap();
        assert_eq!(parts, vec!["pytest", "-x", "tests"]);
    }

    #[test]
    fn test_split_respects_quoting() {
        let parts = split_custom_command("pytest -k 'slow and db'").unwrap();
        assert_eq!(parts, vec!["pytest", "-k", "slow and db"]);
    }

    #[test]
    fn test_split_expands_environment_variables() {
        unsafe {
            std::env::set_var("SUITE_RUNNER_TEST_RUNNER", "pytest");
        }
        let parts = split_custom_command("$SUITE_RUNNER_TEST_RUNNER -q").unwrap();
        assert_eq!(parts, vec!["pytest", "-q"]);
    }

    #[test]
    fn test_split_rejects_empty_command() {
        assert!(split_custom_command("").is_err());
        assert!(split_custom_command("   ").is_err());
    }

    #[test]
    fn test_split_rejects_unclosed_quote() {
        assert!(split_custom_command("pytest -k 'unclosed").is_err());
    }
}

#[cfg(test)]
#[cfg(unix)]
mod spawn_tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_and_capture_success() {
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c").arg("echo hello");

        let (status, output) = spawn_and_capture(cmd).await;
        assert!(status.unwrap().success());
        assert_eq!(output.trim(), "hello");
    }

    #[tokio::test]
    async fn test_spawn_and_capture_combines_stdout_and_stderr() {
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c").arg("echo out; echo err >&2");

        let (status, output) = spawn_and_capture(cmd).await;
        assert!(status.unwrap().success());
        assert!(output.contains("out"));
        assert!(output.contains("err"));
    }

    #[tokio::test]
    async fn test_spawn_and_capture_reports_exit_code() {
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c").arg("exit 3");

        let (status, _) = spawn_and_capture(cmd).await;
        assert_eq!(status.unwrap().code(), Some(3));
    }

    #[tokio::test]
    async fn test_spawn_and_capture_missing_program_is_an_error() {
        let cmd = tokio::process::Command::new("this_command_definitely_does_not_exist_12345");

        let (status, output) = spawn_and_capture(cmd).await;
        assert!(status.is_err());
        assert!(output.is_empty());
    }
}
