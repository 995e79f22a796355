// Shared test helpers for integration tests
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Writes an executable stub tool that records its argument list (one
/// argument per line) next to itself in `<name>.argv`, prints the given
/// stdout lines and exits with the given code.
///
/// 写入一个可执行的桩工具：它将参数列表（每行一个参数）记录在自身旁边的
/// `<name>.argv` 中，打印给定的 stdout 行，并以给定的退出码退出。
pub fn write_stub_tool(dir: &Path, name: &str, exit_code: i32, stdout: &str) -> PathBuf {
    let path = dir.join(name);
    let mut script = String::from("#!/bin/sh\n");
    script.push_str("printf '%s\\n' \"$@\" > \"$0.argv\"\n");
    for line in stdout.lines() {
        let escaped = line.replace('\'', "'\\''");
        script.push_str(&format!("printf '%s\\n' '{}'\n", escaped));
    }
    script.push_str(&format!("exit {}\n", exit_code));
    fs::write(&path, script).expect("Failed to write stub tool");

    let mut perms = fs::metadata(&path)
        .expect("Failed to stat stub tool")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to mark stub tool executable");
    path
}

/// Writes a stub interpreter that reports the given `major.minor` version.
/// 写入一个报告给定 `major.minor` 版本的桩解释器。
pub fn write_python_stub(dir: &Path, version: &str) -> PathBuf {
    write_stub_tool(dir, "python", 0, version)
}

/// The canned configuration used by most integration tests: coverage over
/// two targets, a formatting check over the same paths and a single version
/// exception.
///
/// 大多数集成测试使用的固定配置：覆盖两个目标的覆盖率、
/// 针对相同路径的格式化检查以及单个版本例外。
pub fn default_config_toml() -> String {
    r#"language = "en"

[tests]
runner = "pytest"
coverage_targets = ["app", "tests"]

[format]
checker = "black"
paths = ["app", "tests"]
skip_interpreter_versions = ["3.8"]
"#
    .to_string()
}

/// Creates a temporary project with an isolated tool environment holding
/// stub tools, plus a `CheckSuite.toml` using `default_config_toml`.
///
/// 创建一个临时项目，其隔离工具环境中包含桩工具，
/// 并带有使用 `default_config_toml` 的 `CheckSuite.toml`。
pub fn setup_project_with_venv(python_version: &str, pytest_exit: i32, black_exit: i32) -> TempDir {
    let project = tempdir().expect("Failed to create temporary project directory");
    let bin = project.path().join("venv").join("bin");
    fs::create_dir_all(&bin).expect("Failed to create venv bin directory");

    write_python_stub(&bin, python_version);

    let pytest_output = if pytest_exit == 0 {
        "5 passed\nTOTAL 100%"
    } else {
        "1 failed\nFAIL Required test coverage of 100% not reached."
    };
    write_stub_tool(&bin, "pytest", pytest_exit, pytest_output);

    let black_output = if black_exit == 0 {
        "All done!"
    } else {
        "would reformat app/example.py"
    };
    write_stub_tool(&bin, "black", black_exit, black_output);

    fs::write(project.path().join("CheckSuite.toml"), default_config_toml())
        .expect("Failed to write CheckSuite.toml");

    project
}

/// Path of the argv recording left behind by a stub in the project's
/// environment directory.
/// 桩工具在项目环境目录中留下的参数记录文件的路径。
pub fn venv_argv_path(project: &Path, tool: &str) -> PathBuf {
    project
        .join("venv")
        .join("bin")
        .join(format!("{tool}.argv"))
}

/// Reads a recorded argument list, one argument per line.
/// 读取记录下来的参数列表，每行一个参数。
pub fn read_argv(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Missing argv recording: {}", path.display()))
        .lines()
        .map(|line| line.to_string())
        .collect()
}
