//! # Suite Configuration Module / 套件配置模块
//!
//! This module defines the structure of the `CheckSuite.toml` configuration
//! file and the loader for it. The configuration describes which tools make
//! up the verification suite and how they are invoked.
//!
//! 此模块定义 `CheckSuite.toml` 配置文件的结构及其加载器。
//! 配置描述了验证套件由哪些工具组成以及如何调用它们。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::version::InterpreterVersion;

/// Settings for the isolated tool environment lookup.
/// When the named directory exists inside the project, every tool is invoked
/// through its executable subdirectory instead of the ambient search path.
///
/// 隔离工具环境查询的设置。
/// 当项目中存在指定目录时，所有工具都会通过其可执行文件子目录调用，
/// 而不是使用环境变量中的搜索路径。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvironmentConfig {
    /// Name of the environment directory, relative to the project root.
    /// 环境目录的名称，相对于项目根目录。
    #[serde(default = "default_env_dir")]
    pub dir: String,
    /// Subdirectory of the environment that holds the executables.
    /// 环境中存放可执行文件的子目录。
    #[serde(default = "default_bin_dir")]
    pub bin_dir: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            dir: default_env_dir(),
            bin_dir: default_bin_dir(),
        }
    }
}

/// Settings for the interpreter runtime that backs the suite.
/// 套件所依赖的解释器运行时的设置。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InterpreterConfig {
    /// Program name of the interpreter, resolved through the environment
    /// prefix when one is present.
    /// 解释器的程序名称，当存在环境前缀时通过该前缀解析。
    #[serde(default = "default_interpreter")]
    pub program: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            program: default_interpreter(),
        }
    }
}

/// Settings for the test execution step.
/// 测试执行步骤的设置。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestsConfig {
    /// Program name of the test runner.
    /// 测试运行器的程序名称。
    #[serde(default = "default_runner")]
    pub runner: String,
    /// Fixed arguments always passed to the runner, before any coverage
    /// flags or forwarded arguments.
    /// 总是传递给运行器的固定参数，位于任何覆盖率标志或转发参数之前。
    #[serde(default)]
    pub args: Vec<String>,
    /// Coverage measurement targets. Each entry becomes a `--cov=<target>`
    /// flag. When empty, no coverage instrumentation is requested.
    /// 覆盖率测量目标。每个条目都会变成一个 `--cov=<target>` 标志。
    /// 为空时不请求覆盖率插桩。
    #[serde(default)]
    pub coverage_targets: Vec<String>,
    /// Minimum total coverage percentage for the run to succeed.
    /// 本次运行成功所需的最低总覆盖率百分比。
    #[serde(default = "default_fail_under")]
    pub fail_under: f64,
    /// Optional custom command line that replaces the constructed runner
    /// invocation entirely. Forwarded arguments are still appended.
    /// 可选的自定义命令行，完全替换构造出的运行器调用。
    /// 转发参数仍会被追加。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            runner: default_runner(),
            args: vec![],
            coverage_targets: vec![],
            fail_under: default_fail_under(),
            command: None,
        }
    }
}

/// Settings for the formatting check step. The whole section is optional;
/// without it no formatting check runs.
/// 格式化检查步骤的设置。整个部分是可选的；缺省时不运行格式化检查。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormatConfig {
    /// Program name of the source formatter.
    /// 源码格式化工具的程序名称。
    #[serde(default = "default_checker")]
    pub checker: String,
    /// Paths handed to the formatter, relative to the project root.
    /// 交给格式化工具的路径，相对于项目根目录。
    #[serde(default)]
    pub paths: Vec<String>,
    /// Interpreter versions on which the formatting check is skipped.
    /// This is an explicit exception list; only versions named here are
    /// skipped, newer versions are never excluded by extrapolation.
    /// 在这些解释器版本上跳过格式化检查。
    /// 这是一个显式的例外列表；只有此处列出的版本会被跳过，
    /// 较新的版本不会被推断排除。
    #[serde(default)]
    pub skip_interpreter_versions: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            checker: default_checker(),
            paths: vec![],
            skip_interpreter_versions: vec![],
        }
    }
}

impl FormatConfig {
    /// Parses the configured exception list into interpreter versions.
    /// A malformed entry is a configuration error, not a silent no-op.
    ///
    /// 将配置的例外列表解析为解释器版本。
    /// 格式错误的条目是配置错误，而不是静默忽略。
    pub fn parsed_skip_versions(&self) -> Result<Vec<InterpreterVersion>> {
        self.skip_interpreter_versions
            .iter()
            .map(|raw| {
                raw.parse::<InterpreterVersion>().with_context(|| {
                    format!("Invalid entry in skip_interpreter_versions: '{raw}'")
                })
            })
            .collect()
    }
}

/// Represents the entire check suite configuration, loaded from a TOML file.
/// 代表从 TOML 文件加载的整个检查套件配置。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuiteConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// Isolated tool environment lookup settings.
    /// 隔离工具环境查询设置。
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Interpreter runtime settings.
    /// 解释器运行时设置。
    #[serde(default)]
    pub interpreter: InterpreterConfig,

    /// Test execution step settings.
    /// 测试执行步骤设置。
    #[serde(default)]
    pub tests: TestsConfig,

    /// Formatting check step settings, absent when the suite has none.
    /// 格式化检查步骤设置，套件没有该步骤时缺省。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatConfig>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            environment: EnvironmentConfig::default(),
            interpreter: InterpreterConfig::default(),
            tests: TestsConfig::default(),
            format: None,
        }
    }
}

/// Loads and parses a suite configuration file.
/// 加载并解析套件配置文件。
pub fn load_suite_config(path: &Path) -> Result<SuiteConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: SuiteConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

fn default_language() -> String {
    "en".to_string()
}

fn default_env_dir() -> String {
    "venv".to_string()
}

fn default_bin_dir() -> String {
    "bin".to_string()
}

fn default_interpreter() -> String {
    "python".to_string()
}

fn default_runner() -> String {
    "pytest".to_string()
}

fn default_checker() -> String {
    "black".to_string()
}

fn default_fail_under() -> f64 {
    100.0
}
