//! # Check Pipeline Module / 检查管道模块
//!
//! This module orchestrates the verification suite as a strictly sequential
//! pipeline: resolve the tool environment prefix, probe the interpreter
//! version, run the test suite under coverage enforcement, then run the
//! formatting check unless the probed version is in the exception list.
//! The pipeline aborts at the first failing step and records the child exit
//! code for propagation.
//!
//! 此模块将验证套件编排为严格顺序的管道：解析工具环境前缀、
//! 探测解释器版本、在覆盖率约束下运行测试套件，然后在探测到的版本
//! 不在例外列表中时运行格式化检查。管道在第一个失败步骤处中止，
//! 并记录子进程退出码以便传播。

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use std::time::Instant;

use crate::core::config::{SuiteConfig, TestsConfig};
use crate::core::models::{
    FailureReason, SkipReason, StepKind, StepOutcome, SuiteOutcome, SPAWN_FAILURE_CODE,
};
use crate::core::version::{InterpreterVersion, VERSION_PROBE_SNIPPET};
use crate::infra::{command, fs, t};

/// Runs the whole check pipeline for a project.
///
/// # Arguments
/// * `config` - The suite configuration
/// * `project_root` - Absolute path to the project root directory
/// * `forwarded` - Wrapper arguments forwarded verbatim to the test runner
///
/// # Returns
/// The aggregate `SuiteOutcome`; pipeline-level failures (a failing tool)
/// are recorded outcomes, not errors. `Err` is reserved for wrapper-internal
/// problems such as an unparseable probe output or a malformed custom
/// command.
pub async fn run_suite(
    config: &SuiteConfig,
    project_root: &Path,
    forwarded: &[String],
) -> Result<SuiteOutcome> {
    let prefix = fs::resolve_tool_prefix(project_root, &config.environment);
    match &prefix {
        Some(path) => println!(
            "{}",
            t!("run.env_prefix_detected", path = path.display()).cyan()
        ),
        None => println!(
            "{}",
            t!("run.env_prefix_absent", dir = &config.environment.dir).cyan()
        ),
    }

    let mut steps: Vec<StepOutcome> = Vec::new();

    // Step 1: interpreter version probe.
    // 步骤 1：解释器版本探测。
    let interpreter = fs::resolve_tool(prefix.as_deref(), &config.interpreter.program);
    let (probe_outcome, version) = probe_interpreter(&interpreter, project_root).await?;
    steps.push(probe_outcome);
    let Some(version) = version else {
        // No version means the probe failed; the pipeline stops here.
        // 没有版本意味着探测失败；管道到此为止。
        return Ok(SuiteOutcome { steps });
    };

    // Step 2: test suite under coverage enforcement.
    // 步骤 2：覆盖率约束下的测试套件。
    let (program, args) = build_test_invocation(&config.tests, prefix.as_deref(), forwarded)?;
    let tests_outcome = run_step(StepKind::Tests, &program, &args, project_root).await;
    let tests_failed = tests_outcome.is_failure();
    steps.push(tests_outcome);

    if tests_failed {
        // Fail fast: the formatting check never runs after a failed suite.
        // 快速失败：测试套件失败后不再运行格式化检查。
        if config.format.is_some() {
            let label = StepKind::Format.label(&rust_i18n::locale());
            println!(
                "{}",
                t!("run.step_skipped_prior_failure", name = label).yellow()
            );
            steps.push(StepOutcome::Skipped {
                step: StepKind::Format,
                reason: SkipReason::PriorStepFailed,
            });
        }
        return Ok(SuiteOutcome { steps });
    }

    // Step 3: formatting check in check-only mode, unless this interpreter
    // version is in the exception list.
    // 步骤 3：以只检查模式运行格式化检查，除非此解释器版本在例外列表中。
    if let Some(format) = &config.format {
        let excluded = format.parsed_skip_versions()?;
        if version.is_excluded(&excluded) {
            println!(
                "{}",
                t!("run.format_skipped_version", version = version).yellow()
            );
            steps.push(StepOutcome::Skipped {
                step: StepKind::Format,
                reason: SkipReason::ExcludedInterpreter(version),
            });
        } else {
            let program = fs::resolve_tool(prefix.as_deref(), &format.checker);
            let mut args = format.paths.clone();
            args.push("--check".to_string());
            steps.push(run_step(StepKind::Format, &program, &args, project_root).await);
        }
    }

    Ok(SuiteOutcome { steps })
}

/// Asks the interpreter for its own `major.minor` version string.
///
/// A spawn failure is a recorded step failure with the command-not-found
/// exit code. Output that cannot be parsed as a version is a wrapper error.
///
/// 让解释器报告自身的 `major.minor` 版本字符串。
///
/// 启动失败会被记录为带有"命令未找到"退出码的步骤失败。
/// 无法解析为版本号的输出则是包装器错误。
async fn probe_interpreter(
    program: &str,
    project_root: &Path,
) -> Result<(StepOutcome, Option<InterpreterVersion>)> {
    let args = vec!["-c".to_string(), VERSION_PROBE_SNIPPET.to_string()];
    command::echo_command(program, &args);

    let start = Instant::now();
    let mut cmd = tokio::process::Command::new(program);
    cmd.args(&args).kill_on_drop(true).current_dir(project_root);
    let (status_res, output) = command::spawn_and_capture(cmd).await;
    let duration = start.elapsed();

    let status = match status_res {
        Ok(status) => status,
        Err(e) => {
            println!("{}", t!("run.tool_spawn_failed", program = program).red());
            println!("  Error: {}", e);
            let outcome = StepOutcome::Failed {
                step: StepKind::Probe,
                output: e.to_string(),
                reason: FailureReason::Spawn,
                code: SPAWN_FAILURE_CODE,
                duration,
            };
            return Ok((outcome, None));
        }
    };

    if !status.success() {
        println!("{}", t!("run.probe_failed", program = program).red());
        if !output.trim().is_empty() {
            println!("{}", output.trim());
        }
        let outcome = StepOutcome::Failed {
            step: StepKind::Probe,
            output,
            reason: FailureReason::Spawn,
            code: status.code().unwrap_or(1),
            duration,
        };
        return Ok((outcome, None));
    }

    // Interpreters may emit warnings before the version line, so parse the
    // last non-empty line.
    // 解释器可能在版本行之前输出警告，因此解析最后一个非空行。
    let version_line = output
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .to_string();
    let version: InterpreterVersion = version_line
        .parse()
        .with_context(|| format!("Unexpected version probe output: '{}'", output.trim()))?;

    println!(
        "{}",
        t!("run.interpreter_version", version = version).cyan()
    );

    let outcome = StepOutcome::Passed {
        step: StepKind::Probe,
        output,
        duration,
    };
    Ok((outcome, Some(version)))
}

/// Builds the test runner invocation: either the constructed default
/// (runner, fixed args, coverage flags) or the configured custom command.
/// Forwarded wrapper arguments always come last, in their original order.
///
/// 构建测试运行器调用：要么是构造出的默认形式（运行器、固定参数、
/// 覆盖率标志），要么是配置的自定义命令。
/// 转发的包装器参数总是按原始顺序排在最后。
fn build_test_invocation(
    tests: &TestsConfig,
    prefix: Option<&Path>,
    forwarded: &[String],
) -> Result<(String, Vec<String>)> {
    if let Some(raw) = &tests.command {
        // A custom command is taken verbatim and is not prefix-resolved.
        // 自定义命令按原样使用，不进行前缀解析。
        let mut parts = command::split_custom_command(raw)?;
        let program = parts.remove(0);
        parts.extend(forwarded.iter().cloned());
        return Ok((program, parts));
    }

    let program = fs::resolve_tool(prefix, &tests.runner);
    let mut args = tests.args.clone();
    for target in &tests.coverage_targets {
        args.push(format!("--cov={target}"));
    }
    if !tests.coverage_targets.is_empty() {
        args.push("--cov-report=term-missing".to_string());
        args.push(format!("--cov-fail-under={}", tests.fail_under));
    }
    args.extend(forwarded.iter().cloned());
    Ok((program, args))
}

/// Executes one pipeline step to completion and records its outcome.
/// 将一个管道步骤执行到结束并记录其结果。
async fn run_step(step: StepKind, program: &str, args: &[String], project_root: &Path) -> StepOutcome {
    let label = step.label(&rust_i18n::locale());
    println!("{}", t!("run.step_running", name = &label).blue());
    command::echo_command(program, args);

    let start = Instant::now();
    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args).kill_on_drop(true).current_dir(project_root);
    let (status_res, output) = command::spawn_and_capture(cmd).await;
    let duration = start.elapsed();

    if !output.trim().is_empty() {
        println!("{}", output.trim());
    }

    match status_res {
        Err(e) => {
            println!("{}", t!("run.tool_spawn_failed", program = program).red());
            println!("  Error: {}", e);
            StepOutcome::Failed {
                step,
                output: e.to_string(),
                reason: FailureReason::Spawn,
                code: SPAWN_FAILURE_CODE,
                duration,
            }
        }
        Ok(status) if status.success() => {
            println!(
                "{}",
                t!(
                    "run.step_passed",
                    name = &label,
                    duration = format!("{:.2}", duration.as_secs_f64())
                )
                .green()
            );
            StepOutcome::Passed {
                step,
                output,
                duration,
            }
        }
        Ok(status) => {
            let code = status.code().unwrap_or(1);
            println!(
                "{}",
                t!(
                    "run.step_failed",
                    name = &label,
                    code = code,
                    duration = format!("{:.2}", duration.as_secs_f64())
                )
                .red()
            );
            let reason = match step {
                StepKind::Format => FailureReason::Format,
                _ => FailureReason::Suite,
            };
            StepOutcome::Failed {
                step,
                output,
                reason,
                code,
                duration,
            }
        }
    }
}
