//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the suite
//! runner: the pipeline steps, the possible outcome of each step and the
//! aggregate outcome of a whole run.
//!
//! 此模块定义了整个套件运行器中使用的核心数据结构：
//! 管道步骤、每个步骤的可能结果以及整次运行的汇总结果。

use crate::core::version::InterpreterVersion;
use crate::infra::t;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exit code reported when a tool could not be started at all, matching the
/// shell convention for a missing command.
/// 当工具完全无法启动时报告的退出码，与 shell 中命令缺失的约定一致。
pub const SPAWN_FAILURE_CODE: i32 = 127;

/// Identifies one step of the check pipeline.
/// 标识检查管道中的一个步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// The interpreter version probe.
    /// 解释器版本探测。
    Probe,
    /// The test suite run under coverage enforcement.
    /// 在覆盖率约束下运行的测试套件。
    Tests,
    /// The formatter invoked in check-only mode.
    /// 以只检查模式调用的格式化工具。
    Format,
}

impl StepKind {
    /// Gets the localized display label for this step.
    /// 获取此步骤的本地化显示标签。
    pub fn label(&self, locale: &str) -> String {
        match self {
            StepKind::Probe => t!("step.probe", locale = locale).to_string(),
            StepKind::Tests => t!("step.tests", locale = locale).to_string(),
            StepKind::Format => t!("step.format", locale = locale).to_string(),
        }
    }
}

/// Enumerates the possible reasons for a step failure.
/// 枚举步骤失败的可能原因。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum FailureReason {
    /// The test runner exited non-zero, either because a test assertion
    /// failed or because measured coverage fell below the threshold. The
    /// runner's own output is the diagnostic surface for telling the two
    /// apart.
    /// 测试运行器以非零退出，原因可能是测试断言失败，
    /// 也可能是实测覆盖率低于阈值。区分两者要看运行器自身的输出。
    Suite,
    /// The formatter found non-conforming files.
    /// 格式化工具发现了不符合规范的文件。
    Format,
    /// The referenced executable was absent from the resolved path or could
    /// not be started.
    /// 引用的可执行文件不在解析出的路径中，或无法启动。
    Spawn,
}

/// Enumerates the reasons a step can be skipped without failing the run.
/// 枚举步骤可以在不使运行失败的情况下被跳过的原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The probed interpreter version is in the configured exception list.
    /// 探测到的解释器版本在配置的例外列表中。
    ExcludedInterpreter(InterpreterVersion),
    /// An earlier step already failed, so this step never ran.
    /// 之前的步骤已经失败，因此此步骤从未运行。
    PriorStepFailed,
}

/// Represents the final result of a single pipeline step.
/// 表示单个管道步骤的最终结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The step completed successfully.
    /// 步骤成功完成。
    Passed {
        /// The step that was executed / 已执行的步骤
        step: StepKind,
        /// The combined output of the underlying tool / 底层工具的合并输出
        output: String,
        /// The time taken by the step / 步骤花费的时间
        duration: Duration,
    },
    /// The step failed and aborted the pipeline.
    /// 步骤失败并中止了管道。
    Failed {
        /// The step that failed / 失败的步骤
        step: StepKind,
        /// The combined output of the underlying tool / 底层工具的合并输出
        output: String,
        /// The specific reason for the failure / 失败的具体原因
        reason: FailureReason,
        /// The child process exit code propagated by the wrapper
        /// 包装器传播的子进程退出码
        code: i32,
        /// The time taken before the failure / 失败前花费的时间
        duration: Duration,
    },
    /// The step was deliberately not run.
    /// 步骤被有意地不予运行。
    Skipped {
        /// The step that was skipped / 被跳过的步骤
        step: StepKind,
        /// Why the step was skipped / 跳过的原因
        reason: SkipReason,
    },
}

impl StepOutcome {
    /// Gets the step this outcome belongs to.
    pub fn step(&self) -> StepKind {
        match self {
            StepOutcome::Passed { step, .. } => *step,
            StepOutcome::Failed { step, .. } => *step,
            StepOutcome::Skipped { step, .. } => *step,
        }
    }

    /// Checks if the outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed { .. })
    }

    /// Gets the child exit code for failed steps, `None` otherwise.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            StepOutcome::Failed { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Gets the captured tool output. Returns an empty string for skipped
    /// steps.
    /// 获取捕获的工具输出。对于被跳过的步骤返回空字符串。
    pub fn output(&self) -> &str {
        match self {
            StepOutcome::Passed { output, .. } => output,
            StepOutcome::Failed { output, .. } => output,
            StepOutcome::Skipped { .. } => "",
        }
    }

    /// Gets the duration of the step. Returns `None` for skipped steps.
    /// 获取步骤的持续时间。对于被跳过的步骤返回 `None`。
    pub fn duration(&self) -> Option<Duration> {
        match self {
            StepOutcome::Passed { duration, .. } => Some(*duration),
            StepOutcome::Failed { duration, .. } => Some(*duration),
            StepOutcome::Skipped { .. } => None,
        }
    }

    /// Gets the status of the step as a localized string for display.
    /// 以本地化字符串形式获取步骤状态以供显示。
    pub fn status_str(&self, locale: &str) -> String {
        match self {
            StepOutcome::Passed { .. } => t!("report.status_passed", locale = locale).to_string(),
            StepOutcome::Failed { .. } => t!("report.status_failed", locale = locale).to_string(),
            StepOutcome::Skipped { .. } => t!("report.status_skipped", locale = locale).to_string(),
        }
    }

    /// Gets the CSS class used for this status in the HTML report.
    pub fn status_class(&self) -> &str {
        match self {
            StepOutcome::Passed { .. } => "status-Passed",
            StepOutcome::Failed { .. } => "status-Failed",
            StepOutcome::Skipped { .. } => "status-Skipped",
        }
    }
}

/// The aggregate outcome of a whole pipeline run.
///
/// The pipeline aborts on the first failing step, so at most one outcome in
/// `steps` is a failure, and its exit code becomes the wrapper's.
///
/// 整个管道运行的汇总结果。
///
/// 管道在第一个失败步骤处中止，因此 `steps` 中至多有一个失败结果，
/// 其退出码会成为包装器的退出码。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteOutcome {
    /// Outcomes in pipeline order / 按管道顺序排列的结果
    pub steps: Vec<StepOutcome>,
}

impl SuiteOutcome {
    /// Checks whether any step failed.
    pub fn has_failures(&self) -> bool {
        self.steps.iter().any(StepOutcome::is_failure)
    }

    /// The process exit code for this run: the failing step's child exit
    /// code, or 0 when every executed step passed. Codes outside the 0-255
    /// range collapse to 1.
    ///
    /// 本次运行的进程退出码：失败步骤的子进程退出码，
    /// 或当所有已执行步骤都通过时为 0。超出 0-255 范围的代码折叠为 1。
    pub fn exit_code(&self) -> u8 {
        for outcome in &self.steps {
            if let StepOutcome::Failed { code, .. } = outcome {
                return u8::try_from(*code).unwrap_or(1);
            }
        }
        0
    }
}
