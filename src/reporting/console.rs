//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the per-step summary table and the detailed output of
//! failed steps, using color coding to highlight the different statuses.
//!
//! 此模块打印按步骤的摘要表格以及失败步骤的详细输出，
//! 使用颜色编码突出显示不同的状态。

use crate::core::models::StepOutcome;
use crate::infra::t;
use colored::*;

/// Prints a formatted summary of the pipeline run to the console.
///
/// 在控制台打印本次管道运行的格式化摘要。
///
/// # Arguments / 参数
/// * `steps` - The step outcomes, in pipeline order
///             按管道顺序排列的步骤结果
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Check Summary ---
///   - Passed   | Version probe      |     0.03s
///   - Passed   | Test suite         |    12.41s
///   - Failed   | Formatting check   |     0.88s (exit 1)
/// ```
pub fn print_summary(steps: &[StepOutcome], locale: &str) {
    println!("\n{}", t!("report.summary_banner", locale = locale).bold());

    for outcome in steps {
        let status_str = outcome.status_str(locale);
        let duration_str = outcome
            .duration()
            .map(|d| format!("{:.2?}", d))
            .unwrap_or_else(|| "N/A".to_string());
        let name = outcome.step().label(locale);
        let code_str = outcome
            .exit_code()
            .map(|code| format!(" (exit {})", code))
            .unwrap_or_default();

        let status_colored = match outcome {
            StepOutcome::Passed { .. } => status_str.green(),
            StepOutcome::Failed { .. } => status_str.red(),
            StepOutcome::Skipped { .. } => status_str.yellow(),
        };

        println!(
            "  - {:<18} | {:<28} | {:>10}{}",
            status_colored, name, duration_str, code_str
        );
    }
}

/// Prints the captured output of every failed step.
/// The tools' own stdout and stderr are the diagnostic surface, so they are
/// reproduced in full, separated for visual clarity.
///
/// 打印每个失败步骤捕获的输出。
/// 工具自身的 stdout 和 stderr 是诊断依据，因此会完整重现，
/// 并用分隔线保持视觉清晰。
pub fn print_failure_details(failures: &[&StepOutcome], locale: &str) {
    if failures.is_empty() {
        return;
    }

    println!(
        "\n{}",
        t!("report.failure_banner", locale = locale).red().bold()
    );
    println!("{}", "-".repeat(80));

    for (i, outcome) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failures.len(),
            t!("report.header_failure", locale = locale).red(),
            outcome.step().label(locale).cyan()
        );

        if let StepOutcome::Failed { output, code, .. } = outcome {
            println!("\n--- {} ---\n", t!("report.step_log", locale = locale).yellow());
            println!("{}", output);
            println!("{}", t!("report.exit_code", locale = locale, code = code));
            println!("\n{}", "-".repeat(80));
        }
    }
}
