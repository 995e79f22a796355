//! # HTML Reporting Module / HTML 报告模块
//!
//! This module generates a styled, self-contained HTML report of a pipeline
//! run: summary statistics, a per-step results table and collapsible output
//! for failed steps.
//!
//! 此模块生成一次管道运行的样式化自包含 HTML 报告：
//! 摘要统计、按步骤的结果表格以及失败步骤的可折叠输出。

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;

use crate::core::models::StepOutcome;
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Generates an HTML report from the step outcomes of a pipeline run.
///
/// 从一次管道运行的步骤结果生成 HTML 报告。
///
/// # Arguments / 参数
/// * `steps` - The step outcomes, in pipeline order
///             按管道顺序排列的步骤结果
/// * `output_path` - The file path where the HTML report will be saved
///                   保存 HTML 报告的文件路径
/// * `locale` - The locale to use for internationalization
///              用于国际化的语言环境
///
/// # Errors / 错误
/// This function will return an error if the output file cannot be written
/// to the specified path.
///
/// 当输出文件无法写入指定路径时，此函数会返回错误。
pub fn generate_html_report(steps: &[StepOutcome], output_path: &Path, locale: &str) -> Result<()> {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><title>{}</title>",
        t!("html_report.title", locale = locale)
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");
    html.push_str(&format!(
        "<h1>{}</h1>",
        t!("html_report.main_header", locale = locale)
    ));

    // Add summary statistics
    let total = steps.len();
    let passed = steps
        .iter()
        .filter(|s| matches!(s, StepOutcome::Passed { .. }))
        .count();
    let failed = steps.iter().filter(|s| s.is_failure()).count();
    let skipped = steps
        .iter()
        .filter(|s| matches!(s, StepOutcome::Skipped { .. }))
        .count();

    html.push_str("<div class='summary-container'>");
    html.push_str(&format!(
        "<div class='summary-item'><span class='count'>{}</span><span class='label'>{}</span></div>",
        total,
        t!("html_report.summary.total", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count passed-text'>{}</span><span class='label'>{}</span></div>",
        passed,
        t!("html_report.summary.passed", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count failed-text'>{}</span><span class='label'>{}</span></div>",
        failed,
        t!("html_report.summary.failed", locale = locale)
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count skipped-text'>{}</span><span class='label'>{}</span></div>",
        skipped,
        t!("html_report.summary.skipped", locale = locale)
    ));
    html.push_str("</div>");

    // Add results table
    html.push_str("<table><thead><tr>");
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.step", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='status-col'>{}</th>",
        t!("html_report.table.header.status", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='duration-cell'>{}</th>",
        t!("html_report.table.header.duration", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='code-cell'>{}</th>",
        t!("html_report.table.header.exit_code", locale = locale)
    ));
    html.push_str("</tr></thead><tbody>");

    for (i, outcome) in steps.iter().enumerate() {
        let status_str = outcome.status_str(locale);
        let status_class = outcome.status_class();
        let duration_str = outcome
            .duration()
            .map(|d| format!("{:.2}s", d.as_secs_f64()))
            .unwrap_or_else(|| "N/A".to_string());
        let code_str = outcome
            .exit_code()
            .map(|code| code.to_string())
            .unwrap_or_default();

        let output_id = format!("output-{}", i);
        let error_details = if outcome.is_failure() {
            let escaped_output = escape_html(outcome.output());
            format!(
                "<tr id='{}' style='display:none;'><td colspan='4'><pre class='output-content'>{}</pre></td></tr>",
                output_id, escaped_output
            )
        } else {
            String::new()
        };

        let output_toggle = if outcome.is_failure() {
            format!(
                "<div class='output-toggle' onclick=\"toggleOutput('{}')\">{}</div>",
                output_id,
                t!("html_report.toggle_output", locale = locale)
            )
        } else {
            String::new()
        };

        html.push_str("<tr>");
        html.push_str(&format!(
            "<td>{}</td>",
            escape_html(&outcome.step().label(locale))
        ));
        html.push_str(&format!(
            "<td class='status-col'><div class='status-cell {}'>{}</div>{}</td>",
            status_class, status_str, output_toggle
        ));
        html.push_str(&format!("<td class='duration-cell'>{}</td>", duration_str));
        html.push_str(&format!("<td class='code-cell'>{}</td>", code_str));
        html.push_str("</tr>");
        html.push_str(&error_details);
    }

    html.push_str("</tbody></table>");
    html.push_str(&format!(
        "<p class='generated-at'>{}</p>",
        t!(
            "html_report.generated_at",
            locale = locale,
            timestamp = Local::now().format("%Y-%m-%d %H:%M:%S")
        )
    ));
    html.push_str("<script>");
    html.push_str(HTML_SCRIPT);
    html.push_str("</script></body></html>");

    fs::write(output_path, html)?;
    Ok(())
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
