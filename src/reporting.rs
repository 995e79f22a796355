//! # Reporting Module / 报告模块
//!
//! This module handles the presentation of check results. It provides a
//! colorful, formatted console summary and an optional styled HTML report,
//! both with internationalization support.
//!
//! 此模块负责检查结果的呈现。它提供彩色格式化的控制台摘要
//! 以及可选的样式化 HTML 报告，两者均支持国际化。

pub mod console;
pub mod html;

// Re-export common reporting functions
pub use console::{print_failure_details, print_summary};
pub use html::generate_html_report;
