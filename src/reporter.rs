//! Report formatting and printing utilities.
//!
//! This module is separate from the analysis engine so reslint can be used
//! as a library without printing side effects.

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issue::{Issue, Severity};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in a cargo-style format.
///
/// Issues are sorted and displayed with:
/// - Severity and message
/// - Clickable file location (path:line:col)
/// - Source code context with caret indicator
/// - Notes
pub fn print_report(issues: &[Issue]) {
    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = sorted
        .iter()
        .filter_map(|i| i.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in &sorted {
        let severity_str = match issue.severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        println!(
            "{}: {}  {}",
            severity_str,
            issue.message,
            issue.rule.to_string().dimmed().cyan()
        );

        // Clickable location: --> path:line:col (file-level when no span)
        match (issue.line, issue.col) {
            (Some(line), Some(col)) => {
                println!("  {} {}:{}:{}", "-->".blue(), issue.file_path, line, col);
            }
            _ => println!("  {} {}", "-->".blue(), issue.file_path),
        }

        if let Some(source_line) = &issue.source_line
            && let Some(line) = issue.line
        {
            let caret_char = match issue.severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };

            println!("{:>width$} {}", "", "|".blue(), width = max_line_width);
            println!(
                "{:>width$} {} {}",
                line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );
            // Caret pointing to the column (col is 1-based). Use unicode
            // display width for correct positioning with CJK chars.
            let col = issue.col.unwrap_or(1);
            let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            println!(
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret_char,
                width = max_line_width,
                padding = caret_padding
            );
        }

        if let Some(details) = &issue.details {
            println!(
                "{:>width$} {} {} {}",
                "",
                "=".blue(),
                "note:".bold(),
                details,
                width = max_line_width
            );
        }

        println!();
    }
}

/// Print the closing summary line.
pub fn print_summary(error_count: usize, warning_count: usize, files_checked: usize) {
    if error_count == 0 && warning_count == 0 {
        println!(
            "{} {} ({} files checked)",
            SUCCESS_MARK.green(),
            "no issues found".green(),
            files_checked
        );
        return;
    }

    let mut parts = Vec::new();
    if error_count > 0 {
        parts.push(format!("{} error(s)", error_count).red().to_string());
    }
    if warning_count > 0 {
        parts.push(format!("{} warning(s)", warning_count).yellow().to_string());
    }
    println!(
        "{} {} ({} files checked)",
        FAILURE_MARK.red(),
        parts.join(", "),
        files_checked
    );
}

/// Serialize the sorted issues as a JSON array.
pub fn to_json(issues: &[Issue]) -> Result<String> {
    let mut sorted = issues.to_vec();
    sorted.sort();
    Ok(serde_json::to_string_pretty(&sorted)?)
}
