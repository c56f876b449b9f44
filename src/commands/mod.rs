//! Subcommand implementations.

pub mod analyze;
pub mod check;
pub mod merge;

use crate::issue::{Issue, Severity};

/// Outcome of a command run, ready for reporting and exit-code mapping.
#[derive(Debug)]
pub struct RunResult {
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub warning_count: usize,
    pub files_checked: usize,
}

pub fn finish(mut issues: Vec<Issue>, files_checked: usize) -> RunResult {
    issues.sort();

    let error_count = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warning_count = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();

    RunResult {
        issues,
        error_count,
        warning_count,
        files_checked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_counts_and_sorts() {
        let issues = vec![
            Issue::resource_name("b.xml", (0, 1), 1, 1, String::new()),
            Issue::parse_error("a.xml", "boom"),
        ];
        let result = finish(issues, 2);
        assert_eq!(result.error_count, 1);
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.issues[0].file_path, "a.xml");
    }
}
