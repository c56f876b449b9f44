use std::{cmp::Ordering, fmt};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Identities of the individual checks.
///
/// The kebab-case id of a rule doubles as its suppression token: an element
/// attribute `ignore="deprecated-color"` silences that rule for the element
/// and its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    DeprecatedColor,
    ResourceNameFormat,
    BindingExpressionFormat,
    TodoMissingAssignee,
    TodoMissingDate,
    TodoImproperFormat,
    ParseError,
}

impl Rule {
    pub fn id(self) -> &'static str {
        match self {
            Rule::DeprecatedColor => "deprecated-color",
            Rule::ResourceNameFormat => "resource-name-format",
            Rule::BindingExpressionFormat => "binding-expression-format",
            Rule::TodoMissingAssignee => "todo-missing-assignee",
            Rule::TodoMissingDate => "todo-missing-date",
            Rule::TodoImproperFormat => "todo-improper-format",
            Rule::ParseError => "parse-error",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single diagnostic, anchored to a byte span in the original document.
///
/// Spans are half-open byte ranges `[start, end)`. Line and column are
/// 1-based and derived from the span start at the time the issue (or the
/// usage record it came from) was produced, so an `Issue` stays printable
/// without re-reading the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub file_path: String,
    pub line: Option<usize>,
    pub col: Option<usize>,
    pub span: Option<(usize, usize)>,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    pub details: Option<String>,
    pub source_line: Option<String>,
}

impl Issue {
    pub fn deprecated_color(
        file_path: &str,
        span: (usize, usize),
        line: usize,
        col: usize,
        source_line: String,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: Some(col),
            span: Some(span),
            message: "Deprecated colours should not be used".to_string(),
            severity: Severity::Error,
            rule: Rule::DeprecatedColor,
            details: None,
            source_line: Some(source_line),
        }
    }

    /// File-level variant for usages recorded without a resolvable span.
    pub fn deprecated_color_in_file(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: None,
            col: None,
            span: None,
            message: "Deprecated colours should not be used".to_string(),
            severity: Severity::Error,
            rule: Rule::DeprecatedColor,
            details: None,
            source_line: None,
        }
    }

    pub fn resource_name(
        file_path: &str,
        span: (usize, usize),
        line: usize,
        col: usize,
        source_line: String,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: Some(col),
            span: Some(span),
            message: "Improper resource name format".to_string(),
            severity: Severity::Warning,
            rule: Rule::ResourceNameFormat,
            details: Some("resource names use lower snake_case without a leading underscore".to_string()),
            source_line: Some(source_line),
        }
    }

    pub fn binding_format(
        file_path: &str,
        span: (usize, usize),
        line: usize,
        col: usize,
        source_line: String,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: Some(col),
            span: Some(span),
            message: "Put one whitespace between the braces and the expression".to_string(),
            severity: Severity::Warning,
            rule: Rule::BindingExpressionFormat,
            details: None,
            source_line: Some(source_line),
        }
    }

    pub fn todo(
        rule: Rule,
        message: &str,
        file_path: &str,
        span: (usize, usize),
        line: usize,
        col: usize,
        source_line: String,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: Some(col),
            span: Some(span),
            message: message.to_string(),
            severity: Severity::Error,
            rule,
            details: Some(
                "TODOs must follow the format `TODO-Assignee (yyyy-mm-dd): comment`".to_string(),
            ),
            source_line: Some(source_line),
        }
    }

    pub fn parse_error(file_path: &str, error: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(1),
            col: Some(1),
            span: None,
            message: format!("Failed to parse: {}", error),
            severity: Severity::Error,
            rule: Rule::ParseError,
            details: None,
            source_line: None,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by: file_path, line, col, message
        //
        // Message comparison keeps the order deterministic when several
        // issues land on the same position.
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.col.cmp(&other.col))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
