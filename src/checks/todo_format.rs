//! Checks that TODO comments carry an assignee and a date.
//!
//! Required format: `TODO-Assignee (yyyy-mm-dd): additional comments`. The
//! check walks every comment in a document; comments that do not start with
//! `TODO` (any case) are left alone. Failures are reported most specific
//! first: a missing or invalid date, then a missing assignee, then the
//! catch-all improper-format case (e.g. fields in the wrong order).

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::{Document, Node};

use crate::document::SourceFile;
use crate::issue::{Issue, Rule};
use crate::suppress::is_suppressed_at;

/// Years accepted in TODO dates.
const YEAR_RANGE: std::ops::RangeInclusive<u32> = 2024..=2099;

/// The full required shape: `TODO-Assignee (yyyy-mm-dd): ...`.
static COMPLETE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"TODO-[^:(\s-]+ \(20[0-9]{2}-[01][0-9]-[0-3][0-9]\):").unwrap()
});

/// Captures whatever sits between the first parentheses after `TODO`.
static DATE_ONLY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TODO.*?\((?P<date>[^)]*)\)").unwrap());

/// Captures a one-word assignee after `TODO-`, requiring parentheses later.
static ASSIGNEE_ONLY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TODO-*(?P<assignee>[^:(\s-]+).*\(.*\)").unwrap());

/// Byte offset of a comment's text within the document (`<!--` is skipped).
const COMMENT_TEXT_OFFSET: usize = 4;

pub fn check(file: &SourceFile, doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();
    for node in doc.descendants().filter(|n| n.is_comment()) {
        let Some(text) = node.text() else {
            continue;
        };
        let sanitized = text.trim_start();
        if !sanitized
            .get(..4)
            .is_some_and(|head| head.eq_ignore_ascii_case("TODO"))
        {
            continue;
        }
        // The shape pattern alone accepts impossible dates like `2026-02-30`;
        // a comment is clean only when the date is a real calendar date too.
        if COMPLETE_PATTERN.is_match(text) && has_valid_date(text) {
            continue;
        }
        if let Some(issue) = report(file, node, text) {
            issues.push(issue);
        }
    }
    issues
}

fn report(file: &SourceFile, node: Node, text: &str) -> Option<Issue> {
    let (rule, message, span) = classify(file, node, text);
    if is_suppressed_at(node, rule) {
        return None;
    }
    let (line, col) = file.line_col(span.0);
    Some(Issue::todo(
        rule,
        message,
        &file.path,
        span,
        line,
        col,
        file.source_line(span.0),
    ))
}

fn classify(
    file: &SourceFile,
    node: Node,
    text: &str,
) -> (Rule, &'static str, (usize, usize)) {
    let comment_span = file.node_span(node);
    let text_base = comment_span.0 + COMMENT_TEXT_OFFSET;

    // Date issues take precedence: absent, empty, or not a real date.
    let Some(captures) = DATE_ONLY_PATTERN.captures(text) else {
        return (Rule::TodoMissingDate, "Missing date", comment_span);
    };
    let Some(date) = captures.name("date") else {
        return (Rule::TodoMissingDate, "Missing date", comment_span);
    };
    let value = date.as_str();
    if value.is_empty() || !is_valid_date(value) {
        let message = if value.is_empty() {
            "Missing date"
        } else {
            "Invalid date"
        };
        // Span covers the parentheses around the date.
        let span = (
            text_base + date.start() - 1,
            text_base + date.end() + 1,
        );
        return (Rule::TodoMissingDate, message, span);
    }

    // Date is fine; is the assignee there?
    let has_assignee = ASSIGNEE_ONLY_PATTERN
        .captures(text)
        .and_then(|c| c.name("assignee"))
        .is_some_and(|m| !m.as_str().trim().is_empty());
    if !has_assignee {
        return (Rule::TodoMissingAssignee, "Missing assignee", comment_span);
    }

    // Everything is present but arranged wrong.
    (Rule::TodoImproperFormat, "Improper format", comment_span)
}

fn has_valid_date(text: &str) -> bool {
    DATE_ONLY_PATTERN
        .captures(text)
        .and_then(|c| c.name("date"))
        .is_some_and(|date| is_valid_date(date.as_str()))
}

fn is_valid_date(value: &str) -> bool {
    let mut parts = value.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return false;
    }
    let (Ok(year), Ok(month), Ok(day)) = (
        year.parse::<u32>(),
        month.parse::<u32>(),
        day.parse::<u32>(),
    ) else {
        return false;
    };
    if !YEAR_RANGE.contains(&year) || !(1..=12).contains(&month) {
        return false;
    }
    day >= 1 && day <= days_in_month(year, month)
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        _ => 0,
    }
}
