//! Checks the formatting of binding expressions in layout documents.
//!
//! Team convention: binding expressions carry one whitespace between the
//! braces and the expression body, `@{ user.name }` rather than
//! `@{user.name}`. Applies to one-way (`@{...}`) and two-way (`@={...}`)
//! expressions. Single-document check: no cross-unit state.

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Document;

use crate::document::{FolderKind, SourceFile};
use crate::issue::{Issue, Rule};
use crate::suppress::is_suppressed_at;

const BINDING_PREFIX: &str = "@{";
const TWOWAY_BINDING_PREFIX: &str = "@={";

static VALID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@=?\{\s.*\s\}$").unwrap());

fn is_binding_expression(value: &str) -> bool {
    value.starts_with(BINDING_PREFIX) || value.starts_with(TWOWAY_BINDING_PREFIX)
}

pub fn check(file: &SourceFile, doc: &Document) -> Vec<Issue> {
    if file.folder != FolderKind::Layout {
        return Vec::new();
    }

    let mut issues = Vec::new();
    for element in doc.descendants().filter(|n| n.is_element()) {
        for attr in element.attributes() {
            let value = attr.value();
            if !is_binding_expression(value) || VALID_PATTERN.is_match(value) {
                continue;
            }
            if is_suppressed_at(element, Rule::BindingExpressionFormat) {
                continue;
            }

            let Some((start, end)) = file.attr_value_span(attr) else {
                continue;
            };
            let (line, col) = file.line_col(start);
            issues.push(Issue::binding_format(
                &file.path,
                (start, end),
                line,
                col,
                file.source_line(start),
            ));
        }
    }
    issues
}
