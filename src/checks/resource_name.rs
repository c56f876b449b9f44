//! Checks that widget ids in layout documents are formatted correctly.
//!
//! An id is valid when it uses lower `snake_case` and does not start with an
//! underscore after the `@+id/` (or `@id/`) prefix. Single-document check:
//! no cross-unit state.

use roxmltree::Document;

use crate::document::{FolderKind, SourceFile};
use crate::issue::{Issue, Rule};
use crate::resref::{ResourceKind, ResourceRef};
use crate::suppress::is_suppressed_at;

const ATTR_ID: &str = "id";

pub fn check(file: &SourceFile, doc: &Document) -> Vec<Issue> {
    if file.folder != FolderKind::Layout {
        return Vec::new();
    }

    let mut issues = Vec::new();
    for element in doc.descendants().filter(|n| n.is_element()) {
        for attr in element.attributes().filter(|a| a.name() == ATTR_ID) {
            let Some(reference) = ResourceRef::parse(attr.value()) else {
                continue;
            };
            if reference.kind != ResourceKind::Id {
                continue;
            }
            if is_well_formed(&reference.name) {
                continue;
            }
            if is_suppressed_at(element, Rule::ResourceNameFormat) {
                continue;
            }

            let Some((start, end)) = file.attr_value_span(attr) else {
                continue;
            };
            let (line, col) = file.line_col(start);
            issues.push(Issue::resource_name(
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

fn is_well_formed(name: &str) -> bool {
    !name.starts_with('_') && !name.contains(|c: char| c.is_ascii_uppercase())
}
