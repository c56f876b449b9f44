//! Recording of colour usages from one document.
//!
//! Every element of the document is visited once, carrying inherited
//! suppression state top-down. Candidate values are attribute values (any
//! element, any attribute) and the text content of `<color>`/`<item>`
//! elements, which is how themes and styles express colour values. A value
//! is recorded only when it parses as a whole-value, non-platform colour
//! reference; references embedded inside a larger expression are not
//! detected.

use roxmltree::{Document, Node};

use crate::document::{SourceFile, text_only_child};
use crate::issue::Rule;
use crate::resref::{ResourceKind, ResourceRef};
use crate::suppress::SuppressionState;

use super::partial::{PartialResultBuilder, UsageRecord};

const TEXT_VALUE_TAGS: [&str; 2] = ["color", "item"];

pub fn record(file: &SourceFile, doc: &Document, out: &mut PartialResultBuilder) {
    visit(file, doc.root_element(), &SuppressionState::default(), out);
}

fn visit(
    file: &SourceFile,
    element: Node,
    inherited: &SuppressionState,
    out: &mut PartialResultBuilder,
) {
    let state = inherited.enter(element);

    if !state.is_suppressed(Rule::DeprecatedColor) {
        for attr in element.attributes() {
            record_value(file, attr.value(), file.attr_value_span(attr), out);
        }

        if TEXT_VALUE_TAGS.contains(&element.tag_name().name())
            && let Some((text, text_node)) = text_only_child(element)
        {
            record_value(file, text, Some(file.node_span(text_node)), out);
        }
    }

    for child in element.children().filter(|c| c.is_element()) {
        visit(file, child, &state, out);
    }
}

fn record_value(
    file: &SourceFile,
    raw: &str,
    span: Option<(usize, usize)>,
    out: &mut PartialResultBuilder,
) {
    let Some(reference) = ResourceRef::parse(raw) else {
        return;
    };
    if reference.kind != ResourceKind::Color || reference.is_platform() {
        return;
    }

    // A missing span should not drop the finding; fall back to the start of
    // the file and let the reporter degrade to a file-level location.
    let has_span = span.is_some();
    let (start, end) = span.unwrap_or((0, 0));
    let (line, col) = file.line_col(start);

    out.add_usage(UsageRecord {
        name: reference.name,
        file: file.path.clone(),
        start,
        end,
        line,
        col,
        source_line: file.source_line(start),
        has_span,
    });
}

#[cfg(test)]
mod tests {
    use crate::document::FolderKind;

    use super::*;

    fn record_from(folder: FolderKind, xml: &str) -> Vec<UsageRecord> {
        let file = SourceFile {
            path: "app/res/layout/main.xml".to_string(),
            file_name: "main.xml".to_string(),
            folder,
            contents: xml.to_string(),
        };
        let doc = Document::parse(&file.contents).unwrap();
        let mut builder = PartialResultBuilder::new("app");
        record(&file, &doc, &mut builder);
        builder.seal().usages
    }

    #[test]
    fn records_attribute_usage_at_value_span() {
        let xml = r#"<TextView background="@color/red_error"/>"#;
        let usages = record_from(FolderKind::Layout, xml);
        assert_eq!(usages.len(), 1);
        let usage = &usages[0];
        assert_eq!(usage.name, "red_error");
        assert_eq!(&xml[usage.start..usage.end], "@color/red_error");
        assert_eq!((usage.line, usage.col), (1, 23));
        assert!(usage.has_span);
    }

    #[test]
    fn records_item_text_usage() {
        let xml = "<style name=\"Brand.Span\">\n    <item name=\"textColor\">@color/red_error</item>\n</style>";
        let usages = record_from(FolderKind::Values, xml);
        assert_eq!(usages.len(), 1);
        let usage = &usages[0];
        assert_eq!(usage.name, "red_error");
        assert_eq!(&xml[usage.start..usage.end], "@color/red_error");
        assert_eq!(usage.line, 2);
    }

    #[test]
    fn ignores_platform_and_non_colour_values() {
        let xml = r##"<View a="@android:color/white" b="@drawable/icon" c="#ff0000" d="plain"/>"##;
        assert!(record_from(FolderKind::Layout, xml).is_empty());
    }

    #[test]
    fn ignores_text_outside_colour_bearing_tags() {
        let xml = "<string name=\"x\">@color/red_error is great</string>";
        assert!(record_from(FolderKind::Values, xml).is_empty());
    }

    #[test]
    fn selector_items_record_their_colours() {
        let xml = r#"<selector>
            <item color="@color/pressed" state_pressed="true"/>
            <item color="@color/normal"/>
        </selector>"#;
        let usages = record_from(FolderKind::Color, xml);
        let names: Vec<_> = usages.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["normal", "pressed"]);
    }

    #[test]
    fn suppression_on_element_skips_its_attributes() {
        let xml = r#"<root xmlns:tools="http://example.com/tools">
            <View tools:ignore="deprecated-color" background="@color/red_error"/>
            <View background="@color/old_blue"/>
        </root>"#;
        let usages = record_from(FolderKind::Layout, xml);
        assert_eq!(usages.len(), 1);
        assert_eq!(usages[0].name, "old_blue");
    }

    #[test]
    fn suppression_on_ancestor_covers_descendants() {
        let xml = r#"<root xmlns:tools="http://example.com/tools" tools:ignore="deprecated-color">
            <Group><View background="@color/red_error"/></Group>
        </root>"#;
        assert!(record_from(FolderKind::Layout, xml).is_empty());
    }

    #[test]
    fn unrelated_suppression_does_not_filter() {
        let xml = r#"<root xmlns:tools="http://example.com/tools">
            <View tools:ignore="resource-name-format" background="@color/red_error"/>
        </root>"#;
        assert_eq!(record_from(FolderKind::Layout, xml).len(), 1);
    }

    #[test]
    fn embedded_references_are_not_detected() {
        // Documented limitation: only whole-value references are recorded.
        let xml = r#"<View background="@{cond ? @color/red_error : @color/other}"/>"#;
        assert!(record_from(FolderKind::Layout, xml).is_empty());
    }
}
