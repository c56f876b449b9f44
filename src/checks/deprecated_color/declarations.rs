//! Collection of deprecated colour declarations from one document.
//!
//! A document declares deprecated colours when it lives in a declaration
//! folder (`values*` or `color*`) and its file name carries the
//! `_deprecated` marker. A selector document deprecates itself as a unit
//! under its own file stem; any other document contributes the `name`
//! attribute of every `<color>` entry it holds.

use roxmltree::Document;

use crate::document::SourceFile;

use super::partial::PartialResultBuilder;

/// File-name convention marking a document's declarations as deprecated.
pub const DEPRECATED_MARKER: &str = "_deprecated";

const TAG_SELECTOR: &str = "selector";
const TAG_COLOR: &str = "color";
const ATTR_NAME: &str = "name";

pub fn collect(file: &SourceFile, doc: &Document, out: &mut PartialResultBuilder) {
    if !file.folder.hosts_declarations() {
        return;
    }
    if !file.file_name.contains(DEPRECATED_MARKER) {
        return;
    }

    let root = doc.root_element();

    // A selector is deprecated as a whole: the colour name is the file stem,
    // and the selector's inner items are deliberately not registered.
    if root.has_tag_name(TAG_SELECTOR) {
        out.add_deprecated(file.stem().to_string());
        return;
    }

    for entry in root
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name(TAG_COLOR))
    {
        if let Some(name) = entry.attribute(ATTR_NAME) {
            out.add_deprecated(name.to_string());
        }
    }
}
