//! Source documents and the folder categories they belong to.
//!
//! A resource pack groups XML documents into folders whose names determine
//! how the documents are interpreted: flat declarations in `values*`, colour
//! selectors in `color*`, attributed widget trees in `layout*` and
//! `drawable*`. Folder names may carry qualifiers after a dash
//! (`values-night`), which do not change the category.

use std::ops::Range;

use roxmltree::{Attribute, Node};

use crate::utils::{line_at, line_col, xml_stem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderKind {
    Values,
    Color,
    Layout,
    Drawable,
}

impl FolderKind {
    /// Categorizes a resource folder by its name, ignoring any `-qualifier`
    /// suffix. Returns `None` for folders this tool does not analyze.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        let base = name.split('-').next().unwrap_or(name);
        match base {
            "values" => Some(FolderKind::Values),
            "color" => Some(FolderKind::Color),
            "layout" => Some(FolderKind::Layout),
            "drawable" => Some(FolderKind::Drawable),
            _ => None,
        }
    }

    /// Whether documents in this folder can declare deprecated colours.
    pub fn hosts_declarations(self) -> bool {
        matches!(self, FolderKind::Values | FolderKind::Color)
    }
}

/// One XML document, already read into memory.
///
/// `path` is relative to the workspace root and doubles as the document's
/// stable identity in diagnostics and usage records.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: String,
    pub file_name: String,
    pub folder: FolderKind,
    pub contents: String,
}

impl SourceFile {
    /// The file name without its `.xml` extension.
    pub fn stem(&self) -> &str {
        xml_stem(&self.file_name)
    }

    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        line_col(&self.contents, offset)
    }

    pub fn source_line(&self, offset: usize) -> String {
        line_at(&self.contents, offset).to_string()
    }

    /// Half-open byte span of an attribute's value, excluding the quotes.
    ///
    /// Derived from the attribute's raw range in the document, so the span
    /// points at the exact bytes of the value as written, not the unescaped
    /// form.
    pub fn attr_value_span(&self, attr: Attribute) -> Option<(usize, usize)> {
        let range = attr.range();
        let raw = self.contents.get(range.clone())?;
        let open = raw.find(['"', '\''])?;
        let close = raw.rfind(['"', '\''])?;
        if open >= close {
            return None;
        }
        Some((range.start + open + 1, range.start + close))
    }

    /// Half-open byte span of a node (element, text or comment) in the
    /// document.
    pub fn node_span(&self, node: Node) -> (usize, usize) {
        let Range { start, end } = node.range();
        (start, end)
    }
}

/// The non-empty text content of an element whose only meaningful child is a
/// text node, together with that text node.
pub fn text_only_child<'a, 'input>(
    element: Node<'a, 'input>,
) -> Option<(&'a str, Node<'a, 'input>)> {
    let mut children = element.children().filter(|c| !c.is_comment());
    let child = children.next()?;
    if children.next().is_some() || !child.is_text() {
        return None;
    }
    let text = child.text()?;
    if text.trim().is_empty() {
        return None;
    }
    Some((text, child))
}
