//! Cross-module detection of deprecated colour usages.
//!
//! This check gathers all colours declared in files whose name carries the
//! `_deprecated` marker - individual `<color>` definitions as well as whole
//! selectors - and flags every usage of those colours as an error, even when
//! the usage lives in a different module than the declaration.
//!
//! It runs in two phases. The per-unit phase ([`analyze_document`]) extracts
//! declarations and usages into a [`partial::PartialResult`] owned by that
//! unit. The merge phase ([`merge::merge`] + [`merge::report`]) unions every
//! unit's sealed partial result and emits diagnostics anchored at the
//! original usage sites.

pub mod declarations;
pub mod merge;
pub mod partial;
pub mod usages;

pub use declarations::DEPRECATED_MARKER;
pub use merge::{MergedResult, merge, report};
pub use partial::{PartialResult, PartialResultBuilder, UsageRecord};

use roxmltree::Document;

use crate::document::SourceFile;

/// Per-unit phase for one document: registry collection and usage recording
/// in a single pass over the parsed tree.
pub fn analyze_document(file: &SourceFile, doc: &Document, out: &mut PartialResultBuilder) {
    declarations::collect(file, doc, out);
    usages::record(file, doc, out);
}
