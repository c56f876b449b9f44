//! Per-unit findings and their serializable form.
//!
//! A [`PartialResultBuilder`] accumulates one unit's deprecated names and
//! colour usages during document traversal, then seals into an immutable
//! [`PartialResult`] exactly once. The sealed form is plain data with serde
//! support, so it can cross a process boundary (JSON) and be merged later.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One recorded usage of a colour resource.
///
/// `start..end` is the half-open byte span of the raw value inside `file`.
/// Line, column and the source line text are captured at record time so a
/// diagnostic can be printed in a process that never read `file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub name: String,
    pub file: String,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub col: usize,
    pub source_line: String,
    /// False when no byte span could be resolved for the site; the span
    /// fields are zeroed and diagnostics fall back to a file-level location.
    #[serde(default = "default_true")]
    pub has_span: bool,
}

fn default_true() -> bool {
    true
}

/// Structural identity of a usage: the referenced name plus the exact place
/// it was found. Distinct usages can never map to the same key, and the same
/// usage always maps to the same key, which is what makes merging idempotent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UsageKey {
    pub name: String,
    pub file: String,
    pub start: usize,
}

impl UsageRecord {
    pub fn key(&self) -> UsageKey {
        UsageKey {
            name: self.name.clone(),
            file: self.file.clone(),
            start: self.start,
        }
    }
}

/// One analysis unit's sealed findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialResult {
    pub unit: String,
    pub deprecated_names: BTreeSet<String>,
    pub usages: Vec<UsageRecord>,
}

/// Mutable accumulator owned by exactly one unit during its traversal.
#[derive(Debug)]
pub struct PartialResultBuilder {
    unit: String,
    deprecated_names: BTreeSet<String>,
    usages: BTreeMap<UsageKey, UsageRecord>,
}

impl PartialResultBuilder {
    pub fn new(unit: &str) -> Self {
        Self {
            unit: unit.to_string(),
            deprecated_names: BTreeSet::new(),
            usages: BTreeMap::new(),
        }
    }

    /// Registers a deprecated name. Duplicates collapse silently.
    pub fn add_deprecated(&mut self, name: String) {
        self.deprecated_names.insert(name);
    }

    /// Records a usage under its structural key. Re-recording the same site
    /// replaces the identical record, so the operation is idempotent.
    pub fn add_usage(&mut self, record: UsageRecord) {
        self.usages.insert(record.key(), record);
    }

    /// Seals the accumulated findings. The builder is consumed; the result
    /// is never mutated afterwards.
    pub fn seal(self) -> PartialResult {
        PartialResult {
            unit: self.unit,
            deprecated_names: self.deprecated_names,
            usages: self.usages.into_values().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    pub(crate) fn usage(name: &str, file: &str, start: usize) -> UsageRecord {
        UsageRecord {
            name: name.to_string(),
            file: file.to_string(),
            start,
            end: start + name.len(),
            line: 1,
            col: start + 1,
            source_line: format!("@color/{}", name),
            has_span: true,
        }
    }

    #[test]
    fn same_name_different_sites_do_not_collide() {
        let mut builder = PartialResultBuilder::new("app");
        builder.add_usage(usage("red_error", "app/res/layout/a.xml", 10));
        builder.add_usage(usage("red_error", "app/res/layout/a.xml", 50));
        builder.add_usage(usage("red_error", "app/res/layout/b.xml", 10));
        let sealed = builder.seal();
        assert_eq!(sealed.usages.len(), 3);
    }

    #[test]
    fn re_recording_a_site_is_idempotent() {
        let mut builder = PartialResultBuilder::new("app");
        builder.add_usage(usage("red_error", "app/res/layout/a.xml", 10));
        builder.add_usage(usage("red_error", "app/res/layout/a.xml", 10));
        assert_eq!(builder.seal().usages.len(), 1);
    }

    #[test]
    fn deprecated_names_have_set_semantics() {
        let mut builder = PartialResultBuilder::new("lib");
        builder.add_deprecated("red_error".to_string());
        builder.add_deprecated("red_error".to_string());
        builder.add_deprecated("old_blue".to_string());
        let sealed = builder.seal();
        assert_eq!(sealed.deprecated_names.len(), 2);
        assert!(sealed.deprecated_names.contains("red_error"));
    }

    #[test]
    fn json_round_trip_preserves_everything() {
        let mut builder = PartialResultBuilder::new("lib");
        builder.add_deprecated("red_error".to_string());
        builder.add_usage(usage("red_error", "lib/res/layout/a.xml", 42));
        let sealed = builder.seal();

        let json = serde_json::to_string(&sealed).unwrap();
        let back: PartialResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sealed);
    }
}
