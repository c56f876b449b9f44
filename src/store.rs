//! Persistence boundary between the per-unit phase and the merge phase.
//!
//! A [`PartialStore`] is a keyed bag of sealed partial results, one per
//! analysis unit. It can live purely in memory (the `check` command) or
//! round-trip through JSON files on disk (`analyze` writes one file per
//! unit, `merge` reads them back), so the two phases may run in different
//! processes.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::checks::deprecated_color::PartialResult;

#[derive(Debug, Default)]
pub struct PartialStore {
    entries: BTreeMap<String, PartialResult>,
}

impl PartialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a unit's sealed result under its unit id. Storing the same
    /// unit again replaces the entry, keeping the store idempotent.
    pub fn insert(&mut self, partial: PartialResult) {
        self.entries.insert(partial.unit.clone(), partial);
    }

    /// All known units' results, in stable unit-id order.
    pub fn iter(&self) -> impl Iterator<Item = &PartialResult> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes one `<unit>.json` per entry into `dir`, creating it if needed.
    pub fn save_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        for partial in self.entries.values() {
            let path = dir.join(format!("{}.json", sanitize_unit_id(&partial.unit)));
            save_file(partial, &path)?;
        }
        Ok(())
    }

    /// Reads every `*.json` in `dir` back into a store.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut store = Self::new();
        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                store.insert(load_file(&path)?);
            }
        }
        Ok(store)
    }

    pub fn load_files<'a, I>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let mut store = Self::new();
        for path in paths {
            store.insert(load_file(path)?);
        }
        Ok(store)
    }
}

pub fn save_file(partial: &PartialResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(partial)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

pub fn load_file(path: &Path) -> Result<PartialResult> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid partial result in {}", path.display()))
}

/// Unit ids may contain path separators (nested module paths); encode them
/// for use as file names. `_` acts as the escape character so distinct unit
/// ids can never map to the same file: `feature/search` and `feature_search`
/// encode to `feature_ssearch` and `feature_usearch`.
fn sanitize_unit_id(unit: &str) -> String {
    let mut encoded = String::with_capacity(unit.len());
    for c in unit.chars() {
        match c {
            '_' => encoded.push_str("_u"),
            '/' => encoded.push_str("_s"),
            '\\' => encoded.push_str("_b"),
            _ => encoded.push(c),
        }
    }
    encoded
}
