//! Module discovery and the per-unit analysis phase.
//!
//! Units are independent: each one is scanned and analyzed on its own,
//! owning its partial-result builder exclusively, so the units run in
//! parallel. A document that cannot be read or parsed contributes a
//! `parse-error` issue and nothing else; its siblings are unaffected.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::checks::{self, CheckSet};
use crate::checks::deprecated_color::{PartialResult, PartialResultBuilder};
use crate::config::Config;
use crate::document::{FolderKind, SourceFile};
use crate::issue::Issue;

/// One analysis unit: a module directory with a resource root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisUnit {
    /// Stable unit id: the module path relative to the workspace root, or
    /// `.` for a workspace that is itself a module.
    pub name: String,
    pub res_root: PathBuf,
}

/// Everything the per-unit phase produced for one unit.
#[derive(Debug)]
pub struct UnitAnalysis {
    pub partial: PartialResult,
    /// Issues from the single-document checks, plus parse errors.
    pub issues: Vec<Issue>,
    pub files_checked: usize,
}

/// Finds the analysis units under `workspace`.
///
/// With explicit `modules` in the config those are used as-is; otherwise
/// every direct subdirectory containing the resource root counts, plus the
/// workspace itself when it has one.
pub fn discover_units(workspace: &Path, config: &Config) -> Result<Vec<AnalysisUnit>> {
    let mut units = Vec::new();

    if !config.modules.is_empty() {
        for module in &config.modules {
            let res_root = workspace.join(module).join(&config.resource_root);
            if !res_root.is_dir() {
                anyhow::bail!(
                    "configured module '{}' has no '{}' directory",
                    module,
                    config.resource_root
                );
            }
            units.push(AnalysisUnit {
                name: module.clone(),
                res_root,
            });
        }
        units.sort_by(|a, b| a.name.cmp(&b.name));
        return Ok(units);
    }

    let own_res = workspace.join(&config.resource_root);
    if own_res.is_dir() {
        units.push(AnalysisUnit {
            name: ".".to_string(),
            res_root: own_res,
        });
    }

    let entries = fs::read_dir(workspace)
        .with_context(|| format!("failed to read {}", workspace.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let res_root = entry.path().join(&config.resource_root);
        if res_root.is_dir() {
            units.push(AnalysisUnit {
                name: entry.file_name().to_string_lossy().into_owned(),
                res_root,
            });
        }
    }

    units.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(units)
}

/// Runs the per-unit phase for every unit, in parallel.
pub fn analyze_all(
    units: &[AnalysisUnit],
    workspace: &Path,
    config: &Config,
    set: &CheckSet,
) -> Vec<UnitAnalysis> {
    units
        .par_iter()
        .map(|unit| analyze_unit(unit, workspace, config, set))
        .collect()
}

/// Runs the per-unit phase for one unit: scans its resource tree, analyzes
/// each document, and seals the unit's partial result.
pub fn analyze_unit(
    unit: &AnalysisUnit,
    workspace: &Path,
    config: &Config,
    set: &CheckSet,
) -> UnitAnalysis {
    let mut builder = PartialResultBuilder::new(&unit.name);
    let mut issues = Vec::new();
    let files = scan_unit(unit, workspace, config, &mut issues);

    for file in &files {
        match roxmltree::Document::parse(&file.contents) {
            Ok(doc) => {
                if set.deprecated_color {
                    checks::deprecated_color::analyze_document(file, &doc, &mut builder);
                }
                if set.resource_name {
                    issues.extend(checks::resource_name::check(file, &doc));
                }
                if set.binding_format {
                    issues.extend(checks::binding_format::check(file, &doc));
                }
                if set.todo_format {
                    issues.extend(checks::todo_format::check(file, &doc));
                }
            }
            Err(err) => issues.push(Issue::parse_error(&file.path, &err.to_string())),
        }
    }

    UnitAnalysis {
        partial: builder.seal(),
        issues,
        files_checked: files.len(),
    }
}

/// Collects the unit's XML documents. Unreadable files become parse-error
/// issues rather than aborting the scan.
fn scan_unit(
    unit: &AnalysisUnit,
    workspace: &Path,
    config: &Config,
    issues: &mut Vec<Issue>,
) -> Vec<SourceFile> {
    let mut files = Vec::new();

    for entry in WalkDir::new(&unit.res_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "xml") {
            continue;
        }
        let Some(folder) = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|name| name.to_str())
            .and_then(FolderKind::from_dir_name)
        else {
            continue;
        };

        let relative = path
            .strip_prefix(workspace)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        if config.is_ignored(&relative) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        match fs::read_to_string(path) {
            Ok(contents) => files.push(SourceFile {
                path: relative,
                file_name,
                folder,
                contents,
            }),
            Err(err) => issues.push(Issue::parse_error(&relative, &err.to_string())),
        }
    }

    files
}
