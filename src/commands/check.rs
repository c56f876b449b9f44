//! The `check` command: both phases in one process.
//!
//! Discovers every unit in the workspace, runs the per-unit phase across
//! them in parallel, then merges the sealed partial results and reports.

use std::path::Path;

use anyhow::Result;

use crate::analysis::{analyze_all, discover_units};
use crate::checks::CheckSet;
use crate::checks::deprecated_color;
use crate::config::Config;
use crate::store::PartialStore;

use super::{RunResult, finish};

pub fn run(workspace: &Path, set: &CheckSet, verbose: bool) -> Result<RunResult> {
    let config = Config::load(workspace)?;
    let units = discover_units(workspace, &config)?;
    if verbose {
        eprintln!("Found {} analysis unit(s)", units.len());
        for unit in &units {
            eprintln!("  unit '{}' at {}", unit.name, unit.res_root.display());
        }
    }

    let analyses = analyze_all(&units, workspace, &config, set);

    let mut issues = Vec::new();
    let mut files_checked = 0;
    let mut store = PartialStore::new();
    for analysis in analyses {
        files_checked += analysis.files_checked;
        issues.extend(analysis.issues);
        store.insert(analysis.partial);
    }

    if set.deprecated_color {
        if verbose {
            eprintln!("Merging {} partial result(s)", store.len());
        }
        let merged = deprecated_color::merge(store.iter());
        issues.extend(deprecated_color::report(&merged));
    }

    Ok(finish(issues, files_checked))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use crate::issue::Rule;

    use super::*;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn cross_module_deprecation_is_reported_once() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "lib/res/values/colors_deprecated.xml",
            r#"<resources><color name="red_error">#d6163e</color></resources>"#,
        );
        write(
            dir.path(),
            "app/res/layout/main.xml",
            r#"<TextView background="@color/red_error"/>"#,
        );

        let result = run(dir.path(), &CheckSet::default(), false).unwrap();
        let deprecated: Vec<_> = result
            .issues
            .iter()
            .filter(|i| i.rule == Rule::DeprecatedColor)
            .collect();
        assert_eq!(deprecated.len(), 1);
        assert!(deprecated[0].file_path.ends_with("app/res/layout/main.xml"));
        assert_eq!(result.error_count, 1);
    }

    #[test]
    fn clean_workspace_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "app/res/layout/main.xml",
            r#"<TextView background="@color/fine" id="@+id/header_title"/>"#,
        );
        let result = run(dir.path(), &CheckSet::default(), false).unwrap();
        assert!(result.issues.is_empty());
    }

    #[test]
    fn disabled_check_reports_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "app/res/values/colors_deprecated.xml",
            r#"<resources><color name="red_error">#d6163e</color></resources>"#,
        );
        write(
            dir.path(),
            "app/res/layout/main.xml",
            r#"<TextView background="@color/red_error"/>"#,
        );

        let set = CheckSet {
            deprecated_color: false,
            ..CheckSet::default()
        };
        let result = run(dir.path(), &set, false).unwrap();
        assert!(result.issues.is_empty());
    }
}
