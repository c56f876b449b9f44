//! The `analyze` command: per-unit phase only.
//!
//! Runs the deprecated-colour declaration and usage scan (plus the
//! single-document checks) over one module, seals its partial result, and
//! writes it to disk for a later `merge`.

use std::path::Path;

use anyhow::{Result, bail};

use crate::analysis::{AnalysisUnit, analyze_unit};
use crate::checks::CheckSet;
use crate::config::Config;
use crate::store;

use super::{RunResult, finish};

pub fn run(
    workspace: &Path,
    module: &str,
    out: &Path,
    set: &CheckSet,
    verbose: bool,
) -> Result<RunResult> {
    let config = Config::load(workspace)?;

    let module_dir = if module == "." {
        workspace.to_path_buf()
    } else {
        workspace.join(module)
    };
    let res_root = module_dir.join(&config.resource_root);
    if !res_root.is_dir() {
        bail!(
            "module '{}' has no '{}' directory",
            module,
            config.resource_root
        );
    }

    let unit = AnalysisUnit {
        name: module.to_string(),
        res_root,
    };
    if verbose {
        eprintln!("Analyzing unit '{}' at {}", unit.name, unit.res_root.display());
    }

    let analysis = analyze_unit(&unit, workspace, &config, set);
    if verbose {
        eprintln!(
            "Sealed partial result: {} deprecated name(s), {} usage(s)",
            analysis.partial.deprecated_names.len(),
            analysis.partial.usages.len()
        );
    }
    store::save_file(&analysis.partial, out)?;

    Ok(finish(analysis.issues, analysis.files_checked))
}
