//! The `merge` command: merge phase only.
//!
//! Loads previously sealed partial results, merges them and reports every
//! deprecated-colour usage across units. Merging is order independent and
//! idempotent, so the same files can be merged in any order or more than
//! once with the same outcome.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::checks::deprecated_color;
use crate::store::PartialStore;

use super::{RunResult, finish};

pub fn run(partials: &[PathBuf], dir: Option<&Path>, verbose: bool) -> Result<RunResult> {
    let store = match dir {
        Some(dir) => {
            if !partials.is_empty() {
                bail!("pass either partial result files or --dir, not both");
            }
            PartialStore::load_dir(dir)?
        }
        None => {
            if partials.is_empty() {
                bail!("no partial results to merge");
            }
            PartialStore::load_files(partials.iter().map(PathBuf::as_path))?
        }
    };
    if verbose {
        eprintln!("Merging {} partial result(s)", store.len());
    }

    let merged = deprecated_color::merge(store.iter());
    let issues = deprecated_color::report(&merged);

    Ok(finish(issues, 0))
}
