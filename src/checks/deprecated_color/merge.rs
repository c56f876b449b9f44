//! The merge phase: union of all units' partial results and
//! cross-referencing of usages against the merged deprecation set.
//!
//! Merging is a pure union. Deprecated names union as sets; usages union as
//! a map keyed by each record's structural identity, so the operation is
//! commutative and idempotent and the order in which units arrive is
//! irrelevant by construction.

use std::collections::{BTreeMap, BTreeSet};

use crate::issue::Issue;

use super::partial::{PartialResult, UsageKey, UsageRecord};

/// The global view after all units' partial results have been combined.
#[derive(Debug, Default)]
pub struct MergedResult {
    pub all_deprecated_names: BTreeSet<String>,
    pub all_usages: BTreeMap<UsageKey, UsageRecord>,
}

pub fn merge<'a, I>(partials: I) -> MergedResult
where
    I: IntoIterator<Item = &'a PartialResult>,
{
    let mut merged = MergedResult::default();
    for partial in partials {
        merged
            .all_deprecated_names
            .extend(partial.deprecated_names.iter().cloned());
        for record in &partial.usages {
            merged.all_usages.insert(record.key(), record.clone());
        }
    }
    merged
}

/// Emits one diagnostic per usage of a deprecated name, at the usage's
/// recorded location. Silence on clean input: no deprecated names or no
/// usages means no diagnostics.
pub fn report(merged: &MergedResult) -> Vec<Issue> {
    if merged.all_deprecated_names.is_empty() || merged.all_usages.is_empty() {
        return Vec::new();
    }

    merged
        .all_usages
        .values()
        .filter(|usage| merged.all_deprecated_names.contains(&usage.name))
        .map(|usage| {
            if usage.has_span {
                Issue::deprecated_color(
                    &usage.file,
                    (usage.start, usage.end),
                    usage.line,
                    usage.col,
                    usage.source_line.clone(),
                )
            } else {
                Issue::deprecated_color_in_file(&usage.file)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use crate::issue::Rule;

    use super::super::partial::PartialResultBuilder;
    use super::*;

    fn usage(name: &str, file: &str, start: usize) -> UsageRecord {
        UsageRecord {
            name: name.to_string(),
            file: file.to_string(),
            start,
            end: start + 7 + name.len(),
            line: 1,
            col: start + 1,
            source_line: format!("@color/{}", name),
            has_span: true,
        }
    }

    fn declaring_unit(unit: &str, names: &[&str]) -> PartialResult {
        let mut builder = PartialResultBuilder::new(unit);
        for name in names {
            builder.add_deprecated(name.to_string());
        }
        builder.seal()
    }

    fn using_unit(unit: &str, usages: Vec<UsageRecord>) -> PartialResult {
        let mut builder = PartialResultBuilder::new(unit);
        for record in usages {
            builder.add_usage(record);
        }
        builder.seal()
    }

    #[test]
    fn cross_unit_declaration_flags_usage() {
        let lib = declaring_unit("lib", &["red_error"]);
        let app = using_unit("app", vec![usage("red_error", "app/res/layout/main.xml", 22)]);

        let issues = report(&merge([&lib, &app]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, Rule::DeprecatedColor);
        assert_eq!(issues[0].file_path, "app/res/layout/main.xml");
        assert_eq!(issues[0].span, Some((22, 38)));
    }

    #[test]
    fn merge_is_order_independent() {
        let lib = declaring_unit("lib", &["red_error", "old_blue"]);
        let app = using_unit(
            "app",
            vec![
                usage("red_error", "app/res/layout/main.xml", 22),
                usage("old_blue", "app/res/layout/other.xml", 30),
            ],
        );

        let forward = merge([&lib, &app]);
        let backward = merge([&app, &lib]);
        assert_eq!(forward.all_deprecated_names, backward.all_deprecated_names);
        assert_eq!(forward.all_usages, backward.all_usages);
        assert_eq!(report(&forward), report(&backward));
    }

    #[test]
    fn merge_is_idempotent() {
        let lib = declaring_unit("lib", &["red_error"]);
        let app = using_unit("app", vec![usage("red_error", "app/res/layout/main.xml", 22)]);

        let once = merge([&lib, &app]);
        let twice = merge([&lib, &app, &lib, &app]);
        assert_eq!(once.all_usages, twice.all_usages);
        assert_eq!(report(&once).len(), report(&twice).len());
    }

    #[test]
    fn no_deprecated_names_means_silence() {
        let app = using_unit("app", vec![usage("red_error", "app/res/layout/main.xml", 22)]);
        assert!(report(&merge([&app])).is_empty());
    }

    #[test]
    fn no_usages_means_silence() {
        let lib = declaring_unit("lib", &["red_error"]);
        assert!(report(&merge([&lib])).is_empty());
    }

    #[test]
    fn unrelated_usages_stay_silent() {
        let lib = declaring_unit("lib", &["red_error"]);
        let app = using_unit("app", vec![usage("perfectly_fine", "app/res/layout/main.xml", 22)]);
        assert!(report(&merge([&lib, &app])).is_empty());
    }

    #[test]
    fn spanless_usage_reports_file_level_location() {
        let lib = declaring_unit("lib", &["red_error"]);
        let mut record = usage("red_error", "app/res/layout/main.xml", 0);
        record.has_span = false;
        record.end = 0;
        let app = using_unit("app", vec![record]);

        let issues = report(&merge([&lib, &app]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].span, None);
        assert_eq!(issues[0].line, None);
    }

    #[test]
    fn same_bare_name_across_units_is_one_set() {
        let a = declaring_unit("a", &["red_error"]);
        let b = declaring_unit("b", &["red_error"]);
        let merged = merge([&a, &b]);
        assert_eq!(
            merged.all_deprecated_names,
            BTreeSet::from(["red_error".to_string()])
        );
    }
}
